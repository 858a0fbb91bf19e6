/*
Copyright (c) 2023 Collin Ogren

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use std::fmt;
use crate::errors::{LeaderboardError, Result};
use crate::player::Player;
use crate::results_sorter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum SortAlgorithm {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
    Heap,
    Counting,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 7] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Selection,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
        SortAlgorithm::Counting,
    ];

    /// Maps a 1-based menu code to an algorithm.
    pub fn from_choice(choice: i64) -> Result<Self> {
        usize::try_from(choice)
            .ok()
            .and_then(|c| c.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| LeaderboardError::UnrecognizedChoice { menu: "sorting algorithm", choice: choice.to_string() })
    }

    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Merge => "Merge Sort",
            SortAlgorithm::Quick => "Quick Sort",
            SortAlgorithm::Heap => "Heap Sort",
            SortAlgorithm::Counting => "Counting Sort",
        }
    }

    pub fn complexity(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble | SortAlgorithm::Insertion | SortAlgorithm::Selection => "Time: O(n^2), Space: O(1)",
            SortAlgorithm::Merge => "Time: O(n log n), Space: O(n)",
            SortAlgorithm::Quick => "Time: O(n log n) avg / O(n^2) worst, Space: O(log n)",
            SortAlgorithm::Heap => "Time: O(n log n), Space: O(1)",
            SortAlgorithm::Counting => "Time: O(n + k), Space: O(n + k)",
        }
    }

    /// Whether players with equal scores come out in their input order.
    pub fn is_stable(&self) -> bool {
        matches!(
            self,
            SortAlgorithm::Bubble | SortAlgorithm::Insertion | SortAlgorithm::Merge | SortAlgorithm::Counting
        )
    }

    pub fn sort(&self, players: &mut [Player]) {
        match self {
            SortAlgorithm::Bubble => results_sorter::bubble_sort(players),
            SortAlgorithm::Insertion => results_sorter::insertion_sort(players),
            SortAlgorithm::Selection => results_sorter::selection_sort(players),
            SortAlgorithm::Merge => results_sorter::merge_sort(players),
            SortAlgorithm::Quick => results_sorter::quick_sort(players),
            SortAlgorithm::Heap => results_sorter::heap_sort(players),
            SortAlgorithm::Counting => results_sorter::counting_sort(players),
        }
    }

    pub fn sorted(&self, players: &[Player]) -> Vec<Player> {
        let mut ordered = players.to_vec();
        self.sort(&mut ordered);
        ordered
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The ranking rule every algorithm shares: a higher score ranks first.
pub fn ranks_before(a: &Player, b: &Player) -> bool {
    a.score > b.score
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, SortAlgorithm::Bubble)]
    #[case(4, SortAlgorithm::Merge)]
    #[case(7, SortAlgorithm::Counting)]
    fn test_from_choice(#[case] choice: i64, #[case] expected: SortAlgorithm) {
        assert_eq!(SortAlgorithm::from_choice(choice).unwrap(), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(8)]
    #[case(-1)]
    fn test_from_choice_rejects_unknown_codes(#[case] choice: i64) {
        match SortAlgorithm::from_choice(choice) {
            Err(LeaderboardError::UnrecognizedChoice { choice: c, .. }) => assert_eq!(c, choice.to_string()),
            other => panic!("expected UnrecognizedChoice, got {:?}", other),
        }
    }

    #[test]
    fn test_stability_classes() {
        let stable: Vec<_> = SortAlgorithm::ALL.iter().filter(|a| a.is_stable()).map(|a| a.name()).collect();
        assert_eq!(stable, vec!["Bubble Sort", "Insertion Sort", "Merge Sort", "Counting Sort"]);
    }

    #[test]
    fn test_sort_dispatches_to_each_routine() {
        for algorithm in SortAlgorithm::ALL {
            let mut players = vec![Player::new("Cara", 30).unwrap(), Player::new("Bob", 80).unwrap()];
            algorithm.sort(&mut players);
            assert_eq!(players[0].name(), "Bob", "{}", algorithm);
        }
    }

    #[test]
    fn test_sorted_leaves_input_alone() {
        let players = vec![Player::new("Cara", 30).unwrap(), Player::new("Bob", 80).unwrap(), Player::new("Eve", 80).unwrap()];
        let ordered = SortAlgorithm::Merge.sorted(&players);

        let names: Vec<&str> = ordered.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Bob", "Eve", "Cara"]);
        assert_eq!(players[0].name(), "Cara");
    }

    #[test]
    fn test_ranks_before() {
        let high = Player::new("high", 10).unwrap();
        let low = Player::new("low", 9).unwrap();
        assert!(ranks_before(&high, &low));
        assert!(!ranks_before(&low, &high));
        assert!(!ranks_before(&high, &high.clone()));
    }

    #[test]
    fn test_complexity_labels() {
        assert_eq!(SortAlgorithm::Counting.complexity(), "Time: O(n + k), Space: O(n + k)");
        assert_eq!(SortAlgorithm::Merge.to_string(), "Merge Sort");
    }
}
