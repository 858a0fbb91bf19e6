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

use std::time::Instant;
use crate::errors::{LeaderboardError, Result};
use crate::player::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum SearchMethod {
    Linear,
    Binary,
}

impl SearchMethod {
    pub fn from_choice(choice: i64) -> Result<Self> {
        match choice {
            1 => Ok(SearchMethod::Linear),
            2 => Ok(SearchMethod::Binary),
            _ => Err(LeaderboardError::UnrecognizedChoice { menu: "search method", choice: choice.to_string() }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SearchMethod::Linear => "Linear Search",
            SearchMethod::Binary => "Binary Search",
        }
    }
}

pub struct SearchOutcome {
    pub(crate) method: SearchMethod,
    pub(crate) found: Option<Player>,
    pub(crate) elapsed_ms: f64,
}

impl SearchOutcome {
    pub fn found(&self) -> Option<&Player> {
        self.found.as_ref()
    }
}

pub fn linear_search(players: &[Player], name: &str) -> Option<usize> {
    players.iter().position(|p| p.name == name)
}

/// Looks up `name` in players sorted ascending by name (see [`sort_by_name`]).
/// Unsorted input gives no guarantee about the answer.
pub fn binary_search(players: &[Player], name: &str) -> Option<usize> {
    let mut low = 0;
    let mut high = players.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match players[mid].name.as_str().cmp(name) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Greater => high = mid,
        }
    }

    None
}

pub fn sort_by_name(players: &[Player]) -> Vec<Player> {
    let mut sorted = players.to_vec();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    sorted
}

// Binary search pays for the name sort on every lookup; it is timed along with the search.
pub fn find_player(players: &[Player], name: &str, method: SearchMethod) -> SearchOutcome {
    let start = Instant::now();

    let found = match method {
        SearchMethod::Linear => linear_search(players, name).map(|i| players[i].clone()),
        SearchMethod::Binary => {
            let sorted = sort_by_name(players);
            binary_search(&sorted, name).map(|i| sorted[i].clone())
        }
    };

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    tracing::debug!(method = method.name(), player = name, found = found.is_some(), elapsed_ms, "search finished");

    SearchOutcome {
        method,
        found,
        elapsed_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn roster() -> Vec<Player> {
        ["Mallory", "alice", "Bob", "Eve", "Zed", "Alice", "Bob"]
            .iter()
            .enumerate()
            .map(|(i, n)| Player::new(n, i as i64 * 10).unwrap())
            .collect()
    }

    #[test]
    fn test_linear_search_finds_first_match() {
        let players = roster();
        assert_eq!(linear_search(&players, "Bob"), Some(2));
        assert_eq!(linear_search(&players, "alice"), Some(1));
    }

    #[test]
    fn test_linear_search_every_present_name() {
        let players = roster();
        for player in &players {
            let i = linear_search(&players, player.name()).unwrap();
            assert_eq!(players[i].name(), player.name());
        }
    }

    #[rstest]
    #[case("X")]
    #[case("bob")]
    #[case("")]
    fn test_linear_search_absent(#[case] name: &str) {
        assert_eq!(linear_search(&roster(), name), None);
        assert_eq!(linear_search(&[], name), None);
    }

    #[test]
    fn test_binary_search_single_record() {
        let players = vec![Player::new("Bob", 80).unwrap()];
        assert_eq!(binary_search(&players, "Bob"), Some(0));
        assert_eq!(binary_search(&players, "Alice"), None);
        assert_eq!(binary_search(&[], "Bob"), None);
    }

    #[test]
    fn test_binary_search_unique_sorted_names() {
        let names = ["Alice", "Bob", "Cara", "Dan", "Eve", "Mallory", "Zed", "alice"];
        let players: Vec<Player> = names.iter().map(|n| Player::new(n, 1).unwrap()).collect();
        assert_eq!(sort_by_name(&players), players);

        for (i, name) in names.iter().enumerate() {
            assert_eq!(binary_search(&players, name), Some(i));
        }
        for absent in ["Aaron", "Bobby", "Zz", "ALICE", "zed"] {
            assert_eq!(binary_search(&players, absent), None);
        }
    }

    #[test]
    fn test_sort_by_name_is_case_sensitive() {
        let sorted = sort_by_name(&roster());
        let names: Vec<&str> = sorted.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Bob", "Eve", "Mallory", "Zed", "alice"]);
    }

    #[rstest]
    #[case(SearchMethod::Linear)]
    #[case(SearchMethod::Binary)]
    fn test_find_player(#[case] method: SearchMethod) {
        let players = roster();
        let outcome = find_player(&players, "Zed", method);
        assert_eq!(outcome.found().map(|p| p.score()), Some(40));
        assert!(outcome.elapsed_ms >= 0.0);

        assert!(find_player(&players, "Nobody", method).found().is_none());
    }

    #[test]
    fn test_search_method_from_choice() {
        assert_eq!(SearchMethod::from_choice(2).unwrap(), SearchMethod::Binary);
        assert!(matches!(SearchMethod::from_choice(3), Err(LeaderboardError::UnrecognizedChoice { .. })));
    }

    // ========================================================================
    // Property-Based Tests
    // ========================================================================

    use proptest::prelude::*;
    use std::collections::BTreeSet;

    proptest! {
        /// Property: on unique name-sorted records, binary search finds every present name and no absent one
        #[test]
        fn prop_binary_search_unique_sorted_names(
            names in prop::collection::btree_set("[A-Za-z]{1,6}", 0..40),
            absent in "[A-Za-z]{1,6}",
        ) {
            let players: Vec<Player> = names.iter().map(|n| Player::new(n, 0).unwrap()).collect();
            let sorted = sort_by_name(&players);
            prop_assert_eq!(&sorted, &players);

            for (i, name) in names.iter().enumerate() {
                prop_assert_eq!(binary_search(&sorted, name), Some(i));
            }
            let expected = names.iter().position(|n| *n == absent);
            prop_assert_eq!(binary_search(&sorted, &absent), expected);
        }

        /// Property: linear and binary lookups agree on whether a name is present
        #[test]
        fn prop_search_methods_agree(
            names in prop::collection::vec("[a-c]{1,3}", 0..30),
            target in "[a-c]{1,3}",
        ) {
            let players: Vec<Player> = names.iter().map(|n| Player::new(n, 1).unwrap()).collect();
            let unique: BTreeSet<&String> = names.iter().collect();

            let linear = find_player(&players, &target, SearchMethod::Linear);
            let binary = find_player(&players, &target, SearchMethod::Binary);
            prop_assert_eq!(linear.found().is_some(), unique.contains(&target));
            prop_assert_eq!(binary.found().map(|p| p.name()), linear.found().map(|p| p.name()));
        }
    }
}
