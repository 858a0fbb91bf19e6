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

use std::path::PathBuf;
use crate::benchmark::{self, AlgorithmResult, ComparisonReport};
use crate::errors::Result;
use crate::file_utils;
use crate::player::{unique_name, Player};
use crate::players_file;
use crate::search::{self, SearchMethod, SearchOutcome};
use crate::settings::Settings;
use crate::sort_algorithm::SortAlgorithm;

// Label used when archiving the collection as entered, before any sort.
pub const UNSORTED_LABEL: &str = "Unsorted";

/// The in-memory leaderboard. Sorting and searching always work on copies, so the
/// stored order is the order players were added in unless `save_ranking` replaces it.
pub struct Leaderboard {
    players: Vec<Player>,
    players_path: PathBuf,
    settings: Settings,
}

impl Leaderboard {
    pub fn load(settings: Settings) -> Result<Self> {
        let players_path = settings.players_path();
        players_file::ensure_exists(&players_path)?;
        let players = players_file::load(&players_path)?;

        Ok(Self {
            players,
            players_path,
            settings,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Adds a player, renaming them if the name is taken, and stores them permanently.
    pub fn add_player(&mut self, name: &str, score: i64) -> Result<Player> {
        let requested = Player::new(name, score)?;
        let player = Player::new(&unique_name(requested.name(), &self.players), score)?;

        players_file::append(&self.players_path, &player)?;
        self.players.push(player.clone());
        file_utils::output_ranking(&self.players, UNSORTED_LABEL, &self.settings)?;

        tracing::info!(player = player.name(), score = player.score(), "player added");
        Ok(player)
    }

    pub fn rank(&self, algorithm: SortAlgorithm) -> Result<AlgorithmResult> {
        let result = benchmark::run(&self.players, algorithm);
        file_utils::output_ranking(result.ordered(), algorithm.name(), &self.settings)?;
        Ok(result)
    }

    pub fn rank_each(&self) -> Result<Vec<AlgorithmResult>> {
        let results = benchmark::run_each(&self.players);
        for result in &results {
            file_utils::output_ranking(result.ordered(), result.algorithm().name(), &self.settings)?;
        }
        Ok(results)
    }

    /// Compares every algorithm. An empty leaderboard yields an empty report and writes nothing.
    pub fn compare(&self) -> Result<ComparisonReport> {
        let report = benchmark::compare_all(&self.players);
        if !report.is_empty() {
            let written = file_utils::output_comparison(&report, &self.settings)?;
            tracing::debug!(algorithms = report.len(), files = written.len(), "comparison archived");
        }
        Ok(report)
    }

    pub fn search(&self, name: &str, method: SearchMethod) -> SearchOutcome {
        search::find_player(&self.players, name.trim(), method)
    }

    /// Stores the collection in the order `algorithm` ranks it.
    pub fn save_ranking(&mut self, algorithm: SortAlgorithm) -> Result<()> {
        let ordered = algorithm.sorted(&self.players);
        self.save_order(ordered)?;
        tracing::info!(algorithm = algorithm.name(), "players file rewritten in ranked order");
        Ok(())
    }

    /// Replaces the stored order and rewrites the players file.
    fn save_order(&mut self, ordered: Vec<Player>) -> Result<()> {
        players_file::save(&self.players_path, &ordered)?;
        self.players = ordered;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn settings_in(dir: &Path) -> Settings {
        Settings {
            players_file: dir.join("players.csv").to_string_lossy().into_owned(),
            output_directory: dir.join("out").to_string_lossy().into_owned(),
            ..Settings::default()
        }
    }

    fn seeded(dir: &Path) -> Leaderboard {
        fs::write(dir.join("players.csv"), "Alice,50\nBob,80\nEve,80\nCara,30\n").unwrap();
        Leaderboard::load(settings_in(dir)).unwrap()
    }

    #[test]
    fn test_load_creates_missing_players_file() {
        let dir = tempfile::tempdir().unwrap();
        let leaderboard = Leaderboard::load(settings_in(dir.path())).unwrap();
        assert!(leaderboard.is_empty());
        assert!(dir.path().join("players.csv").exists());
    }

    #[test]
    fn test_add_player_dedupes_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut leaderboard = seeded(dir.path());

        let added = leaderboard.add_player("  Bob ", 12).unwrap();
        assert_eq!(added.name(), "Bob (1)");
        assert_eq!(leaderboard.players().len(), 5);

        let reloaded = Leaderboard::load(settings_in(dir.path())).unwrap();
        assert_eq!(reloaded.players(), leaderboard.players());

        let archive = fs::read_to_string(leaderboard.settings().leaderboard_path()).unwrap();
        assert!(archive.ends_with("5,Bob (1),12,Unsorted\n"));
    }

    #[test]
    fn test_added_name_with_comma_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let mut leaderboard = Leaderboard::load(settings_in(dir.path())).unwrap();

        leaderboard.add_player("Smith, John", 42).unwrap();
        leaderboard.add_player("Smith, John", 7).unwrap();

        let reloaded = Leaderboard::load(settings_in(dir.path())).unwrap();
        let pairs: Vec<(&str, i64)> = reloaded.players().iter().map(|p| (p.name(), p.score())).collect();
        assert_eq!(pairs, vec![("Smith, John", 42), ("Smith, John (1)", 7)]);

        let archive = fs::read_to_string(leaderboard.settings().leaderboard_path()).unwrap();
        assert!(archive.starts_with("Rank,Name,Score,Algorithm\n1,\"Smith, John\",42,Unsorted\n"));
    }

    #[test]
    fn test_add_player_rejects_blank_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut leaderboard = seeded(dir.path());
        assert!(leaderboard.add_player("  ", 1).is_err());
        assert_eq!(leaderboard.players().len(), 4);
    }

    #[test]
    fn test_rank_does_not_reorder_collection() {
        let dir = tempfile::tempdir().unwrap();
        let leaderboard = seeded(dir.path());

        let result = leaderboard.rank(SortAlgorithm::Counting).unwrap();
        let names: Vec<&str> = result.ordered().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Bob", "Eve", "Alice", "Cara"]);
        assert_eq!(leaderboard.players()[0].name(), "Alice");
    }

    #[test]
    fn test_rank_each_archives_every_ranking() {
        let dir = tempfile::tempdir().unwrap();
        let leaderboard = seeded(dir.path());

        assert_eq!(leaderboard.rank_each().unwrap().len(), 7);
        let archive = fs::read_to_string(leaderboard.settings().leaderboard_path()).unwrap();
        assert_eq!(archive.lines().count(), 1 + 7 * 4);
        assert!(archive.ends_with(",Counting Sort\n"));
    }

    #[test]
    fn test_compare_writes_report_unless_empty() {
        let dir = tempfile::tempdir().unwrap();
        let empty = Leaderboard::load(settings_in(dir.path())).unwrap();
        assert!(empty.compare().unwrap().is_empty());
        assert!(!empty.settings().comparison_path().exists());

        let leaderboard = seeded(dir.path());
        assert_eq!(leaderboard.compare().unwrap().len(), 7);
        assert!(leaderboard.settings().comparison_path().exists());
    }

    #[test]
    fn test_search_trims_name() {
        let dir = tempfile::tempdir().unwrap();
        let leaderboard = seeded(dir.path());
        let outcome = leaderboard.search(" Eve ", SearchMethod::Binary);
        assert_eq!(outcome.found().map(|p| p.score()), Some(80));
    }

    #[test]
    fn test_save_ranking_rewrites_players_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut leaderboard = seeded(dir.path());

        leaderboard.save_ranking(SortAlgorithm::Merge).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("players.csv")).unwrap(),
            "Bob,80\nEve,80\nAlice,50\nCara,30\n"
        );
        assert_eq!(leaderboard.players()[0].name(), "Bob");
    }

    #[test]
    fn test_save_ranking_matches_shown_ranking() {
        let dir = tempfile::tempdir().unwrap();
        let mut leaderboard = seeded(dir.path());

        for algorithm in SortAlgorithm::ALL {
            let shown = leaderboard.rank(algorithm).unwrap();
            leaderboard.save_ranking(algorithm).unwrap();
            assert_eq!(leaderboard.players(), shown.ordered(), "{}", algorithm);
        }
    }
}
