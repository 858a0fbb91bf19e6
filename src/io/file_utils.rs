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

use std::fs;
use std::path::{Path, PathBuf};
use crate::benchmark::ComparisonReport;
use crate::csv_writer;
use crate::errors::{LeaderboardError, Result};
use crate::player::Player;
use crate::settings::Settings;
use crate::xlsx_writer;

pub fn check_and_create_dir(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() || path.exists() {
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| LeaderboardError::io(path, e))?;
    tracing::debug!("\"{}\" has been created", path.display());

    Ok(())
}

pub fn output_comparison(report: &ComparisonReport, settings: &Settings) -> Result<Vec<PathBuf>> {
    check_and_create_dir(Path::new(&settings.output_directory))?;

    let csv_path = settings.comparison_path();
    csv_writer::write_comparison(&csv_path, report)?;
    let mut written = vec![csv_path];

    if settings.generate_xlsx {
        written.push(xlsx_writer::create_xlsx(report, settings)?);
    }

    Ok(written)
}

/// Archives a ranking when `save_ranked_results` is on. Returns the file written to, if any.
pub fn output_ranking(players: &[Player], label: &str, settings: &Settings) -> Result<Option<PathBuf>> {
    if !settings.save_ranked_results {
        return Ok(None);
    }

    check_and_create_dir(Path::new(&settings.output_directory))?;
    let path = settings.leaderboard_path();
    csv_writer::append_ranked(&path, players, label)?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::compare_all;

    fn settings_in(dir: &Path) -> Settings {
        Settings {
            output_directory: dir.join("out").to_string_lossy().into_owned(),
            ..Settings::default()
        }
    }

    #[test]
    fn test_check_and_create_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        check_and_create_dir(&nested).unwrap();
        assert!(nested.is_dir());
        check_and_create_dir(&nested).unwrap();
        check_and_create_dir(Path::new("")).unwrap();
    }

    #[test]
    fn test_output_comparison_csv_only_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        let report = compare_all(&[Player::new("Alice", 50).unwrap()]);

        let written = output_comparison(&report, &settings).unwrap();
        assert_eq!(written, vec![settings.comparison_path()]);
        assert!(settings.comparison_path().exists());
        assert!(!settings.xlsx_path().exists());
    }

    #[test]
    fn test_output_ranking_respects_setting() {
        let dir = tempfile::tempdir().unwrap();
        let players = vec![Player::new("Alice", 50).unwrap()];

        let settings = Settings { save_ranked_results: false, ..settings_in(dir.path()) };
        assert_eq!(output_ranking(&players, "Quick Sort", &settings).unwrap(), None);
        assert!(!settings.leaderboard_path().exists());

        let settings = settings_in(dir.path());
        let path = output_ranking(&players, "Quick Sort", &settings).unwrap().unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "Rank,Name,Score,Algorithm\n1,Alice,50,Quick Sort\n");
    }
}
