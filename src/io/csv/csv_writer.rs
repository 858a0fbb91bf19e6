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

use std::fs::OpenOptions;
use std::path::Path;
use serde_derive::Serialize;
use crate::benchmark::ComparisonReport;
use crate::errors::{LeaderboardError, Result};
use crate::player::Player;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct RankedRow<'a> {
    rank: usize,
    name: &'a str,
    score: i64,
    algorithm: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ComparisonRow<'a> {
    algorithm: &'a str,
    #[serde(rename = "Time(ms)")]
    time_ms: String,
    complexity: &'a str,
}

/// Appends `players` to the ranked results archive, labelled with the algorithm
/// that ordered them. Ranks carry on from the rows already in the file.
pub fn append_ranked(path: &Path, players: &[Player], label: &str) -> Result<()> {
    let existing_rows = ranked_rows(path)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LeaderboardError::io(path, e))?;
    let is_new = file.metadata().map(|m| m.len() == 0).unwrap_or(true);

    let mut writer = csv::WriterBuilder::new().has_headers(is_new).from_writer(file);
    for (i, player) in players.iter().enumerate() {
        writer
            .serialize(RankedRow {
                rank: existing_rows + i + 1,
                name: &player.name,
                score: player.score,
                algorithm: label,
            })
            .map_err(|e| LeaderboardError::csv(path, e))?;
    }

    writer.flush().map_err(|e| LeaderboardError::io(path, e))?;
    tracing::info!("Appended {} ranked rows ({}) to {}", players.len(), label, path.display());

    Ok(())
}

// Data rows already archived, header excluded.
fn ranked_rows(path: &Path) -> Result<usize> {
    if !path.exists() {
        return Ok(0);
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| LeaderboardError::csv(path, e))?;

    let mut rows = 0;
    for record in reader.records() {
        record.map_err(|e| LeaderboardError::csv(path, e))?;
        rows += 1;
    }

    Ok(rows)
}

pub fn write_comparison(path: &Path, report: &ComparisonReport) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| LeaderboardError::csv(path, e))?;

    if report.is_empty() {
        writer
            .write_record(["Algorithm", "Time(ms)", "Complexity"])
            .map_err(|e| LeaderboardError::csv(path, e))?;
    }

    for result in report.iter() {
        writer
            .serialize(ComparisonRow {
                algorithm: result.algorithm().name(),
                time_ms: format!("{:.3}", result.elapsed_ms()),
                complexity: result.complexity(),
            })
            .map_err(|e| LeaderboardError::csv(path, e))?;
    }

    writer.flush().map_err(|e| LeaderboardError::io(path, e))?;
    tracing::info!("Comparison results saved to {}", path.display());

    Ok(())
}
