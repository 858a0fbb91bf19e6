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

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use serde_derive::Serialize;
use crate::errors::{LeaderboardError, Result};
use crate::file_utils;
use crate::player::{parse_score, Player};

// One "name,score" record per player, no header. Names with commas or quotes are quoted.

#[derive(Serialize)]
struct PlayerRow<'a> {
    name: &'a str,
    score: i64,
}

impl<'a> From<&'a Player> for PlayerRow<'a> {
    fn from(player: &'a Player) -> Self {
        Self { name: &player.name, score: player.score }
    }
}

pub fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        file_utils::check_and_create_dir(parent)?;
    }
    fs::write(path, "").map_err(|e| LeaderboardError::io(path, e))?;
    tracing::info!("Created new file: {}", path.display());

    Ok(())
}

pub fn load(path: &Path) -> Result<Vec<Player>> {
    let file = File::open(path).map_err(|e| LeaderboardError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut players = vec![];
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(err) if err.is_io_error() => return Err(LeaderboardError::csv(path, err)),
            Err(err) => {
                tracing::warn!("Skipping record of {}: {}", path.display(), err);
                continue;
            }
        };

        match parse_record(&record) {
            Ok(player) => players.push(player),
            Err(err) => {
                let line = record.position().map_or(0, |p| p.line());
                tracing::warn!("Skipping line {} of {}: {}", line, path.display(), err);
            }
        }
    }

    tracing::info!("Loaded {} players from {}", players.len(), path.display());
    Ok(players)
}

fn parse_record(record: &csv::StringRecord) -> Result<Player> {
    let name = record.get(0).unwrap_or("");
    let score = record.get(1).unwrap_or("");
    Player::new(name, parse_score(score)?)
}

pub fn append(path: &Path, player: &Player) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LeaderboardError::io(path, e))?;

    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
    writer.serialize(PlayerRow::from(player)).map_err(|e| LeaderboardError::csv(path, e))?;
    writer.flush().map_err(|e| LeaderboardError::io(path, e))
}

pub fn save(path: &Path, players: &[Player]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| LeaderboardError::csv(path, e))?;

    for player in players {
        writer.serialize(PlayerRow::from(player)).map_err(|e| LeaderboardError::csv(path, e))?;
    }
    writer.flush().map_err(|e| LeaderboardError::io(path, e))
}
