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

use crate::errors::{LeaderboardError, Result};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Player {
    pub(crate) name: String,
    pub(crate) score: i64,
}

impl Player {
    pub fn new(name: &str, score: i64) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LeaderboardError::EmptyName);
        }

        Ok(Self {
            name: name.to_string(),
            score,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> i64 {
        self.score
    }
}

pub fn parse_score(text: &str) -> Result<i64> {
    text.trim().parse::<i64>().map_err(|_| LeaderboardError::InvalidScore {
        text: text.trim().to_string(),
    })
}

// Duplicate names get a " (n)" suffix, n being how many players already share the name.
pub fn unique_name(name: &str, players: &[Player]) -> String {
    let prefix = format!("{} (", name);
    let count = players
        .iter()
        .filter(|p| p.name == name || p.name.starts_with(&prefix))
        .count();

    if count == 0 {
        name.to_string()
    } else {
        format!("{} ({})", name, count)
    }
}
