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

//! Error types for leaderboard operations.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LeaderboardError>;

#[derive(Error, Debug)]
pub enum LeaderboardError {
    /// A menu or CLI selection outside the offered choices. Nothing is run.
    #[error("Unrecognized {menu} choice: {choice}")]
    UnrecognizedChoice {
        menu: &'static str,
        choice: String,
    },

    #[error("Player name must not be empty")]
    EmptyName,

    #[error("Invalid score '{text}': expected a whole number")]
    InvalidScore {
        text: String,
    },

    #[error("Failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write workbook '{path}': {source}")]
    Xlsx {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

impl LeaderboardError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LeaderboardError::Io { path: path.into(), source }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        LeaderboardError::Csv { path: path.into(), source }
    }
}
