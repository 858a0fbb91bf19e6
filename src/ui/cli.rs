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
use clap::{Parser, Subcommand};
use crate::search::SearchMethod;
use crate::sort_algorithm::SortAlgorithm;

/// Player leaderboard with a selection of classic sorting algorithms to rank it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the settings file (created with defaults when missing)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Players file to use instead of the one named in the settings
    #[arg(long)]
    pub players: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Interactive menu (the default)
    Menu,

    /// Add a player and store them permanently
    Add {
        name: String,
        #[arg(allow_negative_numbers = true)]
        score: i64,
    },

    /// Show the leaderboard ranked by one algorithm
    Rank {
        #[arg(long, value_enum, default_value_t = SortAlgorithm::Merge)]
        algorithm: SortAlgorithm,

        /// Rewrite the players file in the ranked order
        #[arg(long, default_value_t = false)]
        save: bool,
    },

    /// Show the leaderboard ranked by every algorithm, with timings
    RankAll,

    /// Time every algorithm on the same leaderboard and chart the results
    Compare,

    /// Look a player up by exact name
    Search {
        name: String,
        #[arg(long, value_enum, default_value_t = SearchMethod::Linear)]
        method: SearchMethod,
    },
}
