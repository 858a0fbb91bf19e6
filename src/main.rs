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

use clap::Parser;
use crate::cli::{Args, Command};
use crate::leaderboard::Leaderboard;
use crate::settings::Settings;

#[path = "errors.rs"]
mod errors;

#[path = "leaderboard/player.rs"]
mod player;

#[path = "leaderboard/leaderboard.rs"]
mod leaderboard;

#[path = "sorting/results_sorter.rs"]
mod results_sorter;

#[path = "sorting/sort_algorithm.rs"]
mod sort_algorithm;

#[path = "sorting/search.rs"]
mod search;

#[path = "sorting/benchmark.rs"]
mod benchmark;

#[path = "settings/settings.rs"]
mod settings;

#[path = "io/file_utils.rs"]
mod file_utils;

#[path = "io/players_file.rs"]
mod players_file;

#[path = "io/csv/csv_writer.rs"]
mod csv_writer;

#[path = "io/excel/xlsx_writer.rs"]
mod xlsx_writer;

#[path = "ui/cli.rs"]
mod cli;

#[path = "ui/display.rs"]
mod display;

#[path = "ui/terminal_ui.rs"]
mod terminal_ui;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut settings = match &args.settings {
        Some(path) => Settings::read_settings_from(path),
        None => Settings::read_settings(),
    };
    if let Some(players) = &args.players {
        settings.players_file = players.to_string_lossy().into_owned();
    }

    let mut leaderboard = Leaderboard::load(settings)?;
    tracing::debug!(players = leaderboard.players().len(), "leaderboard loaded");
    terminal_ui::run_command(args.command.unwrap_or(Command::Menu), &mut leaderboard)?;

    Ok(())
}
