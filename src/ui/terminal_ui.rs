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

use text_io::try_read;
use crate::cli::Command;
use crate::display;
use crate::errors::{LeaderboardError, Result};
use crate::leaderboard::Leaderboard;
use crate::player::parse_score;
use crate::search::SearchMethod;
use crate::sort_algorithm::SortAlgorithm;

const EMPTY_MESSAGE: &str = "Leaderboard is empty!";

enum MenuChoice {
    AddPlayer,
    ShowLeaderboard,
    ShowAllAlgorithms,
    CompareAll,
    SearchPlayer,
    Exit,
}

impl MenuChoice {
    fn from_choice(choice: i64) -> Result<Self> {
        match choice {
            1 => Ok(MenuChoice::AddPlayer),
            2 => Ok(MenuChoice::ShowLeaderboard),
            3 => Ok(MenuChoice::ShowAllAlgorithms),
            4 => Ok(MenuChoice::CompareAll),
            5 => Ok(MenuChoice::SearchPlayer),
            6 => Ok(MenuChoice::Exit),
            _ => Err(LeaderboardError::UnrecognizedChoice { menu: "menu", choice: choice.to_string() }),
        }
    }
}

// None once stdin is exhausted.
fn read_line(prompt: &str) -> Option<String> {
    if !prompt.is_empty() {
        println!("{}", prompt);
    }

    let line: std::result::Result<String, text_io::Error> = try_read!("{}\n");
    line.ok().map(|l| l.trim().to_string())
}

fn read_choice(prompt: &str, menu: &'static str) -> Option<Result<i64>> {
    let line = read_line(prompt)?;
    Some(line.parse::<i64>().map_err(|_| LeaderboardError::UnrecognizedChoice { menu, choice: line.clone() }))
}

pub fn main_menu(leaderboard: &mut Leaderboard) -> Result<()> {
    loop {
        println!("\n===== LEADERBOARD MENU =====");
        println!("1. Add Player");
        println!("2. Show Leaderboard (choose algorithm)");
        println!("3. Show All Sorting Algorithms (with time)");
        println!("4. Compare All Sorting Algorithms");
        println!("5. Search Player (Linear / Binary)");
        println!("6. Exit");

        let choice = match read_choice("", "menu") {
            Some(choice) => choice.and_then(MenuChoice::from_choice),
            None => return Ok(()),
        };

        let choice = match choice {
            Ok(choice) => choice,
            Err(_) => {
                println!("Invalid option, try again!");
                continue;
            }
        };

        let outcome = match choice {
            MenuChoice::AddPlayer => add_player_prompt(leaderboard),
            MenuChoice::Exit => {
                println!("Exiting... Goodbye!");
                return Ok(());
            }
            _ if leaderboard.is_empty() => {
                println!("{}", EMPTY_MESSAGE);
                continue;
            }
            MenuChoice::ShowLeaderboard => show_leaderboard_prompt(leaderboard),
            MenuChoice::ShowAllAlgorithms => run_command(Command::RankAll, leaderboard),
            MenuChoice::CompareAll => run_command(Command::Compare, leaderboard),
            MenuChoice::SearchPlayer => search_prompt(leaderboard),
        };

        // Bad input and failed writes are reported; the menu keeps going.
        if let Err(err) = outcome {
            tracing::warn!("{}", err);
            println!("{}", err);
        }
    }
}

fn add_player_prompt(leaderboard: &mut Leaderboard) -> Result<()> {
    let name = match read_line("Enter player name: ") {
        Some(name) => name,
        None => return Ok(()),
    };
    let score = match read_line("Enter player score: ") {
        Some(score) => parse_score(&score)?,
        None => return Ok(()),
    };

    run_command(Command::Add { name, score }, leaderboard)
}

fn show_leaderboard_prompt(leaderboard: &mut Leaderboard) -> Result<()> {
    println!("\nChoose sorting algorithm:");
    for (i, algorithm) in SortAlgorithm::ALL.iter().enumerate() {
        println!("{}. {}", i + 1, algorithm.name());
    }

    let algorithm = match read_choice("", "sorting algorithm") {
        Some(choice) => SortAlgorithm::from_choice(choice?)?,
        None => return Ok(()),
    };

    run_command(Command::Rank { algorithm, save: false }, leaderboard)
}

fn search_prompt(leaderboard: &mut Leaderboard) -> Result<()> {
    let name = match read_line("Enter player name to search: ") {
        Some(name) => name,
        None => return Ok(()),
    };

    let method = match read_choice("\nChoose search method:\n1. Linear Search\n2. Binary Search (alphabetically sorted)", "search method") {
        Some(choice) => SearchMethod::from_choice(choice?)?,
        None => return Ok(()),
    };

    run_command(Command::Search { name, method }, leaderboard)
}

/// Runs one operation against the leaderboard and prints its result.
pub fn run_command(command: Command, leaderboard: &mut Leaderboard) -> Result<()> {
    match command {
        Command::Menu => main_menu(leaderboard)?,
        Command::Add { name, score } => {
            let player = leaderboard.add_player(&name, score)?;
            println!("Player added as: {} and stored permanently.", player.name());
        }
        Command::Rank { algorithm, save } => {
            if leaderboard.is_empty() {
                println!("{}", EMPTY_MESSAGE);
                return Ok(());
            }
            let result = leaderboard.rank(algorithm)?;
            println!("\n{}", display::ranking(&result));
            if save {
                leaderboard.save_ranking(algorithm)?;
                println!("Players file rewritten in {} order.", algorithm.name());
            }
        }
        Command::RankAll => {
            if leaderboard.is_empty() {
                println!("{}", EMPTY_MESSAGE);
                return Ok(());
            }
            for result in leaderboard.rank_each()? {
                println!("\n{}", display::ranking(&result));
            }
        }
        Command::Compare => {
            let report = leaderboard.compare()?;
            if report.is_empty() {
                println!("{} Please add players first.", EMPTY_MESSAGE);
                return Ok(());
            }
            println!("\n{}", display::comparison_table(&report));
            println!("{}", display::bar_chart(&report, leaderboard.settings().bar_width));
        }
        Command::Search { name, method } => {
            let outcome = leaderboard.search(&name, method);
            println!("{}", display::search_summary(&outcome, name.trim()));
        }
    }

    Ok(())
}
