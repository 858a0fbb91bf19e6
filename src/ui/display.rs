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

use crate::benchmark::{AlgorithmResult, ComparisonReport};
use crate::player::Player;
use crate::search::SearchOutcome;

const RULE_WIDTH: usize = 30;
const COMPARISON_WIDTH: usize = 85;
const CHART_WIDTH: usize = 70;

/// `timing` is the elapsed milliseconds and complexity label of the sort that produced `players`.
pub fn leaderboard_table(players: &[Player], title: &str, timing: Option<(f64, &str)>) -> String {
    let mut table = String::new();
    table.push_str(&format!("{}\n   {} LEADERBOARD\n{}\n", "=".repeat(RULE_WIDTH), title, "=".repeat(RULE_WIDTH)));
    table.push_str(&format!("{:<6}{:<20}{:<10}\n", "Rank", "Name", "Score"));
    table.push_str(&format!("{}\n", "-".repeat(RULE_WIDTH)));

    for (i, player) in players.iter().enumerate() {
        table.push_str(&format!("{:<6}{:<20}{:<10}\n", i + 1, player.name, player.score));
    }

    table.push_str(&format!("{}\n", "=".repeat(RULE_WIDTH)));

    if let Some((elapsed_ms, complexity)) = timing {
        table.push_str(&format!("Time taken: {:.3} ms\nComplexity: {}\n", elapsed_ms, complexity));
    }
    table
}

pub fn ranking(result: &AlgorithmResult) -> String {
    format!(
        "{}Stable: {}\n",
        leaderboard_table(result.ordered(), result.algorithm().name(), Some((result.elapsed_ms(), result.complexity()))),
        if result.algorithm().is_stable() { "yes" } else { "no" }
    )
}

pub fn comparison_table(report: &ComparisonReport) -> String {
    let mut table = format!("{:=^width$}\n", " SORTING ALGORITHM COMPARISON ", width = COMPARISON_WIDTH);
    table.push_str(&format!("{:<20}{:<15}{}\n", "Algorithm", "Time (ms)", "Complexity"));
    table.push_str(&format!("{}\n", "-".repeat(COMPARISON_WIDTH)));

    for result in report.iter() {
        table.push_str(&format!(
            "{:<20}{:<15.3}{}\n",
            result.algorithm().name(),
            result.elapsed_ms(),
            aligned_complexity(result.complexity())
        ));
    }

    table.push_str(&format!("{}\n", "=".repeat(COMPARISON_WIDTH)));
    table
}

// "Time: ..., Space: ..." becomes "Time: ...   | Space: ..." so the Space column lines up.
fn aligned_complexity(complexity: &str) -> String {
    match complexity.split_once(", Space:") {
        Some((time, space)) => format!("{:<38}| Space:{}", time, space),
        None => complexity.to_string(),
    }
}

pub fn bar_chart(report: &ComparisonReport, width: usize) -> String {
    let mut chart = format!("Execution Time Visualization\n{}\n", "-".repeat(CHART_WIDTH));

    for result in report.iter() {
        chart.push_str(&format!(
            "{:<18} | {}  {:<7.3} ms\n",
            result.algorithm().name(),
            "_".repeat(report.bar_length(result, width)),
            result.elapsed_ms()
        ));
    }

    chart.push_str(&format!("{}\n", "-".repeat(CHART_WIDTH)));
    chart
}

pub fn search_summary(outcome: &SearchOutcome, name: &str) -> String {
    match outcome.found() {
        Some(player) => format!(
            "Player found! Name: {} | Score: {} | {} time: {:.3} ms",
            player.name, player.score, outcome.method.name(), outcome.elapsed_ms
        ),
        None => format!("Player \"{}\" not found | {} time: {:.3} ms", name, outcome.method.name(), outcome.elapsed_ms),
    }
}
