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

use std::time::Instant;
use indexmap::IndexMap;
use crate::player::Player;
use crate::sort_algorithm::SortAlgorithm;

#[derive(Clone, Debug)]
pub struct AlgorithmResult {
    pub(crate) algorithm: SortAlgorithm,
    pub(crate) ordered: Vec<Player>,
    pub(crate) elapsed_ms: f64,
}

impl AlgorithmResult {
    pub fn algorithm(&self) -> SortAlgorithm {
        self.algorithm
    }

    pub fn ordered(&self) -> &[Player] {
        &self.ordered
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn complexity(&self) -> &'static str {
        self.algorithm.complexity()
    }
}

/// Sorts a private copy of `players`; only the sort itself is timed.
pub fn run(players: &[Player], algorithm: SortAlgorithm) -> AlgorithmResult {
    let mut ordered = players.to_vec();

    let start = Instant::now();
    algorithm.sort(&mut ordered);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    tracing::debug!(algorithm = algorithm.name(), records = ordered.len(), elapsed_ms, "sort finished");

    AlgorithmResult {
        algorithm,
        ordered,
        elapsed_ms,
    }
}

pub fn run_each(players: &[Player]) -> Vec<AlgorithmResult> {
    SortAlgorithm::ALL.iter().map(|algorithm| run(players, *algorithm)).collect()
}

pub struct ComparisonReport {
    results: IndexMap<SortAlgorithm, AlgorithmResult>,
}

impl ComparisonReport {
    /// True when there were no players to compare.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlgorithmResult> {
        self.results.values()
    }

    // Never zero, so callers can divide by it.
    pub fn max_elapsed(&self) -> f64 {
        let max = self.iter().map(|r| r.elapsed_ms).fold(0.0, f64::max);
        if max == 0.0 {
            1.0
        } else {
            max
        }
    }

    pub fn bar_length(&self, result: &AlgorithmResult, scale_width: usize) -> usize {
        (result.elapsed_ms / self.max_elapsed() * scale_width as f64).round() as usize
    }

    pub fn fastest(&self) -> Option<&AlgorithmResult> {
        self.iter().min_by(|a, b| a.elapsed_ms.total_cmp(&b.elapsed_ms))
    }
}

/// Runs every algorithm, in enumeration order, against its own copy of the same input.
pub fn compare_all(players: &[Player]) -> ComparisonReport {
    let mut results = IndexMap::new();

    if players.is_empty() {
        tracing::info!("nothing to compare, leaderboard is empty");
        return ComparisonReport { results };
    }

    for algorithm in SortAlgorithm::ALL {
        results.insert(algorithm, run(players, algorithm));
    }

    let report = ComparisonReport { results };
    if let Some(fastest) = report.fastest() {
        tracing::info!(
            records = players.len(),
            fastest = fastest.algorithm.name(),
            elapsed_ms = fastest.elapsed_ms,
            "compared sorting algorithms"
        );
    }

    report
}
