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

use std::collections::BTreeMap;
use crate::player::Player;
use crate::sort_algorithm::ranks_before;

// Every routine orders players by descending score. Bubble, insertion, merge and
// counting sort keep tied players in their input order; the others may not.

pub(crate) fn bubble_sort(players: &mut [Player]) {
    let n = players.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if ranks_before(&players[j + 1], &players[j]) {
                players.swap(j, j + 1);
            }
        }
    }
}

pub(crate) fn insertion_sort(players: &mut [Player]) {
    for i in 1..players.len() {
        let mut j = i;
        while j > 0 && ranks_before(&players[j], &players[j - 1]) {
            players.swap(j - 1, j);
            j -= 1;
        }
    }
}

pub(crate) fn selection_sort(players: &mut [Player]) {
    let n = players.len();
    for i in 0..n.saturating_sub(1) {
        let mut max_index = i;
        for j in i + 1..n {
            if ranks_before(&players[j], &players[max_index]) {
                max_index = j;
            }
        }
        players.swap(i, max_index);
    }
}

pub(crate) fn merge_sort(players: &mut [Player]) {
    if players.len() < 2 {
        return;
    }

    let mid = players.len() / 2;
    merge_sort(&mut players[..mid]);
    merge_sort(&mut players[mid..]);
    merge(players, mid);
}

fn merge(players: &mut [Player], mid: usize) {
    let left = players[..mid].to_vec();
    let right = players[mid..].to_vec();

    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        // Ties take the left element.
        if !ranks_before(&right[j], &left[i]) {
            players[k] = left[i].clone();
            i += 1;
        } else {
            players[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }

    for player in left[i..].iter().chain(right[j..].iter()) {
        players[k] = player.clone();
        k += 1;
    }
}

// Quick sort implementation. Lomuto partition around the last element. Recursion
// goes n levels deep on already-descending or all-equal input, so a very large
// uniform leaderboard can exhaust the stack.

pub(crate) fn quick_sort(players: &mut [Player]) {
    if players.is_empty() {
        return;
    }

    let end = players.len() - 1;
    sort_partition(players, 0, end as isize);
}

fn sort_partition(players: &mut [Player], start: isize, end: isize) {
    if start < end {
        let pivot = partition(players, start, end);
        sort_partition(players, start, pivot - 1);
        sort_partition(players, pivot + 1, end);
    }
}

fn partition(players: &mut [Player], l: isize, h: isize) -> isize {
    let mut i = l - 1;

    // The pivot at h stays put until the final swap.
    for j in l..h {
        if !ranks_before(&players[h as usize], &players[j as usize]) {
            i += 1;
            players.swap(i as usize, j as usize);
        }
    }

    players.swap((i + 1) as usize, h as usize);

    i + 1
}

pub(crate) fn heap_sort(players: &mut [Player]) {
    let n = players.len();
    for i in (0..n / 2).rev() {
        heapify(players, n, i);
    }

    for end in (1..n).rev() {
        players.swap(0, end);
        heapify(players, end, 0);
    }

    // The max-heap leaves the slice ascending.
    players.reverse();
}

fn heapify(players: &mut [Player], n: usize, mut root: usize) {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = 2 * root + 2;

        if left < n && ranks_before(&players[left], &players[largest]) {
            largest = left;
        }
        if right < n && ranks_before(&players[right], &players[largest]) {
            largest = right;
        }

        if largest == root {
            return;
        }

        players.swap(root, largest);
        root = largest;
    }
}

// Largest score span counted in a flat table. Wider spans are counted per distinct
// score in an ordered map instead.
const DENSE_SPAN_LIMIT: u64 = 1 << 20;

pub(crate) fn counting_sort(players: &mut [Player]) {
    let (min, max) = match score_bounds(players) {
        Some(bounds) => bounds,
        None => return,
    };

    let span = max.abs_diff(min);
    let ordered = match dense_table(span) {
        Some(mut count) => {
            for player in players.iter() {
                count[offset(player.score, min)] += 1;
            }
            start_positions(count.iter_mut());
            scatter(players, |score| next_slot(&mut count[offset(score, min)]))
        }
        None => {
            let mut count: BTreeMap<i64, usize> = BTreeMap::new();
            for player in players.iter() {
                *count.entry(player.score).or_insert(0) += 1;
            }
            start_positions(count.values_mut());
            scatter(players, |score| next_slot(count.entry(score).or_insert(0)))
        }
    };

    for (target, player) in players.iter_mut().zip(ordered) {
        *target = player;
    }
}

fn dense_table(span: u64) -> Option<Vec<usize>> {
    if span >= DENSE_SPAN_LIMIT {
        return None;
    }

    let len = usize::try_from(span + 1).ok()?;
    let mut count = Vec::new();
    count.try_reserve_exact(len).ok()?;
    count.resize(len, 0);
    Some(count)
}

// Counts in ascending score order become start positions, highest score first.
fn start_positions<'a>(counts: impl DoubleEndedIterator<Item = &'a mut usize>) {
    let mut next = 0;
    for slot in counts.rev() {
        let bucket = *slot;
        *slot = next;
        next += bucket;
    }
}

fn next_slot(slot: &mut usize) -> usize {
    *slot += 1;
    *slot - 1
}

fn scatter(players: &[Player], mut slot_for: impl FnMut(i64) -> usize) -> Vec<Player> {
    let mut output: Vec<Option<Player>> = vec![None; players.len()];
    for player in players {
        output[slot_for(player.score)] = Some(player.clone());
    }
    output.into_iter().flatten().collect()
}

fn score_bounds(players: &[Player]) -> Option<(i64, i64)> {
    let first = players.first()?.score;
    Some(players.iter().fold((first, first), |(min, max), p| (min.min(p.score), max.max(p.score))))
}

fn offset(score: i64, min: i64) -> usize {
    score.abs_diff(min) as usize
}
