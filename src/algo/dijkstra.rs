/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::traits::RandomAccessWeightedGraph;
use dsi_progress_logger::ProgressLog;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use sux::bits::BitVec;

/// The distance of unreachable nodes.
pub const INFINITY: u64 = u64::MAX;

/// Computes the shortest-path distance from `source` to `target` using
/// Dijkstra's algorithm.
///
/// Returns [`INFINITY`] if `target` is unreachable; `dijkstra(g, s, s)` is
/// always 0. Tentative distances saturate on addition, so they can never
/// wrap past the sentinel.
///
/// Weights must be nonnegative, which the `u64` weight type enforces by
/// construction; the algorithm would be incorrect otherwise.
///
/// # Panics
///
/// Panics if `source` or `target` is out of range.
pub fn dijkstra(
    graph: impl RandomAccessWeightedGraph,
    source: usize,
    target: usize,
    pl: &mut impl ProgressLog,
) -> u64 {
    let num_nodes = graph.num_nodes();
    assert!(
        source < num_nodes && target < num_nodes,
        "source {source} or target {target} out of range for {num_nodes} nodes"
    );
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing shortest path...");

    let mut dist = vec![INFINITY; num_nodes];
    let mut visited = BitVec::new(num_nodes);
    // Entries are (tentative distance, node); stale entries are skipped via
    // the visited bit.
    let mut queue = BinaryHeap::new();

    dist[source] = 0;
    queue.push(Reverse((0u64, source)));

    while let Some(Reverse((d, node))) = queue.pop() {
        if visited.get(node) {
            continue;
        }
        visited.set(node, true);
        pl.light_update();

        if node == target {
            break;
        }

        for (succ, weight) in graph.weighted_successors(node) {
            let relaxed = d.saturating_add(weight);
            if relaxed < dist[succ] {
                dist[succ] = relaxed;
                queue.push(Reverse((relaxed, succ)));
            }
        }
    }

    pl.done();
    dist[target]
}
