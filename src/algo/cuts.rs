/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{depth_first::*, Sequential};
use crate::graphs::traits::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use std::convert::Infallible;
use sux::bits::BitVec;

/// Selects the output of [`cuts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutMode {
    /// Compute articulation points.
    Vertices,
    /// Compute bridges.
    Edges,
}

/// The result of [`cuts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cuts {
    /// The articulation points, in increasing order.
    Vertices(Vec<usize>),
    /// The bridges, as `(parent, child)` pairs of the DFS tree, in retreat
    /// order.
    Edges(Vec<(usize, usize)>),
}

/// Computes the articulation points or the bridges of an undirected graph
/// using Tarjan's low-link algorithm in a single iterative DFS.
///
/// The graph must be simple and symmetric (every edge present as a pair of
/// opposite arcs, no parallel edges); disconnected graphs are fine, as the
/// visit restarts from every node.
///
/// Low links obey the standard recurrences: on a back arc `v → w` (the arc
/// to the DFS parent is skipped once), `low[v] = min(low[v], num[w])`; on
/// retreat from a tree arc `p → v`, `low[p] = min(low[p], low[v])`. A
/// non-root `p` is an articulation point iff some tree child `v` has
/// `low[v] >= num[p]`; a root iff it has at least two tree children; a tree
/// arc `(p, v)` is a bridge iff `low[v] > num[p]`.
pub fn cuts(graph: impl RandomAccessGraph, mode: CutMode, pl: &mut impl ProgressLog) -> Cuts {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing cut elements...");

    let mut visit = SeqPath::new(&graph);

    // Discovery order and low links, indexed by node.
    let mut num = vec![0; num_nodes];
    let mut low = vec![0; num_nodes];
    let mut parent = vec![0; num_nodes];
    let mut clock = 0;

    let mut cut_vertex = BitVec::new(num_nodes);
    let mut bridges = Vec::new();
    let mut current_root = 0;
    let mut root_children = 0;

    visit
        .visit_all(
            |event| {
                match event {
                    EventPred::Init { root } => {
                        current_root = root;
                        root_children = 0;
                    }
                    EventPred::Previsit {
                        curr, pred, depth, ..
                    } => {
                        num[curr] = clock;
                        low[curr] = clock;
                        clock += 1;
                        parent[curr] = pred;
                        if depth == 1 {
                            root_children += 1;
                        }
                    }
                    EventPred::Revisit { curr, pred, .. } => {
                        // Skip the reverse of the tree arc to the parent;
                        // everything else is one of the two sightings of a
                        // back arc, and the min makes the second harmless.
                        if parent[pred] != curr {
                            low[pred] = low[pred].min(num[curr]);
                        }
                    }
                    EventPred::Postvisit { curr, pred, .. } => {
                        if curr != pred {
                            // Retreating from the tree arc pred → curr.
                            low[pred] = low[pred].min(low[curr]);
                            if low[curr] > num[pred] {
                                bridges.push((pred, curr));
                            }
                            if pred != current_root && low[curr] >= num[pred] {
                                cut_vertex.set(pred, true);
                            }
                        }
                    }
                    EventPred::Done { root } => {
                        if root_children > 1 {
                            cut_vertex.set(root, true);
                        }
                    }
                }
                Ok::<(), Infallible>(())
            },
            pl,
        )
        .unwrap();

    pl.done();

    match mode {
        CutMode::Vertices => Cuts::Vertices(
            (0..num_nodes)
                .filter(|&node| cut_vertex.get(node))
                .collect(),
        ),
        CutMode::Edges => Cuts::Edges(bridges),
    }
}
