/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{depth_first::*, Sequential};
use crate::graphs::traits::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use std::convert::Infallible;

/// Returns a topological sort of the graph, that is, the reverse of the
/// postorder of a depth-first visit covering all nodes.
///
/// The result is meaningful only if the graph is acyclic (compose with
/// [`acyclicity`](crate::algo::acyclicity) when in doubt): on a cyclic input
/// the output is still a permutation of the nodes, but some arc will point
/// backwards. For every arc `u → v` of a DAG, `u` precedes `v` in the
/// returned order.
pub fn top_sort(graph: impl RandomAccessGraph, pl: &mut impl ProgressLog) -> Box<[usize]> {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing topological sort...");

    let mut visit = SeqPred::new(&graph);
    let mut top_sort = vec![0; num_nodes].into_boxed_slice();
    let mut pos = num_nodes;

    visit
        .visit_all(
            |event| {
                if let EventPred::Postvisit { curr, .. } = event {
                    pos -= 1;
                    top_sort[pos] = curr;
                }
                Ok::<(), Infallible>(())
            },
            pl,
        )
        .unwrap();

    pl.done();
    top_sort
}
