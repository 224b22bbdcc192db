/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Sccs;
use crate::algo::{
    top_sort,
    visits::{depth_first::*, Sequential},
};
use crate::graphs::traits::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use std::convert::Infallible;

/// Computes the strongly connected components of a graph using Kosaraju's
/// algorithm.
///
/// The first pass computes the nodes in reverse postorder (the
/// [`top_sort`] machinery, which does not require acyclicity for this
/// purpose); the second pass visits the transpose restarting from nodes in
/// that order, and every visit tree is exactly one component. Components
/// are thus numbered in topological order of the condensation.
///
/// # Arguments
/// * `graph`: the graph.
/// * `transpose`: the transpose of `graph`
///   ([`VecGraph::transposed`](crate::graphs::VecGraph::transposed) makes
///   this a one-liner).
/// * `pl`: a progress logger.
///
/// # Panics
///
/// May panic (or compute garbage) if `transpose` is not the transpose of
/// `graph` or has a different number of nodes.
pub fn kosaraju(
    graph: impl RandomAccessGraph,
    transpose: impl RandomAccessGraph,
    pl: &mut impl ProgressLog,
) -> Sccs {
    let num_nodes = graph.num_nodes();
    assert_eq!(
        num_nodes,
        transpose.num_nodes(),
        "graph and transpose have a different number of nodes"
    );
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing strongly connected components...");

    let top_sort = top_sort(&graph, pl);
    let mut number_of_components = 0;
    let mut visit = SeqNoPred::new(&transpose);
    let mut components = vec![0; num_nodes].into_boxed_slice();

    for &root in top_sort.iter() {
        visit
            .visit(
                root,
                |event| {
                    match event {
                        EventNoPred::Previsit { curr, .. } => {
                            components[curr] = number_of_components;
                        }
                        EventNoPred::Done { .. } => {
                            number_of_components += 1;
                        }
                        _ => (),
                    }
                    Ok::<(), Infallible>(())
                },
                pl,
            )
            .unwrap();
    }

    pl.done();

    Sccs::new(number_of_components, components)
}
