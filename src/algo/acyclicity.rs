/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{depth_first::*, Sequential, StoppedWhenDone};
use crate::graphs::traits::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;

/// Runs an acyclicity test.
///
/// Returns `true` iff the graph has no directed cycle; cycle detection is
/// the negation. A cycle manifests as a back arc, that is, a revisit of a
/// node currently on the visit path, and stops the visit immediately.
pub fn acyclicity(graph: impl RandomAccessGraph, pl: &mut impl ProgressLog) -> bool {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Checking acyclicity...");

    let mut visit = SeqPath::new(&graph);

    let acyclic = visit.visit_all(
        |event| {
            // Stop the visit as soon as a back arc is found.
            match event {
                EventPred::Revisit { on_stack: true, .. } => Err(StoppedWhenDone {}),
                _ => Ok(()),
            }
        },
        pl,
    );

    pl.done();
    acyclic.is_ok()
}
