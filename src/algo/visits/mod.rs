/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graph visits.
//!
//! Visits are event-driven: the caller provides a callback that is invoked
//! at each visit event, and may interrupt the visit early by returning an
//! error (conventionally, [`StoppedWhenDone`] when the interruption denotes
//! successful completion). All visits are iterative, so recursion depth
//! never limits the size of the input.

pub mod depth_first;

use dsi_progress_logger::ProgressLog;

/// Types usable as visit events.
///
/// The associated type is the argument passed to visit filters, which is a
/// subset of the event payload available before the node is expanded.
pub trait Event {
    /// The arguments passed to the filter of a visit generating this event.
    type FilterArgs;
}

/// A convenience error type to interrupt a visit that has computed its
/// result before exhausting the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoppedWhenDone {}

/// A sequential visit.
///
/// Implementations invoke `callback` on every visit event of type `E`; the
/// visit is interrupted, propagating the error, as soon as the callback
/// returns one. Nodes rejected by `filter` (and their induced subtrees, if
/// not otherwise reachable) are skipped, but may be visited later by
/// another call.
pub trait Sequential<E: Event> {
    /// Visits the graph from the given root, skipping nodes rejected by
    /// `filter`.
    fn visit_filtered<Er, C: FnMut(E) -> Result<(), Er>, F: FnMut(E::FilterArgs) -> bool>(
        &mut self,
        root: usize,
        callback: C,
        filter: F,
        pl: &mut impl ProgressLog,
    ) -> Result<(), Er>;

    /// Visits the graph from the given root.
    fn visit<Er, C: FnMut(E) -> Result<(), Er>>(
        &mut self,
        root: usize,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), Er> {
        self.visit_filtered(root, callback, |_| true, pl)
    }

    /// Visits the whole graph, restarting from every node in order, skipping
    /// nodes rejected by `filter`.
    fn visit_all_filtered<Er, C: FnMut(E) -> Result<(), Er>, F: FnMut(E::FilterArgs) -> bool>(
        &mut self,
        callback: C,
        filter: F,
        pl: &mut impl ProgressLog,
    ) -> Result<(), Er>;

    /// Visits the whole graph, restarting from every node in order.
    fn visit_all<Er, C: FnMut(E) -> Result<(), Er>>(
        &mut self,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), Er> {
        self.visit_all_filtered(callback, |_| true, pl)
    }

    /// Resets the visit status, making it possible to reuse it.
    fn reset(&mut self);
}
