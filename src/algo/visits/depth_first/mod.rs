/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Depth-first visits.
//!
//! Since events with predecessor information describe the arc being
//! traversed, all post-init events of [`EventPred`] can be interpreted as
//! arc events; the only exceptions are the previsit and postvisit events of
//! a root, whose predecessor is the root itself.

mod seq;
pub use seq::*;

use super::Event;

/// Events generated by depth-first visits keeping track of predecessors.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum EventPred {
    /// Initialization: a new visit tree is about to be grown from `root`.
    Init {
        /// The root of the new visit tree.
        root: usize,
    },
    /// The node has been encountered for the first time: we are traversing
    /// a new tree arc, unless `curr` is the root.
    Previsit {
        /// The current node.
        curr: usize,
        /// The predecessor of `curr` in the visit tree.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The length of the visit path from `root` to `curr`.
        depth: usize,
    },
    /// The node has been encountered before: we are traversing a back arc,
    /// a forward arc, or a cross arc.
    Revisit {
        /// The current node.
        curr: usize,
        /// The node from which the arc to `curr` was traversed.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The length of the visit path from `root` to `pred`, plus one.
        depth: usize,
        /// Whether `curr` is on the visit path; visits that do not track
        /// the path always report `false`.
        on_stack: bool,
    },
    /// The enumeration of the successors of the node has been completed: we
    /// are retreating from a tree arc, unless `curr` is the root.
    Postvisit {
        /// The current node.
        curr: usize,
        /// The predecessor of `curr` in the visit tree.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The length of the visit path from `root` to `curr`.
        depth: usize,
    },
    /// The visit tree grown from `root` has been completed.
    Done {
        /// The root of the completed visit tree.
        root: usize,
    },
}

/// Filter arguments for visits generating [`EventPred`] events.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct FilterArgsPred {
    /// The node to be visited.
    pub curr: usize,
    /// The predecessor of `curr` in the visit tree.
    pub pred: usize,
    /// The root of the current visit tree.
    pub root: usize,
    /// The depth `curr` would be visited at.
    pub depth: usize,
}

impl Event for EventPred {
    type FilterArgs = FilterArgsPred;
}

/// Events generated by depth-first visits not keeping track of
/// predecessors.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum EventNoPred {
    /// Initialization: a new visit tree is about to be grown from `root`.
    Init {
        /// The root of the new visit tree.
        root: usize,
    },
    /// The node has been encountered for the first time.
    Previsit {
        /// The current node.
        curr: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The length of the visit path from `root` to `curr`.
        depth: usize,
    },
    /// The node has been encountered before.
    Revisit {
        /// The current node.
        curr: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth the revisit happened at.
        depth: usize,
    },
    /// The visit tree grown from `root` has been completed.
    Done {
        /// The root of the completed visit tree.
        root: usize,
    },
}

/// Filter arguments for visits generating [`EventNoPred`] events.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct FilterArgsNoPred {
    /// The node to be visited.
    pub curr: usize,
    /// The root of the current visit tree.
    pub root: usize,
    /// The depth `curr` would be visited at.
    pub depth: usize,
}

impl Event for EventNoPred {
    type FilterArgs = FilterArgsNoPred;
}
