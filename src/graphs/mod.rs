/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Vector-backed graph representations.
//!
//! Graphs are immutable for the purposes of the algorithms in
//! [`crate::algo`]: adjacency is append-only, and no algorithm ever mutates
//! the graph it is given.

mod vec_graph;
pub use vec_graph::*;

/// Traits for random-access adjacency.
pub mod traits;
