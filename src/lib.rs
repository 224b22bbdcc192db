/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Classic combinatorial algorithms over small integer-indexed structures:
//! vector-backed graphs, range-query structures, shortest paths,
//! connectivity, max flow, and 2-SAT.
//!
//! Vertices are plain `usize` indices in `[0..n)`; algorithms attach their
//! transient state (visited bits, distance arrays, work stacks) to the call
//! or to a dedicated solver value, never to the graph itself, so independent
//! computations can run on independent instances concurrently.

pub mod algo;
mod errors;
pub mod graphs;
pub mod range;

pub use errors::{Error, Result};

/// Module exposing all traits in a single level.
pub mod traits {
    use super::*;
    pub use algo::visits::Sequential;
    pub use graphs::traits::*;
}

/// Use `use vec_graph_algo::prelude::*;` to import common utilities, modules
/// and all traits.
pub mod prelude {
    use super::*;
    pub use algo::dijkstra;
    pub use algo::dinic::{Dinic, MaxFlow};
    pub use algo::sccs;
    pub use algo::two_sat::TwoSat;
    pub use algo::visits::depth_first;
    pub use algo::{acyclicity, cuts, top_sort, CutMode, Cuts, FloydWarshall};
    pub use graphs::{VecGraph, WeightedVecGraph};
    pub use range::{Max, Min, SegmentTree, SparseTable, Sum};
    pub use traits::*;
}
