/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graph algorithms.

pub mod visits;

pub mod sccs;

mod acyclicity;
pub use acyclicity::acyclicity;
mod top_sort;
pub use top_sort::top_sort;

mod cuts;
pub use cuts::{cuts, CutMode, Cuts};

mod dijkstra;
pub use dijkstra::{dijkstra, INFINITY};

mod floyd_warshall;
pub use floyd_warshall::{FloydWarshall, UNREACHABLE};

pub mod dinic;
pub mod two_sat;
