/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Array-backed range-query structures.
//!
//! Both structures answer queries over closed integer intervals of a fixed
//! logical array of `i64` values: the [segment tree](SegmentTree) supports
//! point updates in O(log n), the [sparse table](SparseTable) is immutable
//! but answers range minima in O(1).

mod segment_tree;
pub use segment_tree::*;

mod sparse_table;
pub use sparse_table::*;
