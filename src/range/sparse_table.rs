/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::{Error, Result};

/// A sparse table for O(1) range-minimum queries over a fixed array of
/// `i64` values.
///
/// Construction is O(n log n) by doubling: row `j` of the table holds the
/// minimum of each window of length `2^j`. The structure is immutable; if
/// the backing array changes, the whole table must be rebuilt.
///
/// # Examples
///
/// ```
/// use vec_graph_algo::range::SparseTable;
///
/// let table = SparseTable::new(&[5, 2, 4, 7, 6, 1]).unwrap();
/// assert_eq!(table.query(0, 2), Some(2));
/// assert_eq!(table.query(2, 4), Some(4));
/// assert_eq!(table.query(3, 2), None);
/// ```
#[derive(Debug, Clone)]
pub struct SparseTable {
    n: usize,
    // lookup[j][i] is the minimum of values[i..i + 2^j].
    lookup: Vec<Vec<i64>>,
}

impl SparseTable {
    /// Builds a sparse table over the given values.
    ///
    /// Returns [`Error::EmptyInput`] if `values` is empty.
    pub fn new(values: &[i64]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyInput);
        }
        let n = values.len();
        let levels = n.ilog2() as usize + 1;
        let mut lookup = Vec::with_capacity(levels);
        lookup.push(values.to_vec());
        for j in 1..levels {
            let prev = &lookup[j - 1];
            let half = 1 << (j - 1);
            let row = (0..n - 2 * half + 1)
                .map(|i| prev[i].min(prev[i + half]))
                .collect();
            lookup.push(row);
        }
        Ok(Self { n, lookup })
    }

    /// The length of the underlying array.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false: empty tables cannot be built.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the minimum of `values[l..=r]` in O(1) using two
    /// overlapping power-of-two windows, or `None` if the range is
    /// inverted or out of bounds.
    pub fn query(&self, l: usize, r: usize) -> Option<i64> {
        if l > r || r >= self.n {
            return None;
        }
        let j = (r - l + 1).ilog2() as usize;
        Some(self.lookup[j][l].min(self.lookup[j][r + 1 - (1 << j)]))
    }
}
