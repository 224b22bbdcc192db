/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::{Error, Result};
use std::marker::PhantomData;

/// The combining operation of a [`SegmentTree`].
pub trait Op {
    /// The neutral element: `combine(NEUTRAL, x) == x` for every `x`.
    const NEUTRAL: i64;
    /// Combines the results of two adjacent subranges.
    fn combine(a: i64, b: i64) -> i64;
}

/// Range sums; the neutral element is 0. Sums saturate on overflow.
#[derive(Debug, Clone, Copy)]
pub struct Sum;

impl Op for Sum {
    const NEUTRAL: i64 = 0;
    #[inline(always)]
    fn combine(a: i64, b: i64) -> i64 {
        a.saturating_add(b)
    }
}

/// Range minima; the neutral element is `i64::MAX`.
#[derive(Debug, Clone, Copy)]
pub struct Min;

impl Op for Min {
    const NEUTRAL: i64 = i64::MAX;
    #[inline(always)]
    fn combine(a: i64, b: i64) -> i64 {
        a.min(b)
    }
}

/// Range maxima; the neutral element is `i64::MIN`.
#[derive(Debug, Clone, Copy)]
pub struct Max;

impl Op for Max {
    const NEUTRAL: i64 = i64::MIN;
    #[inline(always)]
    fn combine(a: i64, b: i64) -> i64 {
        a.max(b)
    }
}

/// A segment tree over a fixed-length array of `i64` values, parameterized
/// on the combining operation.
///
/// The backing store is the usual 1-indexed implicit binary tree of `4n`
/// slots; node `v` covers a range split between children `2v` and
/// `2v + 1`. Queries address closed ranges `[l, r]`; an empty or inverted
/// range yields the neutral element of the operation rather than an error,
/// and `r` is clamped to the last index.
///
/// # Examples
///
/// ```
/// use vec_graph_algo::range::{SegmentTree, Sum};
///
/// let mut tree = SegmentTree::<Sum>::new(&[1, 2, 3, 4]).unwrap();
/// assert_eq!(tree.query(1, 2), 5);
/// tree.update(2, 10).unwrap();
/// assert_eq!(tree.query(1, 2), 12);
/// ```
#[derive(Debug, Clone)]
pub struct SegmentTree<O: Op> {
    n: usize,
    tree: Vec<i64>,
    _op: PhantomData<O>,
}

impl<O: Op> SegmentTree<O> {
    /// Builds a segment tree over the given values.
    ///
    /// Returns [`Error::EmptyInput`] if `values` is empty.
    pub fn new(values: &[i64]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyInput);
        }
        let n = values.len();
        let mut tree = Self {
            n,
            tree: vec![O::NEUTRAL; 4 * n],
            _op: PhantomData,
        };
        tree.build(values, 1, 0, n - 1);
        Ok(tree)
    }

    /// The length of the underlying array.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false: empty trees cannot be built.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the combination of `values[l..=r]`.
    ///
    /// `r` is clamped to `len() - 1`; an empty range (`l > r` after
    /// clamping) yields the neutral element.
    pub fn query(&self, l: usize, r: usize) -> i64 {
        let r = r.min(self.n - 1);
        if l > r {
            return O::NEUTRAL;
        }
        self.query_in(1, 0, self.n - 1, l, r)
    }

    /// Sets the value at `pos`, recombining the ancestors of its leaf.
    ///
    /// Returns [`Error::InvalidIndex`] if `pos` is out of range.
    pub fn update(&mut self, pos: usize, value: i64) -> Result<()> {
        if pos >= self.n {
            return Err(Error::InvalidIndex {
                index: pos,
                size: self.n,
            });
        }
        self.update_in(1, 0, self.n - 1, pos, value);
        Ok(())
    }

    fn build(&mut self, values: &[i64], v: usize, tl: usize, tr: usize) {
        if tl == tr {
            self.tree[v] = values[tl];
        } else {
            let tm = (tl + tr) / 2;
            self.build(values, 2 * v, tl, tm);
            self.build(values, 2 * v + 1, tm + 1, tr);
            self.tree[v] = O::combine(self.tree[2 * v], self.tree[2 * v + 1]);
        }
    }

    fn query_in(&self, v: usize, tl: usize, tr: usize, l: usize, r: usize) -> i64 {
        if l > r {
            return O::NEUTRAL;
        }
        if l == tl && r == tr {
            return self.tree[v];
        }
        let tm = (tl + tr) / 2;
        O::combine(
            self.query_in(2 * v, tl, tm, l, r.min(tm)),
            self.query_in(2 * v + 1, tm + 1, tr, l.max(tm + 1), r),
        )
    }

    fn update_in(&mut self, v: usize, tl: usize, tr: usize, pos: usize, value: i64) {
        if tl == tr {
            self.tree[v] = value;
        } else {
            let tm = (tl + tr) / 2;
            if pos <= tm {
                self.update_in(2 * v, tl, tm, pos, value);
            } else {
                self.update_in(2 * v + 1, tm + 1, tr, pos, value);
            }
            self.tree[v] = O::combine(self.tree[2 * v], self.tree[2 * v + 1]);
        }
    }
}

impl SegmentTree<Max> {
    /// Returns the first index holding a value strictly greater than
    /// `threshold`, if any.
    ///
    /// Descends the tree pruning every subtree whose maximum is at most
    /// `threshold`, left branch first, falling back to the right branch on
    /// failure, in O(log n).
    pub fn first_greater(&self, threshold: i64) -> Option<usize> {
        self.first_greater_in(1, 0, self.n - 1, threshold)
    }

    fn first_greater_in(&self, v: usize, tl: usize, tr: usize, threshold: i64) -> Option<usize> {
        if self.tree[v] <= threshold {
            return None;
        }
        if tl == tr {
            return Some(tl);
        }
        let tm = (tl + tr) / 2;
        self.first_greater_in(2 * v, tl, tm, threshold)
            .or_else(|| self.first_greater_in(2 * v + 1, tm + 1, tr, threshold))
    }
}
