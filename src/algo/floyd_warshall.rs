/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::traits::RandomAccessWeightedGraph;
use crate::{Error, Result};
use dsi_progress_logger::ProgressLog;

/// The cost of unreachable pairs.
pub const UNREACHABLE: i64 = i64::MAX;

/// All-pairs shortest paths by the Floyd–Warshall algorithm.
///
/// Costs are `i64`; negative arcs are allowed, negative cycles are not
/// (with a negative cycle the result is undefined). The matrix must be
/// populated with [`add_arc`](Self::add_arc), closed once with
/// [`run`](Self::run), and only then queried with [`dist`](Self::dist).
///
/// # Examples
///
/// ```
/// use vec_graph_algo::algo::FloydWarshall;
/// use dsi_progress_logger::no_logging;
///
/// let mut apsp = FloydWarshall::new(3);
/// apsp.add_arc(0, 1, 5).unwrap();
/// apsp.add_arc(1, 2, -2).unwrap();
/// apsp.run(no_logging![]);
/// assert_eq!(apsp.dist(0, 2).unwrap(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct FloydWarshall {
    n: usize,
    // Row-major n × n cost matrix.
    dist: Vec<i64>,
    run: bool,
}

impl FloydWarshall {
    /// Creates a matrix for `n` nodes with every pair unreachable and a
    /// zero diagonal.
    pub fn new(n: usize) -> Self {
        let mut dist = vec![UNREACHABLE; n * n];
        for i in 0..n {
            dist[i * n + i] = 0;
        }
        Self { n, dist, run: false }
    }

    /// Creates a matrix from the arcs of a weighted graph.
    pub fn from_graph(graph: &impl RandomAccessWeightedGraph) -> Self {
        let mut apsp = Self::new(graph.num_nodes());
        for u in 0..apsp.n {
            for (v, w) in graph.weighted_successors(u) {
                // Graph weights fit in i64 in any realistic use; saturate
                // rather than wrap on the pathological ones.
                apsp.set_arc(u, v, i64::try_from(w).unwrap_or(UNREACHABLE));
            }
        }
        apsp
    }

    /// The number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.n
    }

    /// Sets the cost of the arc `u → v` to the minimum of the current and
    /// given cost.
    ///
    /// Returns [`Error::InvalidIndex`] if `u` or `v` is out of range, and
    /// [`Error::NotBuilt`] if the matrix has already been closed by
    /// [`run`](Self::run), as the closed distances would go stale.
    pub fn add_arc(&mut self, u: usize, v: usize, cost: i64) -> Result<()> {
        if self.run {
            return Err(Error::NotBuilt);
        }
        self.check_index(u)?;
        self.check_index(v)?;
        self.set_arc(u, v, cost);
        Ok(())
    }

    fn set_arc(&mut self, u: usize, v: usize, cost: i64) {
        let entry = &mut self.dist[u * self.n + v];
        *entry = (*entry).min(cost);
    }

    /// Closes the matrix under the triangle relaxation
    /// `dist[i][j] = min(dist[i][j], dist[i][k] + dist[k][j])`, in O(n³).
    ///
    /// Idempotent; additions through unreachable pairs are skipped, and
    /// finite additions saturate.
    pub fn run(&mut self, pl: &mut impl ProgressLog) {
        let n = self.n;
        pl.item_name("pivot");
        pl.expected_updates(Some(n));
        pl.start("Computing all-pairs shortest paths...");

        for k in 0..n {
            for i in 0..n {
                let dik = self.dist[i * n + k];
                if dik == UNREACHABLE {
                    continue;
                }
                for j in 0..n {
                    let dkj = self.dist[k * n + j];
                    if dkj == UNREACHABLE {
                        continue;
                    }
                    let through_k = dik.saturating_add(dkj);
                    let entry = &mut self.dist[i * n + j];
                    if through_k < *entry {
                        *entry = through_k;
                    }
                }
            }
            pl.update();
        }

        pl.done();
        self.run = true;
    }

    /// The shortest-path cost from `x` to `y`, [`UNREACHABLE`] if there is
    /// no path.
    ///
    /// Returns [`Error::NotBuilt`] if called before [`run`](Self::run).
    pub fn dist(&self, x: usize, y: usize) -> Result<i64> {
        if !self.run {
            return Err(Error::NotBuilt);
        }
        self.check_index(x)?;
        self.check_index(y)?;
        Ok(self.dist[x * self.n + y])
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.n {
            return Err(Error::InvalidIndex {
                index,
                size: self.n,
            });
        }
        Ok(())
    }
}
