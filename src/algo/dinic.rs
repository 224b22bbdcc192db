/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Max flow by Dinic's algorithm.

use crate::{Error, Result};
use dsi_progress_logger::ProgressLog;
use std::collections::VecDeque;
use sux::bits::BitVec;

/// The result of a [max-flow computation](Dinic::max_flow).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxFlow {
    /// The value of the maximum flow.
    pub flow: u64,
    /// The augmenting paths taken, as node sequences from source to sink,
    /// in discovery order. The per-path bottlenecks sum to
    /// [`flow`](Self::flow), so the paths give a flow decomposition.
    pub paths: Vec<Vec<usize>>,
}

/// A flow network with a dense residual-capacity matrix, solved by Dinic's
/// algorithm.
///
/// The matrix is owned exclusively by this value and is consumed in place
/// by [`max_flow`](Self::max_flow): after the call it holds the residual
/// network of the computed flow, and the conservation invariant
/// `residual(u, v) + residual(v, u)` relative to the original capacities
/// holds for every arc.
///
/// # Examples
///
/// ```
/// use vec_graph_algo::algo::dinic::Dinic;
/// use dsi_progress_logger::no_logging;
///
/// let mut network = Dinic::new(4);
/// network.add_arc(0, 1, 3).unwrap();
/// network.add_arc(0, 2, 2).unwrap();
/// network.add_arc(1, 3, 2).unwrap();
/// network.add_arc(2, 3, 3).unwrap();
/// assert_eq!(network.max_flow(0, 3, no_logging![]).unwrap().flow, 4);
/// ```
#[derive(Debug, Clone)]
pub struct Dinic {
    size: usize,
    // Row-major size × size residual capacities.
    capacity: Vec<u64>,
}

impl Dinic {
    /// Creates a flow network with `size` nodes and no arcs.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            capacity: vec![0; size * size],
        }
    }

    /// The number of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Adds `capacity` to the arc `from → to`; parallel arcs accumulate.
    ///
    /// Returns [`Error::InvalidIndex`] if an endpoint is out of range or
    /// the arc is a self loop.
    pub fn add_arc(&mut self, from: usize, to: usize, capacity: u64) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from == to {
            return Err(Error::InvalidIndex {
                index: to,
                size: self.size,
            });
        }
        let entry = &mut self.capacity[from * self.size + to];
        *entry = entry.saturating_add(capacity);
        Ok(())
    }

    /// The residual capacity of the arc `from → to`.
    pub fn residual(&self, from: usize, to: usize) -> Result<u64> {
        self.check_index(from)?;
        self.check_index(to)?;
        Ok(self.capacity[from * self.size + to])
    }

    /// Computes a maximum flow from `source` to `sink`, together with the
    /// augmenting paths taken.
    ///
    /// Each phase levels the residual network by a BFS from `source` and
    /// then extracts a blocking flow: a DFS repeatedly looks for paths
    /// along strictly level-increasing arcs with positive residual
    /// capacity, and marks dead every node it retreats from, so no node is
    /// re-explored within the phase (reverse arcs never increase levels,
    /// so augmenting cannot revive a dead node). The algorithm stops when a
    /// BFS no longer reaches `sink`.
    ///
    /// Returns [`Error::InvalidIndex`] if `source` or `sink` is out of
    /// range or they coincide.
    pub fn max_flow(
        &mut self,
        source: usize,
        sink: usize,
        pl: &mut impl ProgressLog,
    ) -> Result<MaxFlow> {
        self.check_index(source)?;
        self.check_index(sink)?;
        if source == sink {
            return Err(Error::InvalidIndex {
                index: sink,
                size: self.size,
            });
        }

        pl.item_name("path");
        pl.start("Computing max flow...");

        let size = self.size;
        let mut flow = 0;
        let mut paths = Vec::new();
        let mut level = vec![usize::MAX; size];
        let mut queue = VecDeque::new();

        loop {
            // Level the residual network.
            level.iter_mut().for_each(|l| *l = usize::MAX);
            level[source] = 0;
            queue.clear();
            queue.push_back(source);
            while let Some(u) = queue.pop_front() {
                for v in 0..size {
                    if level[v] == usize::MAX && self.capacity[u * size + v] > 0 {
                        level[v] = level[u] + 1;
                        queue.push_back(v);
                    }
                }
            }
            if level[sink] == usize::MAX {
                break;
            }

            // Extract a blocking flow.
            let mut dead = BitVec::new(size);
            let mut path = vec![source];
            while let Some(&u) = path.last() {
                if u == sink {
                    let bottleneck = path
                        .windows(2)
                        .map(|arc| self.capacity[arc[0] * size + arc[1]])
                        .min()
                        .unwrap();
                    for arc in path.windows(2) {
                        self.capacity[arc[0] * size + arc[1]] -= bottleneck;
                        let reverse = &mut self.capacity[arc[1] * size + arc[0]];
                        *reverse = reverse.saturating_add(bottleneck);
                    }
                    flow += bottleneck;
                    paths.push(path.clone());
                    pl.light_update();
                    path.truncate(1);
                    continue;
                }
                let next = (0..size).find(|&v| {
                    !dead.get(v) && level[v] == level[u] + 1 && self.capacity[u * size + v] > 0
                });
                match next {
                    Some(v) => path.push(v),
                    None => {
                        // No level-respecting path to the sink through u.
                        dead.set(u, true);
                        path.pop();
                    }
                }
            }
        }

        pl.done();
        Ok(MaxFlow { flow, paths })
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.size {
            return Err(Error::InvalidIndex {
                index,
                size: self.size,
            });
        }
        Ok(())
    }
}
