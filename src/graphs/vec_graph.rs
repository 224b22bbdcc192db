/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::traits::{RandomAccessGraph, RandomAccessWeightedGraph};

/// A directed graph stored as a vector of successor lists.
///
/// # Examples
///
/// ```
/// use vec_graph_algo::graphs::VecGraph;
/// use vec_graph_algo::traits::RandomAccessGraph;
///
/// let graph = VecGraph::from_arcs([(0, 1), (1, 2), (2, 0)]);
/// assert_eq!(graph.num_nodes(), 3);
/// assert_eq!(graph.successors(1).collect::<Vec<_>>(), vec![2]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VecGraph {
    succ: Vec<Vec<usize>>,
}

impl VecGraph {
    /// Creates a graph with `n` nodes and no arcs.
    pub fn new(n: usize) -> Self {
        Self {
            succ: vec![Vec::new(); n],
        }
    }

    /// Creates a graph from a list of arcs, with as many nodes as needed to
    /// fit the largest node index.
    pub fn from_arcs(arcs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut graph = Self::default();
        for (u, v) in arcs {
            let n = u.max(v) + 1;
            if n > graph.succ.len() {
                graph.succ.resize_with(n, Vec::new);
            }
            graph.succ[u].push(v);
        }
        graph
    }

    /// Creates a graph from a list of undirected edges, adding both arc
    /// directions.
    pub fn from_edges(edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        Self::from_arcs(edges.into_iter().flat_map(|(u, v)| [(u, v), (v, u)]))
    }

    /// Adds the arc `u → v`.
    ///
    /// # Panics
    ///
    /// Panics if `u` or `v` is out of range.
    pub fn add_arc(&mut self, u: usize, v: usize) {
        let n = self.succ.len();
        assert!(u < n && v < n, "arc ({u}, {v}) out of range for {n} nodes");
        self.succ[u].push(v);
    }

    /// Adds the arcs `u → v` and `v → u`.
    ///
    /// # Panics
    ///
    /// Panics if `u` or `v` is out of range.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        self.add_arc(u, v);
        self.add_arc(v, u);
    }

    /// The number of arcs of the graph.
    pub fn num_arcs(&self) -> usize {
        self.succ.iter().map(Vec::len).sum()
    }

    /// Returns the graph with all arcs reversed.
    pub fn transposed(&self) -> Self {
        let mut succ = vec![Vec::new(); self.succ.len()];
        for (u, neighbors) in self.succ.iter().enumerate() {
            for &v in neighbors {
                succ[v].push(u);
            }
        }
        Self { succ }
    }
}

impl RandomAccessGraph for VecGraph {
    fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    type Successors<'a> = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn successors(&self, node: usize) -> Self::Successors<'_> {
        self.succ[node].iter().copied()
    }

    fn outdegree(&self, node: usize) -> usize {
        self.succ[node].len()
    }
}

fn drop_weight(pair: &(usize, u64)) -> usize {
    pair.0
}

/// A directed graph stored as a vector of `(successor, weight)` lists.
///
/// Weights are nonnegative `u64` values; unweighted algorithms see the
/// plain successor view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightedVecGraph {
    succ: Vec<Vec<(usize, u64)>>,
}

impl WeightedVecGraph {
    /// Creates a graph with `n` nodes and no arcs.
    pub fn new(n: usize) -> Self {
        Self {
            succ: vec![Vec::new(); n],
        }
    }

    /// Creates a graph from a list of weighted arcs, with as many nodes as
    /// needed to fit the largest node index.
    pub fn from_arcs(arcs: impl IntoIterator<Item = (usize, usize, u64)>) -> Self {
        let mut graph = Self::default();
        for (u, v, w) in arcs {
            let n = u.max(v) + 1;
            if n > graph.succ.len() {
                graph.succ.resize_with(n, Vec::new);
            }
            graph.succ[u].push((v, w));
        }
        graph
    }

    /// Creates a graph from a list of undirected weighted edges, adding both
    /// arc directions.
    pub fn from_edges(edges: impl IntoIterator<Item = (usize, usize, u64)>) -> Self {
        Self::from_arcs(edges.into_iter().flat_map(|(u, v, w)| [(u, v, w), (v, u, w)]))
    }

    /// Adds the arc `u → v` with weight `w`.
    ///
    /// # Panics
    ///
    /// Panics if `u` or `v` is out of range.
    pub fn add_arc(&mut self, u: usize, v: usize, w: u64) {
        let n = self.succ.len();
        assert!(u < n && v < n, "arc ({u}, {v}) out of range for {n} nodes");
        self.succ[u].push((v, w));
    }

    /// Adds the arcs `u → v` and `v → u`, both with weight `w`.
    ///
    /// # Panics
    ///
    /// Panics if `u` or `v` is out of range.
    pub fn add_edge(&mut self, u: usize, v: usize, w: u64) {
        self.add_arc(u, v, w);
        self.add_arc(v, u, w);
    }

    /// The number of arcs of the graph.
    pub fn num_arcs(&self) -> usize {
        self.succ.iter().map(Vec::len).sum()
    }
}

impl RandomAccessGraph for WeightedVecGraph {
    fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    type Successors<'a> =
        std::iter::Map<std::slice::Iter<'a, (usize, u64)>, fn(&(usize, u64)) -> usize>;

    fn successors(&self, node: usize) -> Self::Successors<'_> {
        self.succ[node].iter().map(drop_weight as fn(&(usize, u64)) -> usize)
    }

    fn outdegree(&self, node: usize) -> usize {
        self.succ[node].len()
    }
}

impl RandomAccessWeightedGraph for WeightedVecGraph {
    type WeightedSuccessors<'a> = std::iter::Copied<std::slice::Iter<'a, (usize, u64)>>;

    fn weighted_successors(&self, node: usize) -> Self::WeightedSuccessors<'_> {
        self.succ[node].iter().copied()
    }
}
