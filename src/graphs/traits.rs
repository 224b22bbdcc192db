/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// A directed graph with random access to the successors of each node.
///
/// Nodes are the integers in `[0..num_nodes)`. Undirected graphs are
/// represented by symmetric arc pairs; symmetry is a construction
/// responsibility of the caller and is not enforced here.
pub trait RandomAccessGraph {
    /// The number of nodes of the graph.
    fn num_nodes(&self) -> usize;

    /// The type of the iterator over the successors of a node.
    type Successors<'a>: IntoIterator<Item = usize>
    where
        Self: 'a;

    /// Returns the successors of a node, in insertion order.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `node` is out of range.
    fn successors(&self, node: usize) -> Self::Successors<'_>;

    /// Returns the number of successors of a node.
    fn outdegree(&self, node: usize) -> usize {
        self.successors(node).into_iter().count()
    }
}

/// A [`RandomAccessGraph`] whose arcs carry a nonnegative `u64` weight.
///
/// The weighted view must enumerate the same successors in the same order
/// as [`RandomAccessGraph::successors`].
pub trait RandomAccessWeightedGraph: RandomAccessGraph {
    /// The type of the iterator over the weighted successors of a node.
    type WeightedSuccessors<'a>: IntoIterator<Item = (usize, u64)>
    where
        Self: 'a;

    /// Returns the `(successor, weight)` pairs of a node, in insertion order.
    fn weighted_successors(&self, node: usize) -> Self::WeightedSuccessors<'_>;
}

impl<G: RandomAccessGraph> RandomAccessGraph for &G {
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    type Successors<'a>
        = G::Successors<'a>
    where
        Self: 'a;

    fn successors(&self, node: usize) -> Self::Successors<'_> {
        (**self).successors(node)
    }

    fn outdegree(&self, node: usize) -> usize {
        (**self).outdegree(node)
    }
}

impl<G: RandomAccessWeightedGraph> RandomAccessWeightedGraph for &G {
    type WeightedSuccessors<'a>
        = G::WeightedSuccessors<'a>
    where
        Self: 'a;

    fn weighted_successors(&self, node: usize) -> Self::WeightedSuccessors<'_> {
        (**self).weighted_successors(node)
    }
}
