/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Strongly connected components.

mod kosaraju;
pub use kosaraju::*;

/// The strongly connected components of a graph.
///
/// Component indices are assigned in topological order of the condensation:
/// if there is an arc from the component of `u` to the component of `v`,
/// then `component()[u] <= component()[v]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sccs {
    num_components: usize,
    component: Box<[usize]>,
}

impl Sccs {
    pub fn new(num_components: usize, component: Box<[usize]>) -> Self {
        Self {
            num_components,
            component,
        }
    }

    /// The number of strongly connected components.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// The component index of each node.
    pub fn component(&self) -> &[usize] {
        &self.component
    }

    /// Returns the size of each component.
    pub fn compute_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.num_components];
        for &node_component in self.component() {
            sizes[node_component] += 1;
        }
        sizes
    }

    /// Returns the components as lists of node indices, indexed by
    /// component; nodes appear in increasing order inside each list.
    pub fn partition(&self) -> Vec<Vec<usize>> {
        let mut partition = vec![Vec::new(); self.num_components];
        for (node, &component) in self.component().iter().enumerate() {
            partition[component].push(node);
        }
        partition
    }

    /// Renumbers by decreasing size the components of this set.
    ///
    /// After a call to this method, the sizes of strongly connected
    /// components will decrease in the component index. Note that this
    /// destroys the topological ordering of the component indices.
    pub fn sort_by_size(&mut self) {
        let sizes = self.compute_sizes();
        let mut sort_perm = Vec::from_iter(0..sizes.len());
        sort_perm.sort_unstable_by(|&x, &y| sizes[y].cmp(&sizes[x]));
        let mut inv_perm = vec![0; sizes.len()];
        for (i, &x) in sort_perm.iter().enumerate() {
            inv_perm[x] = i;
        }
        self.component
            .iter_mut()
            .for_each(|node_component| *node_component = inv_perm[*node_component]);
    }
}
