/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use dsi_progress_logger::no_logging;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::convert::Infallible;
use vec_graph_algo::algo::visits::depth_first::*;
use vec_graph_algo::algo::visits::Sequential;
use vec_graph_algo::algo::{acyclicity, top_sort};
use vec_graph_algo::graphs::VecGraph;
use vec_graph_algo::traits::RandomAccessGraph;

#[test]
fn test_top_sort() {
    assert_eq!(
        vec![0, 1, 2].into_boxed_slice(),
        top_sort(VecGraph::from_arcs([(1, 2), (0, 1)]), no_logging![])
    );

    assert_eq!(
        vec![0, 2, 1, 3].into_boxed_slice(),
        top_sort(
            VecGraph::from_arcs([(0, 1), (0, 2), (2, 3), (1, 3)]),
            no_logging![]
        )
    );
}

#[test]
fn test_top_sort_respects_arcs_on_random_dags() {
    let mut rng = StdRng::seed_from_u64(0x4213);
    for _ in 0..20 {
        let n = rng.random_range(2..50);
        let mut arcs = Vec::new();
        for u in 0..n {
            for v in u + 1..n {
                // Arcs only from lower to higher indices, so the graph is
                // a DAG by construction.
                if rng.random_bool(0.1) {
                    arcs.push((u, v));
                }
            }
        }
        let graph = VecGraph::from_arcs(arcs.iter().copied());
        if graph.num_nodes() == 0 {
            continue;
        }
        let order = top_sort(&graph, no_logging![]);
        let mut position = vec![0; graph.num_nodes()];
        for (i, &node) in order.iter().enumerate() {
            position[node] = i;
        }
        for &(u, v) in &arcs {
            assert!(position[u] < position[v], "arc ({u}, {v}) points backwards");
        }
    }
}

#[test]
fn test_acyclicity() {
    assert!(acyclicity(VecGraph::from_arcs([(1, 2), (0, 1)]), no_logging![]));
    assert!(!acyclicity(
        VecGraph::from_arcs([(0, 1), (1, 2), (2, 0)]),
        no_logging![]
    ));
    // Diamonds are fine: revisits not on the visit path are not cycles.
    assert!(acyclicity(
        VecGraph::from_arcs([(0, 1), (0, 2), (2, 3), (1, 3)]),
        no_logging![]
    ));
    // Self loop.
    assert!(!acyclicity(VecGraph::from_arcs([(0, 0)]), no_logging![]));
}

#[test]
fn test_acyclicity_on_random_forests_and_injected_cycles() {
    let mut rng = StdRng::seed_from_u64(0x91219);
    for _ in 0..20 {
        let n = rng.random_range(3..40);
        // A random branching: each node except the root points to a parent
        // with a lower index.
        let mut arcs = Vec::new();
        for v in 1..n {
            arcs.push((rng.random_range(0..v), v));
        }
        assert!(acyclicity(
            VecGraph::from_arcs(arcs.iter().copied()),
            no_logging![]
        ));

        // Close a random root-to-leaf arc into a cycle.
        arcs.push((n - 1, 0));
        assert!(!acyclicity(
            VecGraph::from_arcs(arcs.iter().copied()),
            no_logging![]
        ));
    }
}

#[test]
fn test_depth_first_events() {
    let graph = VecGraph::from_arcs([(0, 1), (1, 2), (2, 0), (1, 3)]);
    let mut visit = SeqPath::new(&graph);

    let mut previsits = Vec::new();
    let mut back_arcs = Vec::new();
    visit
        .visit(
            0,
            |event| {
                match event {
                    EventPred::Previsit { curr, depth, .. } => previsits.push((curr, depth)),
                    EventPred::Revisit {
                        curr,
                        pred,
                        on_stack: true,
                        ..
                    } => back_arcs.push((pred, curr)),
                    _ => (),
                }
                Ok::<(), Infallible>(())
            },
            no_logging![],
        )
        .unwrap();

    assert_eq!(previsits, vec![(0, 0), (1, 1), (2, 2), (3, 2)]);
    assert_eq!(back_arcs, vec![(2, 0)]);
}

#[test]
fn test_reset_allows_reuse() {
    let graph = VecGraph::from_arcs([(0, 1), (1, 2)]);
    let mut visit = SeqNoPred::new(&graph);

    for _ in 0..2 {
        let mut seen = Vec::new();
        visit
            .visit(
                0,
                |event| {
                    if let EventNoPred::Previsit { curr, .. } = event {
                        seen.push(curr);
                    }
                    Ok::<(), Infallible>(())
                },
                no_logging![],
            )
            .unwrap();
        assert_eq!(seen, vec![0, 1, 2]);
        visit.reset();
    }
}

#[test]
fn test_filter_skips_subtrees() {
    let graph = VecGraph::from_arcs([(0, 1), (1, 2), (0, 3)]);
    let mut visit = SeqNoPred::new(&graph);

    let mut seen = Vec::new();
    visit
        .visit_filtered(
            0,
            |event| {
                if let EventNoPred::Previsit { curr, .. } = event {
                    seen.push(curr);
                }
                Ok::<(), Infallible>(())
            },
            |args| args.curr != 1,
            no_logging![],
        )
        .unwrap();
    assert_eq!(seen, vec![0, 3]);
}
