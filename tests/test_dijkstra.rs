/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use dsi_progress_logger::no_logging;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vec_graph_algo::algo::{dijkstra, FloydWarshall, INFINITY, UNREACHABLE};
use vec_graph_algo::graphs::WeightedVecGraph;

#[test]
fn test_shortest_path_takes_the_cheap_detour() {
    let graph =
        WeightedVecGraph::from_arcs([(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1), (2, 3, 5)]);
    // 0 → 2 → 1 → 3 costs 1 + 2 + 1.
    assert_eq!(dijkstra(&graph, 0, 3, no_logging![]), 4);
}

#[test]
fn test_source_distance_is_zero() {
    let graph = WeightedVecGraph::from_arcs([(0, 1, 10)]);
    assert_eq!(dijkstra(&graph, 0, 0, no_logging![]), 0);
    assert_eq!(dijkstra(&graph, 1, 1, no_logging![]), 0);
}

#[test]
fn test_unreachable_target() {
    let graph = WeightedVecGraph::from_arcs([(0, 1, 1), (2, 1, 1)]);
    assert_eq!(dijkstra(&graph, 0, 2, no_logging![]), INFINITY);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_out_of_range_target_panics() {
    let graph = WeightedVecGraph::new(2);
    dijkstra(&graph, 0, 2, no_logging![]);
}

#[test]
fn test_matches_floyd_warshall_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(0xd115);
    for _ in 0..10 {
        let n = rng.random_range(2..25);
        let mut graph = WeightedVecGraph::new(n);
        for u in 0..n {
            for v in 0..n {
                if u != v && rng.random_bool(0.15) {
                    graph.add_arc(u, v, rng.random_range(0..100));
                }
            }
        }

        let mut apsp = FloydWarshall::from_graph(&graph);
        apsp.run(no_logging![]);

        for s in 0..n {
            for t in 0..n {
                let single_source = dijkstra(&graph, s, t, no_logging![]);
                let all_pairs = apsp.dist(s, t).unwrap();
                if all_pairs == UNREACHABLE {
                    assert_eq!(single_source, INFINITY);
                } else {
                    assert_eq!(single_source, all_pairs as u64);
                }
            }
        }
    }
}
