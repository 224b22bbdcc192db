/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dsi_progress_logger::no_logging;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vec_graph_algo::algo::sccs::kosaraju;
use vec_graph_algo::algo::{dijkstra, top_sort};
use vec_graph_algo::graphs::{VecGraph, WeightedVecGraph};

const NODES: usize = 10_000;
const ARC_PROBABILITY: f64 = 0.001;

fn random_graph(seed: u64) -> VecGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = VecGraph::new(NODES);
    for u in 0..NODES {
        for v in 0..NODES {
            if u != v && rng.random_bool(ARC_PROBABILITY) {
                graph.add_arc(u, v);
            }
        }
    }
    graph
}

fn random_weighted_graph(seed: u64) -> WeightedVecGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = WeightedVecGraph::new(NODES);
    for u in 0..NODES {
        for v in 0..NODES {
            if u != v && rng.random_bool(ARC_PROBABILITY) {
                graph.add_arc(u, v, rng.random_range(1..1000));
            }
        }
    }
    graph
}

fn bench_top_sort(c: &mut Criterion) {
    let graph = random_graph(0);
    c.bench_function("top_sort", |b| {
        b.iter(|| top_sort(black_box(&graph), no_logging![]))
    });
}

fn bench_kosaraju(c: &mut Criterion) {
    let graph = random_graph(1);
    let transpose = graph.transposed();
    c.bench_function("kosaraju", |b| {
        b.iter(|| kosaraju(black_box(&graph), black_box(&transpose), no_logging![]))
    });
}

fn bench_dijkstra(c: &mut Criterion) {
    let graph = random_weighted_graph(2);
    c.bench_function("dijkstra", |b| {
        b.iter(|| dijkstra(black_box(&graph), 0, NODES - 1, no_logging![]))
    });
}

criterion_group!(benches, bench_top_sort, bench_kosaraju, bench_dijkstra);
criterion_main!(benches);
