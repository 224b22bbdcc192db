/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vec_graph_algo::range::{Max, Min, SegmentTree, SparseTable, Sum};
use vec_graph_algo::Error;

#[test]
fn test_sum_queries_and_updates() -> Result<()> {
    let values = [1, 2, 3, 4, 5];
    let mut tree = SegmentTree::<Sum>::new(&values)?;

    assert_eq!(tree.query(0, 4), 15);
    assert_eq!(tree.query(1, 3), 9);
    assert_eq!(tree.query(2, 2), 3);

    tree.update(2, 10)?;
    assert_eq!(tree.query(2, 2), 10);
    assert_eq!(tree.query(0, 4), 22);
    // Other positions are untouched.
    assert_eq!(tree.query(0, 1), 3);
    assert_eq!(tree.query(3, 4), 9);
    Ok(())
}

#[test]
fn test_neutral_elements_on_empty_ranges() -> Result<()> {
    let values = [-5, -1, -3];
    assert_eq!(SegmentTree::<Sum>::new(&values)?.query(2, 1), 0);
    assert_eq!(SegmentTree::<Min>::new(&values)?.query(2, 1), i64::MAX);
    assert_eq!(SegmentTree::<Max>::new(&values)?.query(2, 1), i64::MIN);
    // The per-operation neutral keeps all-negative arrays honest.
    assert_eq!(SegmentTree::<Max>::new(&values)?.query(0, 2), -1);
    assert_eq!(SegmentTree::<Min>::new(&values)?.query(0, 2), -5);
    Ok(())
}

#[test]
fn test_query_clamps_the_right_endpoint() -> Result<()> {
    let tree = SegmentTree::<Sum>::new(&[1, 2, 3])?;
    assert_eq!(tree.query(1, 100), 5);
    assert_eq!(tree.query(100, 200), 0);
    Ok(())
}

#[test]
fn test_build_and_update_errors() {
    assert_eq!(SegmentTree::<Sum>::new(&[]).err(), Some(Error::EmptyInput));
    let mut tree = SegmentTree::<Sum>::new(&[1]).unwrap();
    assert_eq!(
        tree.update(1, 0),
        Err(Error::InvalidIndex { index: 1, size: 1 })
    );
}

#[test]
fn test_first_greater() -> Result<()> {
    let tree = SegmentTree::<Max>::new(&[1, 3, 2, 7, 7, 0])?;
    assert_eq!(tree.first_greater(0), Some(0));
    assert_eq!(tree.first_greater(2), Some(1));
    assert_eq!(tree.first_greater(3), Some(3));
    assert_eq!(tree.first_greater(6), Some(3));
    assert_eq!(tree.first_greater(7), None);
    Ok(())
}

#[test]
fn test_matches_brute_force_on_random_arrays() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(0x5e65);
    for _ in 0..20 {
        let n = rng.random_range(1..50);
        let mut values: Vec<i64> = (0..n).map(|_| rng.random_range(-100..100)).collect();
        let mut sum = SegmentTree::<Sum>::new(&values)?;
        let mut min = SegmentTree::<Min>::new(&values)?;
        let mut max = SegmentTree::<Max>::new(&values)?;

        for _ in 0..10 {
            let pos = rng.random_range(0..n);
            let value = rng.random_range(-100..100);
            values[pos] = value;
            sum.update(pos, value)?;
            min.update(pos, value)?;
            max.update(pos, value)?;
        }

        for l in 0..n {
            for r in l..n {
                let window = &values[l..=r];
                assert_eq!(sum.query(l, r), window.iter().sum::<i64>());
                assert_eq!(min.query(l, r), *window.iter().min().unwrap());
                assert_eq!(max.query(l, r), *window.iter().max().unwrap());
            }
        }

        for _ in 0..20 {
            let threshold = rng.random_range(-110..110);
            assert_eq!(
                max.first_greater(threshold),
                values.iter().position(|&v| v > threshold)
            );
        }
    }
    Ok(())
}

#[test]
fn test_sparse_table() -> Result<()> {
    let table = SparseTable::new(&[5, 2, 4, 7, 6, 1])?;
    assert_eq!(table.query(0, 5), Some(1));
    assert_eq!(table.query(0, 0), Some(5));
    assert_eq!(table.query(2, 4), Some(4));
    // Inverted and out-of-range intervals are not answerable.
    assert_eq!(table.query(3, 2), None);
    assert_eq!(table.query(0, 6), None);
    Ok(())
}

#[test]
fn test_sparse_table_errors() {
    assert_eq!(SparseTable::new(&[]).err(), Some(Error::EmptyInput));
}

#[test]
fn test_sparse_table_matches_brute_force() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(0x7ab1e);
    for _ in 0..20 {
        let n = rng.random_range(1..60);
        let values: Vec<i64> = (0..n).map(|_| rng.random_range(-1000..1000)).collect();
        let table = SparseTable::new(&values)?;
        for l in 0..n {
            for r in l..n {
                assert_eq!(table.query(l, r), values[l..=r].iter().min().copied());
            }
        }
    }
    Ok(())
}
