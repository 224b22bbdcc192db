/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Errors returned by fallible operations of this crate.
///
/// Recoverable conditions (empty ranges, unreachable targets, failed
/// searches) are reported through sentinel or [`Option`] return values
/// instead; these variants all denote misuse that would otherwise compute
/// garbage silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A node, literal, or position index is outside the valid range.
    #[error("index {index} out of range for size {size}")]
    InvalidIndex { index: usize, size: usize },
    /// A query was issued before the required build/run phase completed.
    #[error("structure queried before being built")]
    NotBuilt,
    /// A structure was built over zero elements.
    #[error("input must contain at least one element")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, Error>;
