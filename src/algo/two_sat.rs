/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! 2-SAT by strongly connected components of the implication graph.

use crate::algo::sccs::{kosaraju, Sccs};
use crate::graphs::VecGraph;
use crate::{Error, Result};
use dsi_progress_logger::ProgressLog;

/// Returns the literal for variable `var` with the given polarity.
///
/// Literal `2 * var` asserts the variable, `2 * var + 1` negates it.
pub const fn lit(var: usize, positive: bool) -> usize {
    2 * var + !positive as usize
}

/// Returns the negation of a literal.
pub const fn negate(literal: usize) -> usize {
    literal ^ 1
}

/// A 2-SAT solver over an implication graph of `2 * num_vars` literal
/// nodes.
///
/// Clauses are entered as implications between literals (see [`lit`] and
/// [`negate`]); `or`, `xor` and `eq` constraints reduce to implication
/// pairs. [`is_sat`](Self::is_sat) decides satisfiability and retains the
/// component assignment that [`solution`](Self::solution) reads; adding
/// clauses afterwards invalidates it, so a fresh `is_sat` is required.
///
/// # Examples
///
/// ```
/// use vec_graph_algo::algo::two_sat::{lit, TwoSat};
/// use dsi_progress_logger::no_logging;
///
/// let mut solver = TwoSat::new(2);
/// solver.add_or(lit(0, true), lit(1, true)).unwrap();
/// solver.add_or(lit(0, false), lit(1, true)).unwrap();
/// assert!(solver.is_sat(no_logging![]));
/// assert!(solver.solution().unwrap()[1]);
/// ```
#[derive(Debug, Clone)]
pub struct TwoSat {
    num_vars: usize,
    graph: VecGraph,
    back: VecGraph,
    sccs: Option<Sccs>,
}

impl TwoSat {
    /// Creates a solver for `num_vars` boolean variables and no clauses.
    pub fn new(num_vars: usize) -> Self {
        Self {
            num_vars,
            graph: VecGraph::new(2 * num_vars),
            back: VecGraph::new(2 * num_vars),
            sccs: None,
        }
    }

    /// The number of variables.
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Adds the implication `i → j` between literals.
    ///
    /// Returns [`Error::InvalidIndex`] if a literal is out of range.
    pub fn add_imply(&mut self, i: usize, j: usize) -> Result<()> {
        self.check_literal(i)?;
        self.check_literal(j)?;
        self.graph.add_arc(i, j);
        self.back.add_arc(j, i);
        self.sccs = None;
        Ok(())
    }

    /// Adds the clause `i ∨ j`, as `¬i → j` and `¬j → i`.
    pub fn add_or(&mut self, i: usize, j: usize) -> Result<()> {
        self.add_imply(negate(i), j)?;
        self.add_imply(negate(j), i)
    }

    /// Adds the constraint `i ⊕ j`, as `(i ∨ j) ∧ (¬i ∨ ¬j)`.
    pub fn add_xor(&mut self, i: usize, j: usize) -> Result<()> {
        self.add_or(i, j)?;
        self.add_or(negate(i), negate(j))
    }

    /// Adds the constraint `i = j`, as `i ⊕ ¬j`.
    pub fn add_eq(&mut self, i: usize, j: usize) -> Result<()> {
        self.add_xor(i, negate(j))
    }

    /// Decides satisfiability.
    ///
    /// The formula is satisfiable iff no variable shares a strongly
    /// connected component of the implication graph with its negation. The
    /// component assignment is retained for [`solution`](Self::solution).
    pub fn is_sat(&mut self, pl: &mut impl ProgressLog) -> bool {
        let sccs = kosaraju(&self.graph, &self.back, pl);
        let satisfiable = (0..self.num_vars)
            .all(|var| sccs.component()[2 * var] != sccs.component()[2 * var + 1]);
        self.sccs = Some(sccs);
        satisfiable
    }

    /// Returns a satisfying assignment, indexed by variable.
    ///
    /// A variable is true iff the component of its asserting literal
    /// follows the component of its negating literal in topological order
    /// of the condensation. Valid only after a successful
    /// [`is_sat`](Self::is_sat): returns [`Error::NotBuilt`] if `is_sat`
    /// has not run since the last clause was added, and an arbitrary,
    /// non-satisfying assignment if it returned `false`.
    pub fn solution(&self) -> Result<Vec<bool>> {
        let sccs = self.sccs.as_ref().ok_or(Error::NotBuilt)?;
        Ok((0..self.num_vars)
            .map(|var| sccs.component()[2 * var] > sccs.component()[2 * var + 1])
            .collect())
    }

    fn check_literal(&self, literal: usize) -> Result<()> {
        if literal >= 2 * self.num_vars {
            return Err(Error::InvalidIndex {
                index: literal,
                size: 2 * self.num_vars,
            });
        }
        Ok(())
    }
}
