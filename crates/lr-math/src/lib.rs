//! # lr-math
//!
//! Root-finding sequences and convergence measurement: Newton-Raphson and
//! bisection as lazy iterators, and the evaluator that counts how many
//! iterations each needs to reach a tolerance.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Relative error of an estimate.
pub mod comparison;

/// Iteration counting against a known target.
pub mod convergence;

/// 1D root-finding sequences.
pub mod solvers1d;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::relative_error;
pub use convergence::{error_history, evaluate_convergence, ConvergenceEvaluator};
pub use solvers1d::{BisectionSolver, BracketingInterval, NewtonSolver, SequenceState};
