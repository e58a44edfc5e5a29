//! 1D root-finding solvers exposed as lazy estimate sequences.
//!
//! Each solver is an [`Iterator`] yielding `Result<Rate>`: one item per
//! iteration, unbounded unless the solver reaches a terminal
//! [`SequenceState`].  The caller decides how many terms to pull, either
//! directly or through [`crate::convergence`].

mod bisection;
mod newton;

pub use bisection::BisectionSolver;
pub use newton::NewtonSolver;

use lr_core::{Rate, Real};

/// Where an estimate sequence stands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SequenceState {
    /// Still producing new estimates.
    Iterating,
    /// The function vanished exactly at this value.  It is yielded once and
    /// the sequence then ends.
    Converged(Rate),
    /// A non-finite value was produced and reported; the sequence has ended.
    Faulted,
}

impl SequenceState {
    /// `true` once the sequence will produce no further estimates.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SequenceState::Iterating)
    }
}

// ── Bracketing interval ───────────────────────────────────────────────────────

/// An interval believed to contain a root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketingInterval {
    /// Lower end.
    pub low: Real,
    /// Upper end.
    pub high: Real,
}

impl BracketingInterval {
    /// Create a new interval.
    pub fn new(low: Real, high: Real) -> Self {
        Self { low, high }
    }

    /// `high - low`.
    #[inline]
    pub fn width(&self) -> Real {
        self.high - self.low
    }

    /// `(low + high) / 2`.
    #[inline]
    pub fn midpoint(&self) -> Real {
        (self.low + self.high) / 2.0
    }
}

/// Sign rule used for bracketing: `x > 0` versus everything else.
///
/// Zero is classified with the negative values.
#[inline]
pub(crate) fn signs_differ(x: Real, y: Real) -> bool {
    (x > 0.0) ^ (y > 0.0)
}
