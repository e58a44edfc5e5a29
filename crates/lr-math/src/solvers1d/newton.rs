//! Newton-Raphson as an unbounded estimate sequence.

use std::iter::FusedIterator;

use lr_core::{
    errors::{Error, Result},
    Rate, Real, Size,
};
use tracing::{debug, trace, warn};

use super::SequenceState;

/// Newton-Raphson iteration using the function value and its derivative.
///
/// Every pull computes `(f, f') = f_df(x)` at the current estimate, steps
/// `x ← x − f/f'` and yields the new `x`.  There is no bracket, clamping or
/// divergence check: the caller decides how many terms to pull.
///
/// * If `f(x)` is exactly zero the unchanged `x` is yielded once and the
///   sequence ends in [`SequenceState::Converged`].
/// * If the step is not finite (zero derivative, overflow) the pull yields
///   [`Error::NumericFault`] and the sequence ends in
///   [`SequenceState::Faulted`].
///
/// ```
/// use lr_math::solvers1d::NewtonSolver;
/// let mut sqrt2 = NewtonSolver::new(|x| (x * x - 2.0, 2.0 * x), 1.5);
/// let x = sqrt2.nth(5).unwrap().unwrap();
/// assert!((x - 2.0_f64.sqrt()).abs() < 1e-12);
/// ```
pub struct NewtonSolver<F> {
    f_df: F,
    estimate: Rate,
    state: SequenceState,
    iterations: Size,
}

impl<F> NewtonSolver<F>
where
    F: Fn(Real) -> (Real, Real),
{
    /// Start a new sequence at `start`.
    pub fn new(f_df: F, start: Rate) -> Self {
        debug!(start, "starting Newton-Raphson sequence");
        Self {
            f_df,
            estimate: start,
            state: SequenceState::Iterating,
            iterations: 0,
        }
    }

    /// The most recent estimate (the start value before the first pull).
    pub fn estimate(&self) -> Rate {
        self.estimate
    }

    /// Current state of the sequence.
    pub fn state(&self) -> SequenceState {
        self.state
    }

    /// Number of pulls performed so far.
    pub fn iterations(&self) -> Size {
        self.iterations
    }
}

impl<F> Iterator for NewtonSolver<F>
where
    F: Fn(Real) -> (Real, Real),
{
    type Item = Result<Rate>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state.is_terminal() {
            return None;
        }
        let x = self.estimate;
        let (fx, dfx) = (self.f_df)(x);
        let x_new = x - fx / dfx;
        self.iterations += 1;

        if !x_new.is_finite() {
            warn!(x, fx, dfx, iteration = self.iterations, "Newton step is not finite");
            self.state = SequenceState::Faulted;
            return Some(Err(Error::NumericFault(format!(
                "Newton step from {x} gave {x_new} (f = {fx}, f' = {dfx})"
            ))));
        }

        self.estimate = x_new;
        if fx == 0.0 {
            debug!(root = x_new, iteration = self.iterations, "Newton hit an exact root");
            self.state = SequenceState::Converged(x_new);
        }
        trace!(iteration = self.iterations, estimate = x_new, fx, "Newton step");
        Some(Ok(x_new))
    }
}

impl<F> FusedIterator for NewtonSolver<F> where F: Fn(Real) -> (Real, Real) {}
