//! Bisection as an unbounded estimate sequence.

use std::iter::FusedIterator;

use lr_core::{
    errors::{Error, Result},
    Rate, Real, Size,
};
use tracing::{debug, trace, warn};

use super::{signs_differ, BracketingInterval, SequenceState};

/// Bisection over a bracketing interval.
///
/// Every pull halves the bracket around the midpoint `c`: if the signs of
/// `f(low)` and `f(c)` differ the root is kept in `[low, c]`, otherwise in
/// `[c, high]`.  The pull yields the midpoint of the new bracket, so after
/// `k` pulls the width is `(high₀ − low₀) / 2^k`.
///
/// Signs follow `x > 0` versus everything else, so a value of exactly zero
/// is grouped with the negative values.
///
/// ```
/// use lr_math::solvers1d::BisectionSolver;
/// let mut s = BisectionSolver::new(|x| x * x - 2.0, 0.0, 2.0).unwrap();
/// let x = s.nth(39).unwrap().unwrap();
/// assert!((x - 2.0_f64.sqrt()).abs() < 1e-11);
/// ```
pub struct BisectionSolver<F> {
    f: F,
    interval: BracketingInterval,
    f_low: Real,
    state: SequenceState,
    pending: Option<Rate>,
    iterations: Size,
}

impl<F> BisectionSolver<F>
where
    F: Fn(Real) -> Real,
{
    /// Create a sequence on `[low, high]`.
    ///
    /// If `f` is exactly zero at an endpoint (`low` checked first), the
    /// sequence yields that endpoint once and ends.  Otherwise `f(low)` and
    /// `f(high)` must have different signs, or [`Error::Bracketing`] is
    /// returned.
    pub fn new(f: F, low: Real, high: Real) -> Result<Self> {
        let f_low = f(low);
        let f_high = f(high);
        if !f_low.is_finite() || !f_high.is_finite() {
            return Err(Error::NumericFault(format!(
                "bracket endpoints evaluate to f({low}) = {f_low}, f({high}) = {f_high}"
            )));
        }

        let endpoint_root = if f_low == 0.0 {
            Some(low)
        } else if f_high == 0.0 {
            Some(high)
        } else {
            None
        };

        if endpoint_root.is_none() && !signs_differ(f_low, f_high) {
            debug!(low, high, f_low, f_high, "rejected bisection bracket");
            return Err(Error::Bracketing {
                low,
                high,
                f_low,
                f_high,
            });
        }

        debug!(low, high, f_low, f_high, "starting bisection sequence");
        Ok(Self {
            f,
            interval: BracketingInterval::new(low, high),
            f_low,
            state: endpoint_root.map_or(SequenceState::Iterating, SequenceState::Converged),
            pending: endpoint_root,
            iterations: 0,
        })
    }

    /// The current bracket.
    pub fn interval(&self) -> BracketingInterval {
        self.interval
    }

    /// Current state of the sequence.
    pub fn state(&self) -> SequenceState {
        self.state
    }

    /// Number of bisection steps performed so far.
    pub fn iterations(&self) -> Size {
        self.iterations
    }
}

impl<F> Iterator for BisectionSolver<F>
where
    F: Fn(Real) -> Real,
{
    type Item = Result<Rate>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.pending.take() {
            return Some(Ok(root));
        }
        if self.state.is_terminal() {
            return None;
        }

        let c = self.interval.midpoint();
        let fc = (self.f)(c);
        self.iterations += 1;

        if !fc.is_finite() {
            warn!(c, fc, iteration = self.iterations, "bisection midpoint value is not finite");
            self.state = SequenceState::Faulted;
            return Some(Err(Error::NumericFault(format!("f({c}) = {fc}"))));
        }

        if signs_differ(self.f_low, fc) {
            self.interval.high = c;
        } else {
            self.interval.low = c;
            self.f_low = fc;
        }

        if fc == 0.0 {
            debug!(root = c, iteration = self.iterations, "bisection hit an exact root");
            self.state = SequenceState::Converged(c);
            return Some(Ok(c));
        }

        let estimate = self.interval.midpoint();
        trace!(
            iteration = self.iterations,
            estimate,
            low = self.interval.low,
            high = self.interval.high,
            "bisection step"
        );
        Some(Ok(estimate))
    }
}

impl<F> FusedIterator for BisectionSolver<F> where F: Fn(Real) -> Real {}
