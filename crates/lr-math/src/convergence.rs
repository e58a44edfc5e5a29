//! Iteration counting against a known target.
//!
//! [`evaluate_convergence`] pulls estimates until the relative error to the
//! target drops to the tolerance and reports how many pulls that took.  It
//! has no ceiling: against a sequence that neither converges, faults nor
//! ends it never returns.  [`ConvergenceEvaluator::with_max_iterations`] (or
//! [`ConvergenceEvaluator::from_settings`]) bounds the search.

use lr_core::{
    ensure,
    errors::{Error, Result},
    Rate, Real, Settings, Size,
};
use tracing::{debug, warn};

use crate::comparison::relative_error;

/// Counts the pulls a sequence needs to approach a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceEvaluator {
    target: Real,
    tolerance: Real,
    max_iterations: Option<Size>,
}

impl ConvergenceEvaluator {
    /// Create an unbounded evaluator.
    ///
    /// `target` must be non-zero and finite; `tolerance` must be positive.
    pub fn new(target: Real, tolerance: Real) -> Result<Self> {
        ensure!(
            target != 0.0 && target.is_finite(),
            "target must be non-zero and finite, got {target}"
        );
        ensure!(
            tolerance > 0.0 && tolerance.is_finite(),
            "tolerance must be positive, got {tolerance}"
        );
        Ok(Self {
            target,
            tolerance,
            max_iterations: None,
        })
    }

    /// Create an evaluator using the global tolerance and iteration ceiling.
    pub fn from_settings(target: Real) -> Result<Self> {
        let settings = Settings::instance().solver();
        let evaluator = Self::new(target, settings.tolerance)?;
        Ok(Self {
            max_iterations: settings.max_iterations,
            ..evaluator
        })
    }

    /// Give up with [`Error::ConvergenceTimeout`] after `max_iterations` pulls.
    pub fn with_max_iterations(mut self, max_iterations: Size) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// The target value.
    pub fn target(&self) -> Real {
        self.target
    }

    /// The relative-error tolerance.
    pub fn tolerance(&self) -> Real {
        self.tolerance
    }

    /// The iteration ceiling, if any.
    pub fn max_iterations(&self) -> Option<Size> {
        self.max_iterations
    }

    /// Pull from `sequence` until the tolerance is met and return the number
    /// of pulls (1-based).
    ///
    /// Errors pulled from the sequence are returned unchanged.  A sequence
    /// that ends first gives [`Error::NonConvergence`].  With a ceiling, at
    /// most `max_iterations` items are pulled.
    pub fn evaluate<I>(&self, sequence: I) -> Result<Size>
    where
        I: IntoIterator<Item = Result<Rate>>,
    {
        let mut count: Size = 0;
        let mut last = Real::NAN;
        let limit = self.max_iterations.unwrap_or(Size::MAX);
        for item in sequence.into_iter().take(limit) {
            let estimate = item?;
            count += 1;
            last = estimate;
            if relative_error(estimate, self.target) <= self.tolerance {
                debug!(iterations = count, estimate, "tolerance reached");
                return Ok(count);
            }
        }
        if let Some(max) = self.max_iterations.filter(|&max| count >= max) {
            warn!(max, last, target = self.target, "convergence ceiling reached");
            return Err(Error::ConvergenceTimeout { iterations: max });
        }
        warn!(iterations = count, last, "sequence ended before reaching tolerance");
        Err(Error::NonConvergence {
            iterations: count,
            last,
        })
    }
}

/// Number of pulls until `|x − target| / |target| <= tolerance`.
///
/// No iteration ceiling is applied.
///
/// ```
/// use lr_math::{convergence::evaluate_convergence, solvers1d::BisectionSolver};
/// let s = BisectionSolver::new(|x| x - 0.3, 0.0, 1.0).unwrap();
/// let n = evaluate_convergence(0.3, 1e-3, s).unwrap();
/// assert!(n > 1 && n < 20);
/// ```
pub fn evaluate_convergence<I>(target: Real, tolerance: Real, sequence: I) -> Result<Size>
where
    I: IntoIterator<Item = Result<Rate>>,
{
    ConvergenceEvaluator::new(target, tolerance)?.evaluate(sequence)
}

/// Relative error to `target` of each of the first `iterations` estimates.
///
/// The result is shorter than `iterations` if the sequence ends early.
pub fn error_history<I>(target: Real, sequence: I, iterations: Size) -> Result<Vec<Real>>
where
    I: IntoIterator<Item = Result<Rate>>,
{
    ensure!(
        target != 0.0 && target.is_finite(),
        "target must be non-zero and finite, got {target}"
    );
    sequence
        .into_iter()
        .take(iterations)
        .map(|item| item.map(|estimate| relative_error(estimate, target)))
        .collect()
}
