//! APR estimate sequences.
//!
//! Both constructors return lazy, unbounded sequences over the
//! [`AprEquation`] of the given terms.  When no start rate or bracket is
//! given, the defaults come from [`lr_core::Settings`].

use lr_core::{Rate, Real, Result, Settings};
use lr_math::solvers1d::{BisectionSolver, BracketingInterval, NewtonSolver};

use crate::{equation::AprEquation, loan_terms::LoanTerms};

/// Newton-Raphson APR estimates starting at `start` (default 0.5).
///
/// ```
/// use lr_loans::{apr::newton_apr, LoanTerms};
/// let terms = LoanTerms::new(1000.0, 87.91588723000987, 12).unwrap();
/// let apr = newton_apr(&terms, None).take(10).last().unwrap().unwrap();
/// assert!((apr - 0.10).abs() < 1e-9);
/// ```
pub fn newton_apr(
    terms: &LoanTerms,
    start: Option<Rate>,
) -> NewtonSolver<impl Fn(Real) -> (Real, Real)> {
    let equation = AprEquation::new(terms);
    let start = start.unwrap_or_else(|| Settings::instance().solver().newton_start);
    NewtonSolver::new(move |r| equation.value_and_derivative(r), start)
}

/// Bisection APR estimates on `bracket` (default `[0.001, 1.0]`).
///
/// Fails with [`lr_core::Error::Bracketing`] when the APR equation does not
/// change sign across the bracket.
pub fn bisection_apr(
    terms: &LoanTerms,
    bracket: Option<BracketingInterval>,
) -> Result<BisectionSolver<impl Fn(Real) -> Real>> {
    let equation = AprEquation::new(terms);
    let bracket = bracket.unwrap_or_else(|| {
        let settings = Settings::instance().solver();
        BracketingInterval::new(settings.bisection_low, settings.bisection_high)
    });
    BisectionSolver::new(move |r| equation.value(r), bracket.low, bracket.high)
}
