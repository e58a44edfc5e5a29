//! Newton-Raphson versus bisection on the APR equation.
//!
//! [`compare_methods`] collects the first few estimates of each method and
//! their relative errors (the error-vs-iteration curves);
//! [`compare_efficiency`] counts the iterations each method needs to reach a
//! tolerance on a set of loans with known APR.

use lr_core::{ensure, Rate, Real, Result, Size};
use lr_math::{comparison::relative_error, ConvergenceEvaluator};
use serde::Serialize;
use tracing::debug;

use crate::{
    apr::{bisection_apr, newton_apr},
    loan_terms::LoanTerms,
    test_cases::KnownLoan,
};

/// Estimates and relative errors of both methods, one entry per iteration.
///
/// A method whose sequence ends early (exact root) has fewer entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodComparison {
    /// The APR the errors are measured against.
    pub true_apr: Rate,
    /// Newton-Raphson estimates.
    pub newton_estimates: Vec<Rate>,
    /// Bisection estimates.
    pub bisection_estimates: Vec<Rate>,
    /// `|estimate − true_apr| / |true_apr|` for each Newton estimate.
    pub newton_errors: Vec<Real>,
    /// `|estimate − true_apr| / |true_apr|` for each bisection estimate.
    pub bisection_errors: Vec<Real>,
}

/// Pull `iterations` estimates from each method (default start and bracket)
/// and measure them against `true_apr`.
pub fn compare_methods(terms: &LoanTerms, true_apr: Rate, iterations: Size) -> Result<MethodComparison> {
    ensure!(
        true_apr != 0.0 && true_apr.is_finite(),
        "true APR must be non-zero and finite, got {true_apr}"
    );
    let newton_estimates = newton_apr(terms, None)
        .take(iterations)
        .collect::<Result<Vec<_>>>()?;
    let bisection_estimates = bisection_apr(terms, None)?
        .take(iterations)
        .collect::<Result<Vec<_>>>()?;

    let errors = |estimates: &[Rate]| -> Vec<Real> {
        estimates.iter().map(|&x| relative_error(x, true_apr)).collect()
    };
    Ok(MethodComparison {
        true_apr,
        newton_errors: errors(&newton_estimates),
        bisection_errors: errors(&bisection_estimates),
        newton_estimates,
        bisection_estimates,
    })
}

/// Iterations each method needed on one loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EfficiencyReport {
    /// The loan that was solved.
    pub loan: KnownLoan,
    /// Newton-Raphson iterations to reach the tolerance.
    pub newton_iterations: Size,
    /// Bisection iterations to reach the tolerance.
    pub bisection_iterations: Size,
}

/// Count the iterations each method needs to get within `tolerance`
/// (relative) of every loan's APR.
///
/// `max_iterations` bounds each count; `None` searches without a ceiling.
pub fn compare_efficiency(
    loans: &[KnownLoan],
    tolerance: Real,
    max_iterations: Option<Size>,
) -> Result<Vec<EfficiencyReport>> {
    loans
        .iter()
        .map(|loan| {
            let terms = loan.terms()?;
            let mut evaluator = ConvergenceEvaluator::new(loan.annual_rate, tolerance)?;
            if let Some(max) = max_iterations {
                evaluator = evaluator.with_max_iterations(max);
            }
            let report = EfficiencyReport {
                loan: *loan,
                newton_iterations: evaluator.evaluate(newton_apr(&terms, None))?,
                bisection_iterations: evaluator.evaluate(bisection_apr(&terms, None)?)?,
            };
            debug!(
                principal = loan.principal,
                newton = report.newton_iterations,
                bisection = report.bisection_iterations,
                "efficiency comparison"
            );
            Ok(report)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_cases::KNOWN_LOANS;

    #[test]
    fn compare_methods_reports_both_curves() {
        let loan = KNOWN_LOANS[0];
        let cmp = compare_methods(&loan.terms().unwrap(), loan.annual_rate, 10).unwrap();
        assert_eq!(cmp.bisection_estimates.len(), 10);
        assert_eq!(cmp.bisection_errors.len(), 10);
        assert!(!cmp.newton_estimates.is_empty() && cmp.newton_estimates.len() <= 10);
        assert_eq!(cmp.newton_errors.len(), cmp.newton_estimates.len());
        // Newton is far ahead by the last common iteration.
        let last = cmp.newton_errors.len().min(cmp.bisection_errors.len()) - 1;
        assert!(cmp.newton_errors[last] < cmp.bisection_errors[last]);
    }

    #[test]
    fn compare_methods_rejects_zero_apr() {
        let loan = KNOWN_LOANS[1];
        assert!(compare_methods(&loan.terms().unwrap(), 0.0, 5).is_err());
    }

    #[test]
    fn efficiency_newton_needs_fewer_iterations() {
        let reports = compare_efficiency(&KNOWN_LOANS[..2], 1e-4, Some(100)).unwrap();
        assert_eq!(reports.len(), 2);
        for r in reports {
            assert!(r.newton_iterations < r.bisection_iterations, "{r:?}");
        }
    }

    #[test]
    fn efficiency_ceiling_is_enforced() {
        let err = compare_efficiency(&KNOWN_LOANS[..1], 1e-4, Some(2)).unwrap_err();
        assert_eq!(err, lr_core::Error::ConvergenceTimeout { iterations: 2 });
    }
}
