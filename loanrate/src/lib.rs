//! # loanrate
//!
//! Estimate the APR of an amortizing loan from its principal, monthly
//! payment and number of payments, with Newton-Raphson and bisection, and
//! measure how quickly each converges.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates.
//!
//! ## Quick start
//!
//! ```rust
//! use loanrate::loans::{newton_apr, LoanTerms};
//! use loanrate::math::evaluate_convergence;
//!
//! let terms = LoanTerms::new(1000.0, 87.91588723000987, 12).unwrap();
//! let iterations = evaluate_convergence(0.10, 1e-4, newton_apr(&terms, None)).unwrap();
//! assert!(iterations < 15);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, settings and error definitions.
pub use lr_core as core;

/// Root-finding sequences and convergence measurement.
pub use lr_math as math;

/// Loan terms, the APR equation, amortization and comparisons.
pub use lr_loans as loans;

/// Commonly used items.
pub mod prelude {
    pub use lr_core::{Error, Rate, Real, Result, Settings, SolverSettings};
    pub use lr_loans::{
        bisection_apr, compare_efficiency, compare_methods, newton_apr, AprEquation,
        AmortizationSchedule, LoanTerms, KNOWN_LOANS,
    };
    pub use lr_math::{evaluate_convergence, ConvergenceEvaluator, SequenceState};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use approx::assert_relative_eq;

    #[test]
    fn prelude_covers_a_full_comparison() {
        let loan = KNOWN_LOANS[0];
        let terms = loan.terms().unwrap();
        let report = compare_methods(&terms, loan.annual_rate, 8).unwrap();
        let best = report.newton_estimates.last().copied().unwrap();
        assert_relative_eq!(best, loan.annual_rate, max_relative = 1e-6);
    }
}
