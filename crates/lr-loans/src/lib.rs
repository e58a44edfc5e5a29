//! # lr-loans
//!
//! Loan-side building blocks: validated [`LoanTerms`], the [`AprEquation`]
//! whose positive root is the APR, amortizing payments and schedules, APR
//! estimate sequences and Newton-versus-bisection comparison reports.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Amortization schedules and balance paths.
pub mod amortization;

/// Newton-Raphson and bisection APR sequences.
pub mod apr;

/// Method comparison reports.
pub mod comparison;

/// The APR root equation and its derivative.
pub mod equation;

/// Validated loan terms.
pub mod loan_terms;

/// Amortizing monthly payment.
pub mod payment;

/// Loans with a known APR.
pub mod test_cases;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use amortization::{balance_paths, AmortizationRow, AmortizationSchedule, LoanQuote};
pub use apr::{bisection_apr, newton_apr};
pub use comparison::{compare_efficiency, compare_methods, EfficiencyReport, MethodComparison};
pub use equation::AprEquation;
pub use loan_terms::LoanTerms;
pub use payment::monthly_payment;
pub use test_cases::{KnownLoan, KNOWN_LOANS};
