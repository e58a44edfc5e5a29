//! Loan terms: the sole input to the APR equation.

use lr_core::{ensure, errors::Error, Money, Natural, Rate, Result};
use serde::{Deserialize, Serialize};

use crate::payment::monthly_payment;

/// Principal, monthly payment and number of payments of an amortizing loan.
///
/// All three are validated positive (and finite) on construction and never
/// change afterwards.  Deserialization goes through the same validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLoanTerms")]
pub struct LoanTerms {
    principal: Money,
    monthly_payment: Money,
    number_of_payments: Natural,
}

impl LoanTerms {
    /// Create validated loan terms.
    pub fn new(principal: Money, monthly_payment: Money, number_of_payments: Natural) -> Result<Self> {
        ensure!(
            principal > 0.0 && principal.is_finite(),
            "principal must be positive, got {principal}"
        );
        ensure!(
            monthly_payment > 0.0 && monthly_payment.is_finite(),
            "monthly payment must be positive, got {monthly_payment}"
        );
        ensure!(number_of_payments > 0, "number of payments must be positive");
        Ok(Self {
            principal,
            monthly_payment,
            number_of_payments,
        })
    }

    /// Terms whose payment is the exact amortizing payment for `annual_rate`.
    ///
    /// ```
    /// use lr_loans::LoanTerms;
    /// let terms = LoanTerms::from_annual_rate(1000.0, 0.10, 12).unwrap();
    /// assert!((terms.monthly_payment() - 87.91588723000987).abs() < 1e-9);
    /// ```
    pub fn from_annual_rate(principal: Money, annual_rate: Rate, number_of_payments: Natural) -> Result<Self> {
        let payment = monthly_payment(principal, annual_rate / 12.0, number_of_payments)?;
        Self::new(principal, payment, number_of_payments)
    }

    /// Amount borrowed.
    pub fn principal(&self) -> Money {
        self.principal
    }

    /// Fixed payment made every month.
    pub fn monthly_payment(&self) -> Money {
        self.monthly_payment
    }

    /// Number of monthly payments.
    pub fn number_of_payments(&self) -> Natural {
        self.number_of_payments
    }
}

#[derive(Deserialize)]
struct RawLoanTerms {
    principal: Money,
    monthly_payment: Money,
    number_of_payments: Natural,
}

impl TryFrom<RawLoanTerms> for LoanTerms {
    type Error = Error;

    fn try_from(raw: RawLoanTerms) -> Result<Self> {
        LoanTerms::new(raw.principal, raw.monthly_payment, raw.number_of_payments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rejects_non_positive_inputs() {
        assert!(LoanTerms::new(0.0, 10.0, 12).is_err());
        assert!(LoanTerms::new(100.0, -1.0, 12).is_err());
        assert!(LoanTerms::new(100.0, 10.0, 0).is_err());
        assert!(LoanTerms::new(f64::INFINITY, 10.0, 12).is_err());
    }

    #[test]
    fn from_annual_rate_matches_reference_payment() {
        let terms = LoanTerms::from_annual_rate(512.0, 0.85, 24).unwrap();
        assert_abs_diff_eq!(terms.monthly_payment(), 44.96781634956033, epsilon = 1e-9);
        assert_eq!(terms.number_of_payments(), 24);
    }
}
