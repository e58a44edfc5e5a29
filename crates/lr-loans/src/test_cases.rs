//! Loans with a known APR, used to check and compare the solvers.

use lr_core::{Money, Natural, Rate, Result};
use serde::Serialize;

use crate::loan_terms::LoanTerms;

/// A loan whose payment was computed from a known annual rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KnownLoan {
    /// Amount borrowed.
    pub principal: Money,
    /// The amortizing payment at `annual_rate`.
    pub monthly_payment: Money,
    /// Number of monthly payments.
    pub number_of_payments: Natural,
    /// The APR the solvers should recover.
    pub annual_rate: Rate,
}

impl KnownLoan {
    /// The loan terms seen by the solvers.
    pub fn terms(&self) -> Result<LoanTerms> {
        LoanTerms::new(self.principal, self.monthly_payment, self.number_of_payments)
    }
}

/// Reference vectors.
pub const KNOWN_LOANS: [KnownLoan; 3] = [
    KnownLoan {
        principal: 512.0,
        monthly_payment: 44.96781634956033,
        number_of_payments: 24,
        annual_rate: 0.85,
    },
    KnownLoan {
        principal: 1000.0,
        monthly_payment: 87.91588723000987,
        number_of_payments: 12,
        annual_rate: 0.10,
    },
    KnownLoan {
        principal: 2000.0,
        monthly_payment: 383.5964162614617,
        number_of_payments: 6,
        annual_rate: 0.50,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn payments_match_their_rates() {
        for loan in KNOWN_LOANS {
            let rebuilt =
                LoanTerms::from_annual_rate(loan.principal, loan.annual_rate, loan.number_of_payments)
                    .unwrap();
            assert_relative_eq!(rebuilt.monthly_payment(), loan.monthly_payment, max_relative = 1e-12);
        }
    }
}
