//! Amortization schedules and remaining-balance paths.

use lr_core::{Money, Natural, Rate, Result};
use serde::{Deserialize, Serialize};

use crate::payment::monthly_payment;

/// One month of an amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmortizationRow {
    /// 1-based month number.
    pub month: Natural,
    /// Interest charged on the balance carried into the month.
    pub interest_paid: Money,
    /// Part of the payment that reduces the balance.
    pub principal_paid: Money,
    /// The full payment.
    pub total_paid: Money,
    /// Balance after the payment.  Not clamped; the last row may carry a
    /// rounding residue of either sign.
    pub remaining: Money,
}

/// Month-by-month split of a fixed payment into interest and principal.
#[derive(Debug, Clone, PartialEq)]
pub struct AmortizationSchedule {
    monthly_payment: Money,
    rows: Vec<AmortizationRow>,
}

impl AmortizationSchedule {
    /// Build the schedule for `principal` at `monthly_rate` over
    /// `number_of_payments` months.
    pub fn new(principal: Money, monthly_rate: Rate, number_of_payments: Natural) -> Result<Self> {
        let payment = monthly_payment(principal, monthly_rate, number_of_payments)?;
        let mut remaining = principal;
        let rows = (1..=number_of_payments)
            .map(|month| {
                let interest_paid = remaining * monthly_rate;
                let principal_paid = payment - interest_paid;
                remaining -= principal_paid;
                AmortizationRow {
                    month,
                    interest_paid,
                    principal_paid,
                    total_paid: payment,
                    remaining,
                }
            })
            .collect();
        Ok(Self {
            monthly_payment: payment,
            rows,
        })
    }

    /// The fixed monthly payment.
    pub fn monthly_payment(&self) -> Money {
        self.monthly_payment
    }

    /// All rows, month 1 first.
    pub fn rows(&self) -> &[AmortizationRow] {
        &self.rows
    }

    /// Total interest over the life of the loan.
    pub fn total_interest(&self) -> Money {
        self.rows.iter().map(|row| row.interest_paid).sum()
    }

    /// Remaining balance after each payment, floored at zero.
    pub fn balances(&self) -> Vec<Money> {
        self.rows.iter().map(|row| row.remaining.max(0.0)).collect()
    }
}

/// A loan described by its headline rate, as entered in a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanQuote {
    /// Amount borrowed.
    pub principal: Money,
    /// Annual rate as a decimal.
    pub annual_rate: Rate,
    /// Term in months.
    pub months: Natural,
}

/// Remaining-balance paths for several loans, zero-padded to the longest
/// term so they can be plotted on one axis.
pub fn balance_paths(loans: &[LoanQuote]) -> Result<Vec<Vec<Money>>> {
    let mut paths = loans
        .iter()
        .map(|loan| {
            AmortizationSchedule::new(loan.principal, loan.annual_rate / 12.0, loan.months)
                .map(|schedule| schedule.balances())
        })
        .collect::<Result<Vec<_>>>()?;
    let longest = paths.iter().map(Vec::len).max().unwrap_or(0);
    for path in &mut paths {
        path.resize(longest, 0.0);
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn schedule_repays_the_principal() {
        let schedule = AmortizationSchedule::new(512.0, 0.85 / 12.0, 24).unwrap();
        let rows = schedule.rows();
        assert_eq!(rows.len(), 24);
        assert_eq!(rows[0].month, 1);
        assert_abs_diff_eq!(rows[0].interest_paid, 512.0 * 0.85 / 12.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rows[23].remaining, 0.0, epsilon = 1e-9);

        let principal: Money = rows.iter().map(|r| r.principal_paid).sum();
        assert_abs_diff_eq!(principal, 512.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            schedule.total_interest(),
            24.0 * schedule.monthly_payment() - 512.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn interest_share_falls_over_time() {
        let schedule = AmortizationSchedule::new(1000.0, 0.10 / 12.0, 12).unwrap();
        let interest: Vec<Money> = schedule.rows().iter().map(|r| r.interest_paid).collect();
        assert!(interest.windows(2).all(|w| w[1] < w[0]));
        assert!(schedule.rows().iter().all(|r| r.total_paid == schedule.monthly_payment()));
    }

    #[test]
    fn balances_are_non_negative_and_decreasing() {
        let balances = AmortizationSchedule::new(2000.0, 0.5 / 12.0, 6).unwrap().balances();
        assert_eq!(balances.len(), 6);
        assert!(balances.iter().all(|&b| b >= 0.0));
        assert!(balances.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn zero_rate_schedule_is_straight_line() {
        let schedule = AmortizationSchedule::new(1200.0, 0.0, 12).unwrap();
        assert_eq!(schedule.total_interest(), 0.0);
        assert_abs_diff_eq!(schedule.balances()[5], 600.0, epsilon = 1e-9);
    }

    #[test]
    fn near_zero_rate_schedule_matches_straight_line() {
        let schedule = AmortizationSchedule::new(1200.0, 1e-18, 12).unwrap();
        assert_abs_diff_eq!(schedule.monthly_payment(), 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(schedule.balances()[5], 600.0, epsilon = 1e-9);
        assert_abs_diff_eq!(schedule.rows()[11].remaining, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn balance_paths_are_padded_to_longest_loan() {
        let paths = balance_paths(&[
            LoanQuote {
                principal: 1000.0,
                annual_rate: 0.10,
                months: 12,
            },
            LoanQuote {
                principal: 5000.0,
                annual_rate: 0.05,
                months: 36,
            },
        ])
        .unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].len(), 36);
        assert_eq!(paths[1].len(), 36);
        assert!(paths[0][12..].iter().all(|&b| b == 0.0));
        assert!(paths[1][0] > 0.0);
    }

    #[test]
    fn balance_paths_reject_invalid_loans() {
        let bad = LoanQuote {
            principal: -1.0,
            annual_rate: 0.1,
            months: 12,
        };
        assert!(balance_paths(&[bad]).is_err());
        assert!(balance_paths(&[]).unwrap().is_empty());
    }
}
