//! The APR root equation.
//!
//! For principal `P`, monthly payment `M` and `n` payments, `M` is the exact
//! amortizing payment at annual rate `r` when
//!
//! ```text
//! f(r)  = 12M − P·r − 12M·(1 + r/12)^(−n) = 0
//! f'(r) = n·M·(1 + r/12)^(−n−1) − P
//! ```
//!
//! `r = 0` is always a (trivial) root; the APR is the positive one.

use lr_core::{errors::Error, Money, Rate, Real, Result};

use crate::loan_terms::LoanTerms;

/// `f(r)` and `f'(r)` for one set of loan terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AprEquation {
    principal: Money,
    monthly_payment: Money,
    n: Real,
}

impl AprEquation {
    /// Build the equation for `terms`.
    pub fn new(terms: &LoanTerms) -> Self {
        Self {
            principal: terms.principal(),
            monthly_payment: terms.monthly_payment(),
            n: Real::from(terms.number_of_payments()),
        }
    }

    /// `f(r)`.  Not clamped; overflow shows up as a non-finite result.
    #[inline]
    pub fn value(&self, rate: Rate) -> Real {
        let annual_payment = 12.0 * self.monthly_payment;
        annual_payment - self.principal * rate - annual_payment * (1.0 + rate / 12.0).powf(-self.n)
    }

    /// `f'(r)`.
    #[inline]
    pub fn derivative(&self, rate: Rate) -> Real {
        self.n * self.monthly_payment * (1.0 + rate / 12.0).powf(-self.n - 1.0) - self.principal
    }

    /// `(f(r), f'(r))`.
    #[inline]
    pub fn value_and_derivative(&self, rate: Rate) -> (Real, Real) {
        (self.value(rate), self.derivative(rate))
    }

    /// `f(r)`, or [`Error::NumericFault`] if it is not finite.
    pub fn checked_value(&self, rate: Rate) -> Result<Real> {
        finite(self.value(rate), "f", rate)
    }

    /// `f'(r)`, or [`Error::NumericFault`] if it is not finite.
    pub fn checked_derivative(&self, rate: Rate) -> Result<Real> {
        finite(self.derivative(rate), "f'", rate)
    }
}

fn finite(value: Real, name: &str, rate: Rate) -> Result<Real> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NumericFault(format!("{name}({rate}) = {value}")))
    }
}
