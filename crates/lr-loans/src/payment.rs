//! Amortizing payment for a fixed-rate loan.

use lr_core::{ensure, errors::Error, Money, Natural, Rate, Result};

/// Monthly payment `P·r / (1 − (1 + r)^(−n))` for principal `P`, monthly
/// rate `r` and `n` payments.
///
/// A zero rate uses the limit `P / n`.  The denominator is evaluated as
/// `−expm1(−n·ln1p(r))` so rates far below machine epsilon stay accurate.
///
/// ```
/// use lr_loans::payment::monthly_payment;
/// let m = monthly_payment(2000.0, 0.5 / 12.0, 6).unwrap();
/// assert!((m - 383.5964162614617).abs() < 1e-9);
/// ```
pub fn monthly_payment(principal: Money, monthly_rate: Rate, number_of_payments: Natural) -> Result<Money> {
    ensure!(
        principal > 0.0 && principal.is_finite(),
        "principal must be positive, got {principal}"
    );
    ensure!(
        monthly_rate >= 0.0 && monthly_rate.is_finite(),
        "monthly rate must be non-negative, got {monthly_rate}"
    );
    ensure!(number_of_payments > 0, "number of payments must be positive");

    let n = Money::from(number_of_payments);
    if monthly_rate == 0.0 {
        return Ok(principal / n);
    }
    let discount = -(-n * monthly_rate.ln_1p()).exp_m1();
    let payment = principal * monthly_rate / discount;
    if !payment.is_finite() {
        return Err(Error::NumericFault(format!(
            "payment for P = {principal}, r = {monthly_rate}, n = {number_of_payments} is {payment}"
        )));
    }
    Ok(payment)
}
