//! Error measures for estimates against a known value.

use lr_core::Real;

/// Relative error `|estimate - target| / |target|`.
///
/// A zero `target` gives an infinite or NaN result; callers that accept
/// arbitrary targets should reject zero first.
#[inline]
pub fn relative_error(estimate: Real, target: Real) -> Real {
    (estimate - target).abs() / target.abs()
}
