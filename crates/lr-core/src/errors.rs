//! Error types for loanrate.
//!
//! Every crate in the workspace reports failures through the single
//! `thiserror`-derived [`Error`] enum defined here.  The `ensure!` macro
//! covers precondition checks.

use thiserror::Error;

use crate::{Real, Size};

/// The top-level error type used throughout loanrate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The endpoints of a bracketing interval do not straddle a root.
    #[error("could not find root in [{low}, {high}]: f({low}) = {f_low}, f({high}) = {f_high}")]
    Bracketing {
        /// Lower end of the rejected interval.
        low: Real,
        /// Upper end of the rejected interval.
        high: Real,
        /// Function value at `low`.
        f_low: Real,
        /// Function value at `high`.
        f_high: Real,
    },

    /// A computation produced a non-finite value (zero derivative, overflow).
    #[error("numeric fault: {0}")]
    NumericFault(String),

    /// The estimate sequence ended before reaching the requested tolerance.
    #[error("sequence terminated after {iterations} iterations without converging (last estimate {last})")]
    NonConvergence {
        /// Number of estimates pulled.
        iterations: Size,
        /// The last estimate seen, NaN if none was produced.
        last: Real,
    },

    /// The iteration ceiling was reached before the tolerance was met.
    #[error("tolerance not reached within {iterations} iterations")]
    ConvergenceTimeout {
        /// The ceiling that was hit.
        iterations: Size,
    },
}

/// Shorthand `Result` type used throughout loanrate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use lr_core::ensure;
/// fn positive(x: f64) -> lr_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracketing_message_names_interval_and_values() {
        let err = Error::Bracketing {
            low: 0.5,
            high: 0.5,
            f_low: 2.0,
            f_high: 2.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("[0.5, 0.5]"), "{msg}");
        assert!(msg.contains("f(0.5) = 2"), "{msg}");
    }

    #[test]
    fn ensure_returns_precondition() {
        fn check(x: Real) -> Result<Real> {
            crate::ensure!(x.is_finite(), "x must be finite, got {x}");
            Ok(x)
        }
        assert_eq!(check(1.0), Ok(1.0));
        assert!(matches!(check(f64::NAN), Err(Error::Precondition(_))));
    }

    #[test]
    fn toml_errors_become_config_errors() {
        let err: Error = toml::from_str::<toml::Table>("= nope").unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
