//! Global library settings.
//!
//! [`Settings`] holds the [`SolverSettings`] used whenever a caller does not
//! supply a start rate, bracket, tolerance or iteration ceiling explicitly.
//! It is a process-wide singleton accessed via a `std::sync::OnceLock`.
//!
//! Thread safety: the solver settings are stored behind a `Mutex` so that
//! they can be changed from any thread.  Each test that changes them should
//! restore them when done (see [`Settings::reset`]).

use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};

use crate::{errors::Result, Rate, Real, Size};

/// Defaults for the APR solvers and the convergence evaluator.
///
/// Every field has a default, so a partial TOML document is accepted:
///
/// ```
/// use lr_core::settings::SolverSettings;
/// let s = SolverSettings::from_toml_str("tolerance = 1e-6").unwrap();
/// assert_eq!(s.tolerance, 1e-6);
/// assert_eq!(s.newton_start, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Starting annual rate for Newton-Raphson.
    pub newton_start: Rate,
    /// Lower end of the default bisection bracket.
    pub bisection_low: Rate,
    /// Upper end of the default bisection bracket.
    pub bisection_high: Rate,
    /// Relative-error tolerance used by comparison reports.
    pub tolerance: Real,
    /// Iteration ceiling for the convergence evaluator; `None` means unbounded.
    pub max_iterations: Option<Size>,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            newton_start: 0.5,
            bisection_low: 0.001,
            bisection_high: 1.0,
            tolerance: 1.0e-4,
            max_iterations: Some(1000),
        }
    }
}

impl SolverSettings {
    /// Parse settings from a TOML document.  Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let settings: SolverSettings = toml::from_str(source)?;
        crate::ensure!(
            settings.bisection_low.is_finite() && settings.bisection_high.is_finite(),
            "bisection bracket must be finite, got [{}, {}]",
            settings.bisection_low,
            settings.bisection_high
        );
        crate::ensure!(
            settings.tolerance > 0.0 && settings.tolerance.is_finite(),
            "tolerance must be positive, got {}",
            settings.tolerance
        );
        Ok(settings)
    }
}

/// Process-wide settings used by the loanrate library.
pub struct Settings {
    solver: Mutex<SolverSettings>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            solver: Mutex::new(SolverSettings::default()),
        })
    }

    /// Return a copy of the current solver settings.
    pub fn solver(&self) -> SolverSettings {
        *self.solver.lock().expect("Settings mutex poisoned")
    }

    /// Replace the solver settings.
    pub fn set_solver(&self, settings: SolverSettings) {
        *self.solver.lock().expect("Settings mutex poisoned") = settings;
    }

    /// Restore the default solver settings.
    pub fn reset(&self) {
        self.set_solver(SolverSettings::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_exercise() {
        let s = SolverSettings::default();
        assert_eq!(s.newton_start, 0.5);
        assert_eq!((s.bisection_low, s.bisection_high), (0.001, 1.0));
        assert_eq!(s.max_iterations, Some(1000));
    }

    #[test]
    fn toml_overrides_selected_fields() {
        let s = SolverSettings::from_toml_str(
            r#"
            newton_start = 0.2
            bisection_high = 2.0
            max_iterations = 50
            "#,
        )
        .unwrap();
        assert_eq!(s.newton_start, 0.2);
        assert_eq!(s.bisection_low, 0.001);
        assert_eq!(s.bisection_high, 2.0);
        assert_eq!(s.max_iterations, Some(50));
    }

    #[test]
    fn toml_rejects_bad_tolerance() {
        assert!(SolverSettings::from_toml_str("tolerance = -1.0").is_err());
        assert!(SolverSettings::from_toml_str("tolerance = \"tight\"").is_err());
    }
}
