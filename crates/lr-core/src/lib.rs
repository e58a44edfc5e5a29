//! # lr-core
//!
//! Core types, error definitions and settings for loanrate.
//!
//! This crate provides the building blocks shared across the other crates in
//! the workspace: primitive type aliases, the error hierarchy and the
//! process-wide solver `Settings`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Global library settings (solver defaults).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Non-negative integer type (payment counts).
pub type Natural = u32;

/// Alias used for sizes and iteration counts.
pub type Size = usize;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A monetary amount.
pub type Money = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{Settings, SolverSettings};
