//! # jph-core
//!
//! Core definitions shared by the jpholiday crates: the error hierarchy with
//! its `ensure!` / `fail!` macros, and the engine [`Settings`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Engine configuration.
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::Settings;
