//! Error types for jpholiday.
//!
//! Holiday lookups themselves are total and never fail; errors only arise
//! when raw date components are validated or when an external holiday feed
//! cannot deliver its data.  The [`ensure!`](crate::ensure) and
//! [`fail!`](crate::fail) macros are shorthands for the early returns used
//! by those constructors.

use thiserror::Error;

/// The top-level error type used throughout jpholiday.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Date-related error (component out of range, arithmetic overflow).
    #[error("date error: {0}")]
    Date(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// An external holiday source could not be refreshed.
    #[error("holiday source '{source_name}' unavailable: {reason}")]
    Source {
        /// Name of the source that failed.
        source_name: String,
        /// Human-readable reason reported by the source.
        reason: String,
    },
}

/// Shorthand `Result` type used throughout jpholiday.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use jph_core::{ensure, errors::Error};
/// fn nth(n: u8) -> jph_core::errors::Result<u8> {
///     ensure!(n >= 1, "n must be >= 1, got {n}");
///     Ok(n)
/// }
/// assert!(nth(2).is_ok());
/// assert!(matches!(nth(0), Err(Error::Precondition(_))));
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

/// Return `Err(Error::Date(...))` immediately.
///
/// # Example
/// ```
/// use jph_core::{fail, errors::Error};
/// fn always_err() -> jph_core::errors::Result<()> {
///     fail!("no such day: {}-{:02}-{:02}", 2023, 2, 30);
/// }
/// assert_eq!(
///     always_err(),
///     Err(Error::Date("no such day: 2023-02-30".into()))
/// );
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Date(format!($($msg)*)))
    };
}
