//! Engine settings.
//!
//! [`Settings`] is a plain value handed to the holiday engine at
//! construction time.  There is no process-wide mutable copy: two engines
//! built with different settings never observe each other.

use std::ops::RangeInclusive;

/// First year the equinox approximation is intended for.
pub const DEFAULT_FIRST_YEAR: u16 = 2000;

/// Last year the equinox approximation is intended for.
pub const DEFAULT_LAST_YEAR: u16 = 2099;

/// Configuration of a holiday engine.
///
/// Years outside [`supported_years`](Self::supported_years) are still
/// resolved (the equinox days are clamped rather than rejected); the range
/// only controls whether a warning is logged when such a year is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    supported_years: RangeInclusive<u16>,
    warn_outside_supported: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            supported_years: DEFAULT_FIRST_YEAR..=DEFAULT_LAST_YEAR,
            warn_outside_supported: true,
        }
    }
}

impl Settings {
    /// Default settings (2000–2099, warnings enabled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the supported year range.
    pub fn with_supported_years(mut self, years: RangeInclusive<u16>) -> Self {
        self.supported_years = years;
        self
    }

    /// Enable or disable the out-of-range warning.
    pub fn with_warn_outside_supported(mut self, warn: bool) -> Self {
        self.warn_outside_supported = warn;
        self
    }

    /// The year range the engine is documented to be accurate for.
    pub fn supported_years(&self) -> &RangeInclusive<u16> {
        &self.supported_years
    }

    /// Whether building a year outside the supported range logs a warning.
    pub fn warn_outside_supported(&self) -> bool {
        self.warn_outside_supported
    }

    /// Return `true` if `year` lies within the supported range.
    pub fn is_supported(&self, year: u16) -> bool {
        self.supported_years.contains(&year)
    }
}
