//! Equinox holiday dates.
//!
//! The vernal and autumnal equinox days are proclaimed each year from
//! astronomical observation.  The closed-form approximation used here,
//!
//! ```text
//! floor(base + 0.242194 * (year - 1980) - floor((year - 1980) / 4))
//! ```
//!
//! with `base = 20.8431` (March) or `23.2488` (September), is the one in
//! common use for 1980–2099.  The result is clamped to the days the equinox
//! has historically fallen on, so years outside that range degrade instead
//! of failing.

use jph_core::errors::Result;

use crate::date::Date;
use crate::month::Month;

/// Which equinox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Equinox {
    /// March equinox (春分).
    Vernal,
    /// September equinox (秋分).
    Autumnal,
}

impl Equinox {
    /// The month the equinox holiday falls in.
    pub fn month(&self) -> Month {
        match self {
            Equinox::Vernal => Month::March,
            Equinox::Autumnal => Month::September,
        }
    }

    /// Day-of-month of the equinox holiday in `year`.
    pub fn day(&self, year: u16) -> u8 {
        equinox_day(*self, year)
    }

    /// Date of the equinox holiday in `year`.
    pub fn date(&self, year: u16) -> Result<Date> {
        Date::from_ymd(year, self.month().number(), self.day(year))
    }
}

/// Day-of-month of the `kind` equinox holiday in `year`.
///
/// Always within `19..=22` for the vernal and `22..=24` for the autumnal
/// equinox.
pub fn equinox_day(kind: Equinox, year: u16) -> u8 {
    let (base, lo, hi) = match kind {
        Equinox::Vernal => (20.8431, 19.0, 22.0),
        Equinox::Autumnal => (23.2488, 22.0, 24.0),
    };
    let dy = year as f64 - 1980.0;
    let day = (base + 0.242194 * dy - (dy / 4.0).floor()).floor();
    day.clamp(lo, hi) as u8
}
