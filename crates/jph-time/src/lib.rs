//! # jph-time
//!
//! Date types and the Japanese public-holiday engine.
//!
//! ```
//! use jph_time::{Date, JapaneseHolidays};
//!
//! let jp = JapaneseHolidays::new();
//! let d = Date::from_ymd(2021, 7, 23).unwrap();
//! assert_eq!(jp.holiday_name(d).as_deref(), Some("スポーツの日"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Per-year table cache.
pub mod cache;

/// Business-day calendars.
pub mod calendar;

/// `Date` type.
pub mod date;

/// `DayKey` — integer day key.
pub mod day_key;

/// Substitute and citizens' holiday passes.
pub mod derived;

/// Equinox day approximation.
pub mod equinox;

/// `HolidayKind` enum.
pub mod holiday;

/// `Month` — month of the year.
pub mod month;

/// Public lookup API.
pub mod query;

/// Statutory holiday rules.
pub mod rules;

/// Interchangeable holiday sources.
pub mod source;

/// `HolidayTable` — holidays of one year.
pub mod table;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use cache::YearTableCache;
pub use calendar::{Calendar, JapanCalendar, SourceCalendar};
pub use date::Date;
pub use day_key::DayKey;
pub use equinox::{equinox_day, Equinox};
pub use holiday::HolidayKind;
pub use month::Month;
pub use query::JapaneseHolidays;
pub use source::{
    refresh_at, refresh_from, FallbackSource, HolidayFeed, HolidaySource, MonthHolidayMap,
};
pub use table::HolidayTable;
pub use weekday::Weekday;
