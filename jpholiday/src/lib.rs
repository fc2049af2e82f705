//! # jpholiday
//!
//! Japanese public holidays (祝日) for 2000–2099, including the substitute
//! holiday (振替休日) and citizens' holiday (国民の休日) rules and the
//! one-off dates of 2019–2021.
//!
//! This crate is a **façade** re-exporting the workspace crates.
//!
//! ## Quick start
//!
//! ```rust
//! use jpholiday::time::{Date, JapaneseHolidays, Month};
//!
//! let jp = JapaneseHolidays::new();
//! assert_eq!(
//!     jp.holiday_name(Date::from_ymd(2015, 9, 22).unwrap()).as_deref(),
//!     Some("国民の休日")
//! );
//! assert_eq!(jp.holidays_in_month(2020, Month::July).len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and engine settings.
pub use jph_core as core;

/// Dates, the holiday engine, holiday sources and calendars.
pub use jph_time as time;

pub use jph_core::{Error, Result, Settings};
pub use jph_time::{Date, DayKey, HolidayKind, HolidaySource, JapaneseHolidays};
