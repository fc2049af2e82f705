//! Business-day calendar over the holiday engine.
//!
//! A day is a business day unless it falls on a weekend or a public holiday.

use std::sync::Arc;

use crate::date::Date;
use crate::query::JapaneseHolidays;
use crate::source::HolidaySource;

/// A business-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is not a business day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` is a Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }
}

/// Japanese business-day calendar: weekends plus public holidays.
#[derive(Debug, Clone)]
pub struct JapanCalendar {
    holidays: Arc<JapaneseHolidays>,
}

impl Default for JapanCalendar {
    fn default() -> Self {
        Self::new(Arc::new(JapaneseHolidays::new()))
    }
}

impl JapanCalendar {
    /// Calendar backed by `holidays`.
    pub fn new(holidays: Arc<JapaneseHolidays>) -> Self {
        Self { holidays }
    }

    /// The holiday engine behind this calendar.
    pub fn holidays(&self) -> &JapaneseHolidays {
        &self.holidays
    }
}

impl Calendar for JapanCalendar {
    fn name(&self) -> &str {
        "Japan"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.holidays.is_holiday(date)
    }
}

/// Business-day calendar over any [`HolidaySource`], e.g. a device feed
/// chained in front of the engine.
#[derive(Debug)]
pub struct SourceCalendar<S> {
    source: S,
}

impl<S: HolidaySource> SourceCalendar<S> {
    /// Calendar backed by `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The holiday source behind this calendar.
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: HolidaySource> Calendar for SourceCalendar<S> {
    fn name(&self) -> &str {
        self.source.source_name()
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.source.is_holiday(date)
    }
}
