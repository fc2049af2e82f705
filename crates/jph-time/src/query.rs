//! `JapaneseHolidays` — the public lookup API.
//!
//! Every lookup resolves a civil day, fetches that year's table from the
//! [`YearTableCache`] and reads one entry.  Instants are first converted to
//! the civil day observed in the caller's time zone, so the same instant
//! can be a holiday in Tokyo and an ordinary day in UTC.

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use chrono::{DateTime, Local, TimeZone};
use jph_core::Settings;

use crate::cache::YearTableCache;
use crate::date::Date;
use crate::day_key::DayKey;
use crate::holiday::HolidayKind;
use crate::month::Month;
use crate::table::HolidayTable;

static SHARED: LazyLock<JapaneseHolidays> = LazyLock::new(JapaneseHolidays::new);

/// Japanese public-holiday engine.
///
/// Cheap to share: lookups take `&self` and the engine is `Send + Sync`.
#[derive(Debug, Default)]
pub struct JapaneseHolidays {
    cache: YearTableCache,
}

impl JapaneseHolidays {
    /// Engine with default [`Settings`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with the given settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            cache: YearTableCache::with_settings(settings),
        }
    }

    /// Process-wide engine with default settings, created on first use.
    pub fn shared() -> &'static JapaneseHolidays {
        &SHARED
    }

    /// The underlying year cache.
    pub fn cache(&self) -> &YearTableCache {
        &self.cache
    }

    // ── Civil-day lookups ────────────────────────────────────────────────

    /// The holiday on `date`, if any.
    pub fn holiday_kind(&self, date: Date) -> Option<HolidayKind> {
        self.cache.table(date.year()).get(date.into())
    }

    /// Japanese name of the holiday on `date`, if any.
    pub fn holiday_name(&self, date: Date) -> Option<String> {
        self.holiday_kind(date).map(|k| k.name().to_owned())
    }

    /// Whether `date` is a public holiday.
    pub fn is_holiday(&self, date: Date) -> bool {
        self.holiday_kind(date).is_some()
    }

    // ── Instant lookups ──────────────────────────────────────────────────

    /// Japanese name of the holiday on the day `instant` falls on in `tz`.
    ///
    /// Instants whose civil year lies outside the [`Date`] range are never
    /// holidays.
    pub fn holiday_name_at<Tz: TimeZone, Z: TimeZone>(&self, instant: &DateTime<Tz>, tz: &Z) -> Option<String> {
        let date = Date::from_instant(instant, tz).ok()?;
        self.holiday_name(date)
    }

    /// Whether the day `instant` falls on in `tz` is a public holiday.
    pub fn is_holiday_at<Tz: TimeZone, Z: TimeZone>(&self, instant: &DateTime<Tz>, tz: &Z) -> bool {
        self.holiday_name_at(instant, tz).is_some()
    }

    /// [`holiday_name_at`](Self::holiday_name_at) in the system's local zone.
    pub fn holiday_name_local<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> Option<String> {
        self.holiday_name_at(instant, &Local)
    }

    /// [`is_holiday_at`](Self::is_holiday_at) in the system's local zone.
    pub fn is_holiday_local<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        self.is_holiday_at(instant, &Local)
    }

    // ── Ranges ───────────────────────────────────────────────────────────

    /// Resolved holidays of `year`.
    pub fn holidays_in_year(&self, year: u16) -> Arc<HolidayTable> {
        self.cache.table(year)
    }

    /// `DayKey → name` map of the holidays in `month` of `year`.
    pub fn holidays_in_month(&self, year: u16, month: Month) -> BTreeMap<DayKey, String> {
        self.cache.table(year).month_names(month)
    }

    /// `DayKey → name` map of the month containing `instant` in `tz`.
    pub fn holidays_in_month_of<Tz: TimeZone, Z: TimeZone>(
        &self,
        instant: &DateTime<Tz>,
        tz: &Z,
    ) -> BTreeMap<DayKey, String> {
        match Date::from_instant(instant, tz) {
            Ok(d) => self.holidays_in_month(d.year(), d.month_of_year()),
            Err(_) => BTreeMap::new(),
        }
    }

    /// Holidays from `from` to `to`, both inclusive, in calendar order.
    pub fn holidays_between(&self, from: Date, to: Date) -> Vec<(Date, HolidayKind)> {
        if to < from {
            return Vec::new();
        }
        let mut out = Vec::new();
        for year in from.year()..=to.year() {
            let table = self.cache.table(year);
            for (key, kind) in table.iter() {
                let Ok(d) = key.to_date() else { continue };
                if from <= d && d <= to {
                    out.push((d, kind));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn name_and_kind() {
        let jp = JapaneseHolidays::new();
        assert_eq!(jp.holiday_name(date(2024, 1, 1)).as_deref(), Some("元日"));
        assert_eq!(jp.holiday_kind(date(2024, 1, 8)), Some(HolidayKind::ComingOfAgeDay));
        assert!(!jp.is_holiday(date(2024, 1, 9)));
    }

    #[test]
    fn instant_resolved_in_zone() {
        let jp = JapaneseHolidays::new();
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        // 2021-12-31T16:00Z is New Year's Day in Tokyo
        let instant = Utc.with_ymd_and_hms(2021, 12, 31, 16, 0, 0).unwrap();
        assert_eq!(jp.holiday_name_at(&instant, &tokyo).as_deref(), Some("元日"));
        assert_eq!(jp.holiday_name_at(&instant, &Utc), None);
        assert!(jp.is_holiday_at(&instant, &tokyo));
    }

    #[test]
    fn month_of_instant() {
        let jp = JapaneseHolidays::new();
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let instant = tokyo.with_ymd_and_hms(2015, 9, 10, 12, 0, 0).unwrap();
        let sept = jp.holidays_in_month_of(&instant, &tokyo);
        let days: Vec<u8> = sept.keys().map(|k| k.day()).collect();
        assert_eq!(days, vec![21, 22, 23]);
    }

    #[test]
    fn between_spans_years() {
        let jp = JapaneseHolidays::new();
        let hs = jp.holidays_between(date(2022, 12, 1), date(2023, 1, 10));
        let dates: Vec<Date> = hs.iter().map(|(d, _)| *d).collect();
        assert_eq!(dates, vec![date(2023, 1, 1), date(2023, 1, 2), date(2023, 1, 9)]);
        assert!(jp.holidays_between(date(2023, 1, 10), date(2023, 1, 1)).is_empty());
    }

    #[test]
    fn shared_instance_is_reused() {
        let a = JapaneseHolidays::shared();
        let b = JapaneseHolidays::shared();
        assert!(std::ptr::eq(a, b));
        assert!(a.is_holiday(date(2030, 1, 1)));
    }
}
