//! Interchangeable holiday sources.
//!
//! The rule engine is one way to learn holiday names; another is an external
//! feed, e.g. the holiday calendar a user subscribed to on their device.
//! Both speak the same contract, a `DayKey → name` map, so consumers such as
//! a month grid can use either through [`HolidaySource`] and chain them with
//! [`FallbackSource`].

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone};
use jph_core::errors::Result;

use crate::date::Date;
use crate::day_key::DayKey;
use crate::month::Month;
use crate::query::JapaneseHolidays;

/// Anything that can name the holiday on a given day.
pub trait HolidaySource: std::fmt::Debug + Send + Sync {
    /// Human-readable name of the source.
    fn source_name(&self) -> &str;

    /// Name of the holiday on `key`, if any.
    fn holiday_name(&self, key: DayKey) -> Option<String>;

    /// All holidays in `month` of `year` known to this source.
    fn holidays_in_month(&self, year: u16, month: Month) -> BTreeMap<DayKey, String>;

    /// Whether `date` is a holiday according to this source.
    fn is_holiday(&self, date: Date) -> bool {
        self.holiday_name(date.into()).is_some()
    }
}

impl HolidaySource for JapaneseHolidays {
    fn source_name(&self) -> &str {
        "Japanese holiday law"
    }

    fn holiday_name(&self, key: DayKey) -> Option<String> {
        let date = key.to_date().ok()?;
        JapaneseHolidays::holiday_name(self, date)
    }

    fn holidays_in_month(&self, year: u16, month: Month) -> BTreeMap<DayKey, String> {
        JapaneseHolidays::holidays_in_month(self, year, month)
    }
}

/// Holidays of one month as delivered by an external feed.
///
/// A feed refresh produces a whole new map that replaces the previous one;
/// days outside the month are never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthHolidayMap {
    name: String,
    year: u16,
    month: Month,
    names: BTreeMap<DayKey, String>,
}

impl MonthHolidayMap {
    /// An empty map for the month containing `date`.
    pub fn empty(name: impl Into<String>, date: Date) -> Self {
        Self {
            name: name.into(),
            year: date.year(),
            month: date.month_of_year(),
            names: BTreeMap::new(),
        }
    }

    /// Group `(start date, title)` events into a map for the month containing
    /// `month_of`.
    ///
    /// Events outside that month are dropped.  When several events start on
    /// the same day the first title wins.  Blank titles are ignored.
    pub fn from_events<I, S>(name: impl Into<String>, month_of: Date, events: I) -> Self
    where
        I: IntoIterator<Item = (Date, S)>,
        S: Into<String>,
    {
        let mut map = Self::empty(name, month_of);
        for (date, title) in events {
            if date.year() != map.year || date.month_of_year() != map.month {
                continue;
            }
            let title: String = title.into();
            let title = title.trim();
            if title.is_empty() {
                continue;
            }
            map.names.entry(date.into()).or_insert_with(|| title.to_owned());
        }
        map
    }

    /// Replace the contents with a freshly refreshed map.
    pub fn replace(&mut self, refreshed: MonthHolidayMap) {
        *self = refreshed;
    }

    /// Year of the month this map covers.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// The month this map covers.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Number of holidays.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the map holds no holidays.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The underlying `DayKey → name` map.
    pub fn names(&self) -> &BTreeMap<DayKey, String> {
        &self.names
    }
}

impl HolidaySource for MonthHolidayMap {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn holiday_name(&self, key: DayKey) -> Option<String> {
        self.names.get(&key).cloned()
    }

    fn holidays_in_month(&self, year: u16, month: Month) -> BTreeMap<DayKey, String> {
        if year == self.year && month == self.month {
            self.names.clone()
        } else {
            BTreeMap::new()
        }
    }
}

/// An external provider of monthly holiday maps.
///
/// Implementations typically query a device or network calendar; permission
/// handling and calendar discovery are theirs to do.
pub trait HolidayFeed {
    /// Fetch the holidays of the month containing `month_containing`.
    fn refresh_holidays(&self, month_containing: Date) -> Result<MonthHolidayMap>;
}

/// Refresh `current` from `feed`.
///
/// On failure `current` is emptied (stale names from another month are never
/// shown) and the error is returned to the caller.
pub fn refresh_from<F: HolidayFeed + ?Sized>(
    feed: &F,
    current: &mut MonthHolidayMap,
    month_containing: Date,
) -> Result<()> {
    match feed.refresh_holidays(month_containing) {
        Ok(map) => {
            tracing::debug!(
                source = map.source_name(),
                year = map.year(),
                month = map.month().number(),
                holidays = map.len(),
                "refreshed holiday feed"
            );
            current.replace(map);
            Ok(())
        }
        Err(e) => {
            tracing::warn!(%e, "holiday feed refresh failed");
            let name = current.source_name().to_owned();
            current.replace(MonthHolidayMap::empty(name, month_containing));
            Err(e)
        }
    }
}

/// [`refresh_from`] for the month containing `instant` as observed in `tz`.
///
/// An instant outside the supported date range leaves `current` untouched
/// and returns the conversion error.
pub fn refresh_at<F, Tz, Z>(
    feed: &F,
    current: &mut MonthHolidayMap,
    instant: &DateTime<Tz>,
    tz: &Z,
) -> Result<()>
where
    F: HolidayFeed + ?Sized,
    Tz: TimeZone,
    Z: TimeZone,
{
    let month_containing = Date::from_instant(instant, tz)?;
    refresh_from(feed, current, month_containing)
}

/// Ask `primary` first and fall back to `secondary` for days it does not
/// know.
#[derive(Debug)]
pub struct FallbackSource<P, S> {
    primary: P,
    secondary: S,
    name: String,
}

impl<P: HolidaySource, S: HolidaySource> FallbackSource<P, S> {
    /// Chain two sources.
    pub fn new(primary: P, secondary: S) -> Self {
        let name = format!("{} | {}", primary.source_name(), secondary.source_name());
        Self {
            primary,
            secondary,
            name,
        }
    }

    /// The preferred source.
    pub fn primary(&self) -> &P {
        &self.primary
    }

    /// Mutable access to the preferred source, e.g. to refresh a feed.
    pub fn primary_mut(&mut self) -> &mut P {
        &mut self.primary
    }

    /// The fallback source.
    pub fn secondary(&self) -> &S {
        &self.secondary
    }
}

impl<P: HolidaySource, S: HolidaySource> HolidaySource for FallbackSource<P, S> {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn holiday_name(&self, key: DayKey) -> Option<String> {
        self.primary
            .holiday_name(key)
            .or_else(|| self.secondary.holiday_name(key))
    }

    fn holidays_in_month(&self, year: u16, month: Month) -> BTreeMap<DayKey, String> {
        let mut merged = self.secondary.holidays_in_month(year, month);
        merged.extend(self.primary.holidays_in_month(year, month));
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jph_core::Error;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn first_title_wins_and_other_months_dropped() {
        let events = vec![
            (date(2024, 5, 3), "憲法記念日"),
            (date(2024, 5, 3), "Constitution Day"),
            (date(2024, 5, 6), "  振替休日 "),
            (date(2024, 5, 7), "   "),
            (date(2024, 6, 1), "not in May"),
        ];
        let map = MonthHolidayMap::from_events("device", date(2024, 5, 15), events);
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.holiday_name(DayKey::from_parts(2024, 5, 3)).as_deref(),
            Some("憲法記念日")
        );
        assert_eq!(
            map.holiday_name(DayKey::from_parts(2024, 5, 6)).as_deref(),
            Some("振替休日")
        );
        assert!(map.holidays_in_month(2024, Month::June).is_empty());
    }

    #[test]
    fn engine_and_map_agree_on_contract() {
        let engine = JapaneseHolidays::new();
        let from_engine = HolidaySource::holidays_in_month(&engine, 2024, Month::May);
        let events: Vec<_> = from_engine
            .iter()
            .map(|(k, v)| (k.to_date().unwrap(), v.clone()))
            .collect();
        let map = MonthHolidayMap::from_events("copy", date(2024, 5, 1), events);
        assert_eq!(map.holidays_in_month(2024, Month::May), from_engine);
    }

    #[test]
    fn fallback_prefers_primary() {
        let feed = MonthHolidayMap::from_events(
            "device",
            date(2024, 5, 1),
            vec![(date(2024, 5, 3), "Constitution Day")],
        );
        let chain = FallbackSource::new(feed, JapaneseHolidays::new());
        assert_eq!(chain.source_name(), "device | Japanese holiday law");
        let may3 = DayKey::from_parts(2024, 5, 3);
        let may4 = DayKey::from_parts(2024, 5, 4);
        assert_eq!(chain.holiday_name(may3).as_deref(), Some("Constitution Day"));
        assert_eq!(chain.holiday_name(may4).as_deref(), Some("みどりの日"));
        let month = chain.holidays_in_month(2024, Month::May);
        assert_eq!(month[&may3], "Constitution Day");
        assert_eq!(month.len(), 4); // May 3, 4, 5 and the May 6 substitute
    }

    #[derive(Debug)]
    struct Denied;

    impl HolidayFeed for Denied {
        fn refresh_holidays(&self, _month_containing: Date) -> Result<MonthHolidayMap> {
            Err(Error::Source {
                source_name: "device".into(),
                reason: "calendar access denied".into(),
            })
        }
    }

    #[derive(Debug)]
    struct Fixed;

    impl HolidayFeed for Fixed {
        fn refresh_holidays(&self, month_containing: Date) -> Result<MonthHolidayMap> {
            Ok(MonthHolidayMap::from_events(
                "device",
                month_containing,
                vec![(date(2024, 1, 1), "元日")],
            ))
        }
    }

    #[test]
    fn refresh_replaces_or_clears() {
        let mut current = MonthHolidayMap::empty("device", date(2024, 1, 1));
        refresh_from(&Fixed, &mut current, date(2024, 1, 20)).unwrap();
        assert_eq!(current.len(), 1);

        let err = refresh_from(&Denied, &mut current, date(2024, 2, 1)).unwrap_err();
        assert!(matches!(err, Error::Source { .. }));
        assert!(current.is_empty());
        assert_eq!(current.month(), Month::February);
    }

    #[test]
    fn refresh_at_uses_observer_zone() {
        use chrono::{FixedOffset, TimeZone, Utc};
        let jst = FixedOffset::east_opt(9 * 3600).unwrap();
        let instant = Utc.with_ymd_and_hms(2023, 12, 31, 20, 0, 0).unwrap();
        let mut current = MonthHolidayMap::empty("device", date(2023, 12, 1));
        refresh_at(&Fixed, &mut current, &instant, &jst).unwrap();
        assert_eq!((current.year(), current.month()), (2024, Month::January));
        assert_eq!(current.len(), 1);
    }
}
