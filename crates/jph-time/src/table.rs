//! `HolidayTable` — the holidays of one year.
//!
//! An ordered map from [`DayKey`] to [`HolidayKind`].  Tables are filled by
//! the rule passes and then frozen behind an `Arc` by the year cache; the
//! only mutating method is crate-private.

use std::collections::BTreeMap;

use crate::date::Date;
use crate::day_key::DayKey;
use crate::holiday::HolidayKind;
use crate::month::Month;

/// Holidays of a single year, keyed by day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayTable {
    year: u16,
    entries: BTreeMap<DayKey, HolidayKind>,
}

impl HolidayTable {
    /// Create an empty table for `year`.
    pub(crate) fn new(year: u16) -> Self {
        Self {
            year,
            entries: BTreeMap::new(),
        }
    }

    /// Record `kind` on `(month, day)` of the table's year, replacing any
    /// previous entry for that day.
    ///
    /// Components that do not form a real date of the table's year are
    /// ignored.
    pub(crate) fn add(&mut self, month: u8, day: u8, kind: HolidayKind) {
        match Date::from_ymd(self.year, month, day) {
            Ok(d) => self.add_date(d, kind),
            Err(e) => tracing::error!(year = self.year, month, day, %e, "ignoring invalid holiday date"),
        }
    }

    /// Record `kind` on `date`, replacing any previous entry.
    ///
    /// Dates outside the table's year are ignored.
    pub(crate) fn add_date(&mut self, date: Date, kind: HolidayKind) {
        if date.year() != self.year {
            return;
        }
        self.entries.insert(DayKey::from(date), kind);
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// The year this table describes.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Number of holidays.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The holiday on `key`, if any.
    pub fn get(&self, key: DayKey) -> Option<HolidayKind> {
        self.entries.get(&key).copied()
    }

    /// Japanese name of the holiday on `key`, if any.
    pub fn name(&self, key: DayKey) -> Option<&'static str> {
        self.get(key).map(|k| k.name())
    }

    /// Whether `key` is a holiday.
    pub fn contains(&self, key: DayKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Whether `date` is a holiday.
    pub fn contains_date(&self, date: Date) -> bool {
        self.contains(DayKey::from(date))
    }

    /// Iterate over `(key, kind)` pairs in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (DayKey, HolidayKind)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }

    /// Holidays falling in `month`, in calendar order.
    pub fn month(&self, month: Month) -> impl Iterator<Item = (DayKey, HolidayKind)> + '_ {
        let m = month.number();
        let lo = DayKey::from_parts(self.year, m, 0);
        let hi = DayKey::from_parts(self.year, m, 99);
        self.entries.range(lo..=hi).map(|(k, v)| (*k, *v))
    }

    /// The whole table as a `DayKey → name` map.
    pub fn names(&self) -> BTreeMap<DayKey, String> {
        self.iter().map(|(k, v)| (k, v.name().to_owned())).collect()
    }

    /// `DayKey → name` map restricted to `month`.
    pub fn month_names(&self, month: Month) -> BTreeMap<DayKey, String> {
        self.month(month)
            .map(|(k, v)| (k, v.name().to_owned()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_add_overwrites() {
        let mut t = HolidayTable::new(2019);
        t.add(5, 1, HolidayKind::CitizensHoliday);
        t.add(5, 1, HolidayKind::EnthronementDay);
        let key = DayKey::from_parts(2019, 5, 1);
        assert_eq!(t.get(key), Some(HolidayKind::EnthronementDay));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn foreign_year_and_invalid_dates_ignored() {
        let mut t = HolidayTable::new(2023);
        t.add_date(Date::from_ymd(2024, 1, 1).unwrap(), HolidayKind::NewYearsDay);
        t.add(2, 29, HolidayKind::NewYearsDay);
        assert!(t.is_empty());
    }

    #[test]
    fn month_filter() {
        let mut t = HolidayTable::new(2023);
        t.add(4, 29, HolidayKind::ShowaDay);
        t.add(5, 3, HolidayKind::ConstitutionMemorialDay);
        t.add(5, 5, HolidayKind::ChildrensDay);
        t.add(6, 1, HolidayKind::MarineDay);
        let may = t.month_names(Month::May);
        assert_eq!(may.len(), 2);
        assert_eq!(may[&DayKey::from_parts(2023, 5, 3)], "憲法記念日");
        assert_eq!(t.month(Month::April).count(), 1);
        assert_eq!(t.month(Month::July).count(), 0);
    }
}
