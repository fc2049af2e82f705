//! `Date` type.
//!
//! Dates are stored as a serial day number so that arithmetic and ordering
//! are plain integer operations.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900 (a Monday).
//! * The valid date range is 1900-01-01 to 2199-12-31.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};
use jph_core::errors::{Error, Result};
use jph_core::{ensure, fail};

use crate::month::Month;
use crate::weekday::Weekday;

/// A civil calendar date (proleptic Gregorian), without time or zone.
///
/// With the `serde` feature a date serializes as its serial number and is
/// range-checked when deserialized.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "i32"))]
pub struct Date(i32);

/// First year representable by [`Date`].
pub const MIN_YEAR: u16 = 1900;

/// Last year representable by [`Date`].
pub const MAX_YEAR: u16 = 2199;

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(serial_from_ymd(MAX_YEAR as i32, 12, 31));

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            fail!("serial {serial} out of range [{}, {}]", Self::MIN.0, Self::MAX.0);
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            fail!("year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]");
        }
        if !(1..=12).contains(&month) {
            fail!("month {month} out of range [1, 12]");
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            fail!("day {day} out of range [1, {days_in}] for {year}-{month:02}");
        }
        Ok(Date(serial_from_ymd(year as i32, month as i32, day as i32)))
    }

    /// January 1 of `year`.
    pub fn first_of_year(year: u16) -> Result<Self> {
        Self::from_ymd(year, 1, 1)
    }

    /// December 31 of `year`.
    pub fn last_of_year(year: u16) -> Result<Self> {
        Self::from_ymd(year, 12, 31)
    }

    /// The civil date of `instant` as observed in time zone `tz`.
    ///
    /// Fails only when the resulting year lies outside the supported range.
    pub fn from_instant<Tz: TimeZone, Z: TimeZone>(instant: &DateTime<Tz>, tz: &Z) -> Result<Self> {
        Self::try_from(instant.with_timezone(tz).date_naive())
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        match Month::from_number(self.month()) {
            Some(m) => m,
            None => unreachable!("month number is always 1..=12"),
        }
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return `(year, month, day)` in one decomposition.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let y = self.year();
        (self.0 - serial_from_ymd(y as i32, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // serial 1 (1900-01-01) is a Monday
        match Weekday::from_ordinal(((self.0 - 1).rem_euclid(7) + 1) as u8) {
            Some(w) => w,
            None => unreachable!("rem_euclid always in 1..=7"),
        }
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        match self.0.checked_add(n) {
            Some(serial) => Self::from_serial(serial),
            None => Err(Error::Date(format!("date arithmetic overflow: {self} + {n}"))),
        }
    }

    /// The following day, or `None` at the end of the supported range.
    pub fn succ(self) -> Option<Self> {
        self.add_days(1).ok()
    }

    /// The preceding day, or `None` at the start of the supported range.
    pub fn pred(self) -> Option<Self> {
        self.add_days(-1).ok()
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the first day of the month containing this date.
    pub fn start_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        Date(serial_from_ymd(y as i32, m as i32, 1))
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        Date(serial_from_ymd(y as i32, m as i32, days_in_month(y, m) as i32))
    }

    /// Every date from `from` to `to`, both inclusive.  Empty if `to < from`.
    pub fn range_inclusive(from: Date, to: Date) -> impl DoubleEndedIterator<Item = Date> {
        (from.0..=to.0).map(Date)
    }

    /// Return the *n*-th occurrence of `weekday` in `year`/`month`.
    ///
    /// For example, `nth_weekday(2, Weekday::Monday, 2024, 1)` returns the
    /// second Monday of January 2024 (2024-01-08).
    ///
    /// # Errors
    /// Returns an error if `n` is zero, if the month does not contain `n`
    /// such weekdays, or if the month itself is out of range.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        ensure!(n >= 1, "nth_weekday: n must be >= 1");
        let first = Date::from_ymd(year, month, 1)?;
        let first_wd = first.weekday().ordinal();
        let offset = (weekday.ordinal() as i32 - first_wd as i32).rem_euclid(7) as u8;
        let day = 1 + offset as u32 + 7 * (n as u32 - 1);
        if day > days_in_month(year, month) as u32 {
            fail!("nth_weekday: {n}-th {weekday} does not exist in {year}-{month:02}");
        }
        Date::from_ymd(year, month, day as u8)
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl TryFrom<i32> for Date {
    type Error = Error;

    fn try_from(serial: i32) -> Result<Self> {
        Date::from_serial(serial)
    }
}

impl From<Date> for i32 {
    fn from(d: Date) -> i32 {
        d.0
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = Error;

    fn try_from(d: NaiveDate) -> Result<Self> {
        let year = u16::try_from(d.year())
            .map_err(|_| Error::Date(format!("year {} out of range", d.year())))?;
        Date::from_ymd(year, d.month() as u8, d.day() as u8)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = *self - rhs;
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => unreachable!(),
    }
}

/// Days since 1970-01-01 of a civil date.
///
/// Eras of 400 years are counted from a March-based year so that the leap
/// day falls at the end of the cycle.
const fn days_from_civil(year: i32, month: i32, day: i32) -> i32 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
const fn civil_from_days(days: i32) -> (i32, i32, i32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

/// Days-from-civil of the day before serial 1.
const EPOCH: i32 = days_from_civil(1899, 12, 31);

const fn serial_from_ymd(year: i32, month: i32, day: i32) -> i32 {
    days_from_civil(year, month, day) - EPOCH
}

fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let (y, m, d) = civil_from_days(serial + EPOCH);
    (y as u16, m as u8, d as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
