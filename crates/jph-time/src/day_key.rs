//! `DayKey` — integer key of a civil day.
//!
//! A day key encodes a date as `year * 10000 + month * 100 + day`, so
//! `2024-01-08` becomes `20240108`.  Keys compare in calendar order and are
//! independent of time of day or time zone once the civil day is known.
//! Holiday sources exchange their results as `DayKey → name` maps.

use jph_core::errors::Result;

use crate::date::Date;

/// Integer encoding `year * 10000 + month * 100 + day` of a civil day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DayKey(u32);

impl DayKey {
    /// Build a key from validated date components.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        Date::from_ymd(year, month, day).map(Self::from)
    }

    /// Build a key without validating that the day exists.
    ///
    /// Useful for range bounds such as `(y, m, 0)..=(y, m, 99)`.
    pub const fn from_parts(year: u16, month: u8, day: u8) -> Self {
        DayKey(year as u32 * 10_000 + month as u32 * 100 + day as u32)
    }

    /// The raw integer value.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Year component.
    pub fn year(&self) -> u16 {
        (self.0 / 10_000) as u16
    }

    /// Month component (1–12 for keys built from dates).
    pub fn month(&self) -> u8 {
        (self.0 / 100 % 100) as u8
    }

    /// Day-of-month component.
    pub fn day(&self) -> u8 {
        (self.0 % 100) as u8
    }

    /// The date this key denotes, if it is a real calendar day.
    pub fn to_date(&self) -> Result<Date> {
        Date::from_ymd(self.year(), self.month(), self.day())
    }
}

impl From<Date> for DayKey {
    fn from(d: Date) -> Self {
        let (y, m, dd) = d.ymd();
        DayKey::from_parts(y, m, dd)
    }
}

impl From<DayKey> for u32 {
    fn from(k: DayKey) -> u32 {
        k.0
    }
}

impl std::fmt::Display for DayKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding() {
        let k = DayKey::from_ymd(2024, 1, 8).unwrap();
        assert_eq!(k.value(), 20_240_108);
        assert_eq!((k.year(), k.month(), k.day()), (2024, 1, 8));
        assert_eq!(k.to_string(), "2024-01-08");
        assert_eq!(k.to_date().unwrap(), Date::from_ymd(2024, 1, 8).unwrap());
    }

    #[test]
    fn invalid_day_rejected() {
        assert!(DayKey::from_ymd(2023, 2, 29).is_err());
        assert!(DayKey::from_parts(2023, 2, 29).to_date().is_err());
    }

    #[test]
    fn strictly_increasing_within_year() {
        let mut prev: Option<DayKey> = None;
        let from = Date::from_ymd(2024, 1, 1).unwrap();
        let to = Date::from_ymd(2025, 1, 1).unwrap();
        for d in Date::range_inclusive(from, to) {
            let k = DayKey::from(d);
            if let Some(p) = prev {
                assert!(p < k, "{p} !< {k}");
            }
            prev = Some(k);
        }
    }
}
