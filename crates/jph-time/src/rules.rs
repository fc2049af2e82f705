//! Statutory holidays of a year, before the derived rules run.
//!
//! Covers the fixed-date holidays, the equinox days, the "Happy Monday"
//! holidays that float to the n-th Monday of their month, and the one-off
//! dates of 2019 (enthronement) and 2020/2021 (Olympic Games).  One-off
//! dates are added after the generic rules so they win on a shared day.

use crate::date::{Date, MAX_YEAR, MIN_YEAR};
use crate::equinox::{equinox_day, Equinox};
use crate::holiday::HolidayKind;
use crate::table::HolidayTable;
use crate::weekday::Weekday;

/// Statutory holidays of `year`, without substitute or citizens' holidays.
///
/// Years outside the [`Date`] range have no holidays.
pub fn base_table(year: u16) -> HolidayTable {
    let mut t = HolidayTable::new(year);
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        tracing::warn!(year, "year outside the date range; no holidays");
        return t;
    }

    // Fixed dates
    t.add(1, 1, HolidayKind::NewYearsDay);
    t.add(2, 11, HolidayKind::NationalFoundationDay);
    t.add(11, 3, HolidayKind::CultureDay);
    t.add(11, 23, HolidayKind::LabourThanksgivingDay);

    // Emperor's Birthday moved to Feb 23 with the 2019 succession; 2019
    // itself has none.
    if year >= 2020 {
        t.add(2, 23, HolidayKind::EmperorsBirthday);
    }

    t.add(3, equinox_day(Equinox::Vernal, year), HolidayKind::VernalEquinoxDay);
    t.add(9, equinox_day(Equinox::Autumnal, year), HolidayKind::AutumnalEquinoxDay);

    // Golden Week
    if year >= 2007 {
        t.add(4, 29, HolidayKind::ShowaDay);
        t.add(5, 4, HolidayKind::GreeneryDay);
    } else {
        t.add(4, 29, HolidayKind::GreeneryDay);
        // always sandwiched between May 3 and May 5 before 2007
        t.add(5, 4, HolidayKind::CitizensHoliday);
    }
    t.add(5, 3, HolidayKind::ConstitutionMemorialDay);
    t.add(5, 5, HolidayKind::ChildrensDay);

    // Happy Monday
    if year >= 2000 {
        add_nth_monday(&mut t, 2, 1, HolidayKind::ComingOfAgeDay);
        if !is_olympic_year(year) {
            let kind = if year >= 2020 {
                HolidayKind::SportsDay
            } else {
                HolidayKind::HealthAndSportsDay
            };
            add_nth_monday(&mut t, 2, 10, kind);
        }
    }

    match year {
        2020 => t.add(7, 23, HolidayKind::MarineDay),
        2021 => t.add(7, 22, HolidayKind::MarineDay),
        y if y >= 2003 => add_nth_monday(&mut t, 3, 7, HolidayKind::MarineDay),
        _ => t.add(7, 20, HolidayKind::MarineDay),
    }

    match year {
        2020 => t.add(8, 10, HolidayKind::MountainDay),
        2021 => t.add(8, 8, HolidayKind::MountainDay),
        y if y >= 2016 => t.add(8, 11, HolidayKind::MountainDay),
        _ => {}
    }

    if year >= 2003 {
        add_nth_monday(&mut t, 3, 9, HolidayKind::RespectForTheAgedDay);
    } else {
        t.add(9, 15, HolidayKind::RespectForTheAgedDay);
    }

    // One-off dates
    match year {
        2019 => {
            t.add(5, 1, HolidayKind::EnthronementDay);
            t.add(10, 22, HolidayKind::EnthronementCeremony);
        }
        2020 => t.add(7, 24, HolidayKind::SportsDay),
        2021 => t.add(7, 23, HolidayKind::SportsDay),
        _ => {}
    }

    t
}

/// Years whose summer holidays were moved around the Tokyo Olympic Games.
fn is_olympic_year(year: u16) -> bool {
    year == 2020 || year == 2021
}

/// Add `kind` on the `n`-th Monday of `month`.
///
/// The resolver cannot fail for `n <= 4` in a valid year; a failure is an
/// internal invariant violation.
fn add_nth_monday(t: &mut HolidayTable, n: u8, month: u8, kind: HolidayKind) {
    match Date::nth_weekday(n, Weekday::Monday, t.year(), month) {
        Ok(d) => t.add_date(d, kind),
        Err(e) => {
            tracing::error!(year = t.year(), month, n, %e, holiday = kind.name(), "nth-weekday resolution failed");
            if cfg!(debug_assertions) {
                panic!("nth-weekday resolution failed for {kind:?} in {}: {e}", t.year());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day_key::DayKey;

    fn kind(t: &HolidayTable, m: u8, d: u8) -> Option<HolidayKind> {
        t.get(DayKey::from_parts(t.year(), m, d))
    }

    #[test]
    fn fixed_holidays_every_year() {
        for y in 2000..=2099 {
            let t = base_table(y);
            assert_eq!(kind(&t, 1, 1), Some(HolidayKind::NewYearsDay));
            assert_eq!(kind(&t, 2, 11), Some(HolidayKind::NationalFoundationDay));
            assert_eq!(kind(&t, 5, 3), Some(HolidayKind::ConstitutionMemorialDay));
            assert_eq!(kind(&t, 5, 5), Some(HolidayKind::ChildrensDay));
            assert_eq!(kind(&t, 11, 3), Some(HolidayKind::CultureDay));
            assert_eq!(kind(&t, 11, 23), Some(HolidayKind::LabourThanksgivingDay));
        }
    }

    #[test]
    fn golden_week_before_and_after_2007() {
        let t = base_table(2006);
        assert_eq!(kind(&t, 4, 29), Some(HolidayKind::GreeneryDay));
        assert_eq!(kind(&t, 5, 4), Some(HolidayKind::CitizensHoliday));
        let t = base_table(2007);
        assert_eq!(kind(&t, 4, 29), Some(HolidayKind::ShowaDay));
        assert_eq!(kind(&t, 5, 4), Some(HolidayKind::GreeneryDay));
    }

    #[test]
    fn emperors_birthday() {
        assert_eq!(kind(&base_table(2019), 2, 23), None);
        assert_eq!(kind(&base_table(2020), 2, 23), Some(HolidayKind::EmperorsBirthday));
    }

    #[test]
    fn marine_and_aged_days_before_happy_monday() {
        let t = base_table(2002);
        assert_eq!(kind(&t, 7, 20), Some(HolidayKind::MarineDay));
        assert_eq!(kind(&t, 9, 15), Some(HolidayKind::RespectForTheAgedDay));
        // 2003: 3rd Mondays are Jul 21 and Sep 15
        let t = base_table(2003);
        assert_eq!(kind(&t, 7, 21), Some(HolidayKind::MarineDay));
        assert_eq!(kind(&t, 7, 20), None);
        assert_eq!(kind(&t, 9, 15), Some(HolidayKind::RespectForTheAgedDay));
    }

    #[test]
    fn sports_day_renamed_in_2020() {
        // 2019: 2nd Monday of October = Oct 14
        assert_eq!(kind(&base_table(2019), 10, 14), Some(HolidayKind::HealthAndSportsDay));
        // 2022: 2nd Monday of October = Oct 10
        assert_eq!(kind(&base_table(2022), 10, 10), Some(HolidayKind::SportsDay));
    }

    #[test]
    fn olympic_years() {
        let t = base_table(2020);
        assert_eq!(kind(&t, 7, 23), Some(HolidayKind::MarineDay));
        assert_eq!(kind(&t, 7, 24), Some(HolidayKind::SportsDay));
        assert_eq!(kind(&t, 8, 10), Some(HolidayKind::MountainDay));
        assert_eq!(kind(&t, 8, 11), None);
        assert_eq!(kind(&t, 10, 12), None);
        let t = base_table(2021);
        assert_eq!(kind(&t, 7, 22), Some(HolidayKind::MarineDay));
        assert_eq!(kind(&t, 7, 23), Some(HolidayKind::SportsDay));
        assert_eq!(kind(&t, 8, 8), Some(HolidayKind::MountainDay));
        assert_eq!(kind(&t, 10, 11), None);
    }

    #[test]
    fn enthronement_2019() {
        let t = base_table(2019);
        assert_eq!(kind(&t, 5, 1), Some(HolidayKind::EnthronementDay));
        assert_eq!(kind(&t, 10, 22), Some(HolidayKind::EnthronementCeremony));
        assert_eq!(kind(&base_table(2018), 5, 1), None);
    }

    #[test]
    fn years_beyond_date_range_are_empty() {
        assert!(base_table(2200).is_empty());
        assert!(base_table(u16::MAX).is_empty());
        assert!(base_table(1899).is_empty());
        assert!(!base_table(2199).is_empty());
    }

    #[test]
    fn no_derived_holidays_yet() {
        let t = base_table(2019);
        assert!(t.iter().all(|(_, k)| k != HolidayKind::SubstituteHoliday));
    }
}
