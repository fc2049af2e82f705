//! Holidays implied by other holidays.
//!
//! * **Substitute holiday** (振替休日): when a holiday falls on a Sunday, the
//!   first following day that is not already a holiday becomes one.
//! * **Citizens' holiday** (国民の休日): a day that is not a holiday but lies
//!   between two holidays becomes one.
//!
//! Each pass consumes a table and returns the extended table.  Both passes
//! read the table as it is being extended, so a substitute created early in
//! the year is visible to the rest of the same pass.

use crate::date::Date;
use crate::holiday::HolidayKind;
use crate::rules::base_table;
use crate::table::HolidayTable;
use crate::weekday::Weekday;

/// Fully resolved holidays of `year`.
///
/// Runs substitute → citizens → substitute over the statutory table.  The
/// second substitute pass covers a citizens' holiday landing on a Sunday.
/// No further iteration is done.
pub fn resolve_year(year: u16) -> HolidayTable {
    let table = base_table(year);
    let table = apply_substitute(table);
    let table = apply_citizens(table);
    apply_substitute(table)
}

/// Add a substitute holiday after every holiday that falls on a Sunday.
///
/// The substitute is the first day after the Sunday that has no entry yet,
/// so a run of consecutive holidays pushes it past the whole run.  A Sunday
/// whose run of consecutive holidays already holds one substitute per
/// Sunday up to and including it is considered served, which makes the
/// pass idempotent.  The search never leaves the table's year.
pub fn apply_substitute(mut table: HolidayTable) -> HolidayTable {
    let Some((first, last)) = year_bounds(table.year()) else {
        return table;
    };
    for day in Date::range_inclusive(first, last) {
        if day.weekday() != Weekday::Sunday || !table.contains_date(day) {
            continue;
        }

        let mut run_start = day;
        while let Some(prev) = run_start.pred().filter(|d| *d >= first && table.contains_date(*d)) {
            run_start = prev;
        }
        let sundays = Date::range_inclusive(run_start, day)
            .filter(|d| d.weekday() == Weekday::Sunday)
            .count();

        let mut substitutes = 0;
        let mut free = None;
        for d in Date::range_inclusive(run_start, last) {
            match table.get(d.into()) {
                Some(HolidayKind::SubstituteHoliday) => substitutes += 1,
                Some(_) => {}
                None => {
                    free = Some(d);
                    break;
                }
            }
        }

        if substitutes >= sundays {
            continue;
        }
        if let Some(sub) = free {
            tracing::trace!(date = %sub, sunday = %day, "substitute holiday");
            table.add_date(sub, HolidayKind::SubstituteHoliday);
        }
    }
    table
}

/// Turn every free day between two holidays into a citizens' holiday.
///
/// Scans January 2 through December 31; January 1 is always a holiday.
pub fn apply_citizens(mut table: HolidayTable) -> HolidayTable {
    let Some((first, last)) = year_bounds(table.year()) else {
        return table;
    };
    for day in Date::range_inclusive(first + 1, last) {
        if table.contains_date(day) {
            continue;
        }
        let before = day.pred().is_some_and(|d| table.contains_date(d));
        let after = day.succ().is_some_and(|d| table.contains_date(d));
        if before && after {
            tracing::trace!(date = %day, "citizens' holiday");
            table.add_date(day, HolidayKind::CitizensHoliday);
        }
    }
    table
}

fn year_bounds(year: u16) -> Option<(Date, Date)> {
    Some((Date::first_of_year(year).ok()?, Date::last_of_year(year).ok()?))
}
