//! `Weekday` — day-of-week enum.

/// Day of the week.
///
/// Variants are numbered ISO-style, 1–7 with Monday = 1 and Sunday = 7.
/// Calendar grids that start on Sunday use the alternative numbering
/// returned by [`sunday_based`](Self::sunday_based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// Construct from the ISO ordinal (1 = Monday … 7 = Sunday).
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Construct from the Sunday-first numbering (1 = Sunday … 7 = Saturday).
    pub fn from_sunday_based(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Sunday),
            2..=7 => Self::from_ordinal(n - 1),
            _ => None,
        }
    }

    /// Return the ISO ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Return the Sunday-first number (1 = Sunday … 7 = Saturday).
    pub fn sunday_based(&self) -> u8 {
        self.ordinal() % 7 + 1
    }

    /// Return `true` if this is Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    /// Japanese single-character name (`"月"`, `"火"`, …).
    pub fn japanese_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "月",
            Weekday::Tuesday => "火",
            Weekday::Wednesday => "水",
            Weekday::Thursday => "木",
            Weekday::Friday => "金",
            Weekday::Saturday => "土",
            Weekday::Sunday => "日",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(w: chrono::Weekday) -> Self {
        match w {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn japanese_names() {
        assert_eq!(Weekday::Monday.japanese_name(), "月");
        assert_eq!(Weekday::Saturday.japanese_name(), "土");
        assert_eq!(Weekday::Sunday.japanese_name(), "日");
    }

    #[test]
    fn sunday_based_numbering() {
        assert_eq!(Weekday::Sunday.sunday_based(), 1);
        assert_eq!(Weekday::Monday.sunday_based(), 2);
        assert_eq!(Weekday::Saturday.sunday_based(), 7);
        for n in 1..=7u8 {
            let w = Weekday::from_sunday_based(n).unwrap();
            assert_eq!(w.sunday_based(), n);
        }
        assert!(Weekday::from_sunday_based(0).is_none());
        assert!(Weekday::from_sunday_based(8).is_none());
    }

    #[test]
    fn chrono_conversion() {
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
        assert_eq!(Weekday::from(chrono::Weekday::Mon).ordinal(), 1);
    }
}
