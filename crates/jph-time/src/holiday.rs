//! `HolidayKind` — every holiday the engine can produce.
//!
//! Internally holidays are tracked by kind; callers of the lookup API only
//! ever see the Japanese display name returned by [`HolidayKind::name`].

/// A Japanese public holiday, statutory or derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HolidayKind {
    /// 元日 — January 1.
    NewYearsDay,
    /// 成人の日 — 2nd Monday of January.
    ComingOfAgeDay,
    /// 建国記念の日 — February 11.
    NationalFoundationDay,
    /// 天皇誕生日 — February 23 (from 2020).
    EmperorsBirthday,
    /// 春分の日 — March equinox.
    VernalEquinoxDay,
    /// 昭和の日 — April 29 (from 2007).
    ShowaDay,
    /// 憲法記念日 — May 3.
    ConstitutionMemorialDay,
    /// みどりの日 — April 29 before 2007, May 4 from 2007.
    GreeneryDay,
    /// こどもの日 — May 5.
    ChildrensDay,
    /// 海の日 — 3rd Monday of July.
    MarineDay,
    /// 山の日 — August 11 (from 2016).
    MountainDay,
    /// 敬老の日 — 3rd Monday of September.
    RespectForTheAgedDay,
    /// 秋分の日 — September equinox.
    AutumnalEquinoxDay,
    /// 体育の日 — 2nd Monday of October (until 2019).
    HealthAndSportsDay,
    /// スポーツの日 — 2nd Monday of October (from 2020).
    SportsDay,
    /// 文化の日 — November 3.
    CultureDay,
    /// 勤労感謝の日 — November 23.
    LabourThanksgivingDay,
    /// 即位の日 — May 1, 2019.
    EnthronementDay,
    /// 即位礼正殿の儀 — October 22, 2019.
    EnthronementCeremony,
    /// 振替休日 — first free day after a holiday falling on Sunday.
    SubstituteHoliday,
    /// 国民の休日 — day sandwiched between two holidays.
    CitizensHoliday,
}

impl HolidayKind {
    /// Japanese display name.
    pub fn name(&self) -> &'static str {
        match self {
            HolidayKind::NewYearsDay => "元日",
            HolidayKind::ComingOfAgeDay => "成人の日",
            HolidayKind::NationalFoundationDay => "建国記念の日",
            HolidayKind::EmperorsBirthday => "天皇誕生日",
            HolidayKind::VernalEquinoxDay => "春分の日",
            HolidayKind::ShowaDay => "昭和の日",
            HolidayKind::ConstitutionMemorialDay => "憲法記念日",
            HolidayKind::GreeneryDay => "みどりの日",
            HolidayKind::ChildrensDay => "こどもの日",
            HolidayKind::MarineDay => "海の日",
            HolidayKind::MountainDay => "山の日",
            HolidayKind::RespectForTheAgedDay => "敬老の日",
            HolidayKind::AutumnalEquinoxDay => "秋分の日",
            HolidayKind::HealthAndSportsDay => "体育の日",
            HolidayKind::SportsDay => "スポーツの日",
            HolidayKind::CultureDay => "文化の日",
            HolidayKind::LabourThanksgivingDay => "勤労感謝の日",
            HolidayKind::EnthronementDay => "即位の日",
            HolidayKind::EnthronementCeremony => "即位礼正殿の儀",
            HolidayKind::SubstituteHoliday => "振替休日",
            HolidayKind::CitizensHoliday => "国民の休日",
        }
    }

    /// English name.
    pub fn english_name(&self) -> &'static str {
        match self {
            HolidayKind::NewYearsDay => "New Year's Day",
            HolidayKind::ComingOfAgeDay => "Coming of Age Day",
            HolidayKind::NationalFoundationDay => "National Foundation Day",
            HolidayKind::EmperorsBirthday => "The Emperor's Birthday",
            HolidayKind::VernalEquinoxDay => "Vernal Equinox Day",
            HolidayKind::ShowaDay => "Showa Day",
            HolidayKind::ConstitutionMemorialDay => "Constitution Memorial Day",
            HolidayKind::GreeneryDay => "Greenery Day",
            HolidayKind::ChildrensDay => "Children's Day",
            HolidayKind::MarineDay => "Marine Day",
            HolidayKind::MountainDay => "Mountain Day",
            HolidayKind::RespectForTheAgedDay => "Respect for the Aged Day",
            HolidayKind::AutumnalEquinoxDay => "Autumnal Equinox Day",
            HolidayKind::HealthAndSportsDay => "Health and Sports Day",
            HolidayKind::SportsDay => "Sports Day",
            HolidayKind::CultureDay => "Culture Day",
            HolidayKind::LabourThanksgivingDay => "Labour Thanksgiving Day",
            HolidayKind::EnthronementDay => "Enthronement Day",
            HolidayKind::EnthronementCeremony => "Enthronement Ceremony",
            HolidayKind::SubstituteHoliday => "Substitute Holiday",
            HolidayKind::CitizensHoliday => "Citizens' Holiday",
        }
    }

    /// Return `true` for holidays implied by other holidays rather than
    /// named in the holiday law.
    pub fn is_derived(&self) -> bool {
        matches!(
            self,
            HolidayKind::SubstituteHoliday | HolidayKind::CitizensHoliday
        )
    }
}

impl std::fmt::Display for HolidayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(HolidayKind::SportsDay.name(), "スポーツの日");
        assert_eq!(HolidayKind::SportsDay.english_name(), "Sports Day");
        assert_eq!(HolidayKind::CitizensHoliday.english_name(), "Citizens' Holiday");
        assert_eq!(HolidayKind::SubstituteHoliday.to_string(), "振替休日");
    }

    #[test]
    fn derived_kinds() {
        assert!(HolidayKind::SubstituteHoliday.is_derived());
        assert!(HolidayKind::CitizensHoliday.is_derived());
        assert!(!HolidayKind::NewYearsDay.is_derived());
        assert!(!HolidayKind::EnthronementDay.is_derived());
    }
}
