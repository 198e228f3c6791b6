//! Day-of-week keys used to address the seven entries of a week plan.

use std::{fmt, str::FromStr};

use jiff::{civil::Weekday, Zoned};
use serde::{Deserialize, Serialize};

/// One of the seven fixed day codes (`sun` … `sat`).
///
/// Ordering follows declaration order, so a `BTreeMap<DayKey, _>` iterates
/// Sunday first, matching the week layout of the schedule screens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DayKey {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl DayKey {
    /// All day keys, Sunday first.
    pub const ALL: [DayKey; 7] = [
        DayKey::Sun,
        DayKey::Mon,
        DayKey::Tue,
        DayKey::Wed,
        DayKey::Thu,
        DayKey::Fri,
        DayKey::Sat,
    ];

    /// Wire code for the day.
    pub fn as_str(&self) -> &'static str {
        match self {
            DayKey::Sun => "sun",
            DayKey::Mon => "mon",
            DayKey::Tue => "tue",
            DayKey::Wed => "wed",
            DayKey::Thu => "thu",
            DayKey::Fri => "fri",
            DayKey::Sat => "sat",
        }
    }

    /// English name of the day.
    pub fn full_name(&self) -> &'static str {
        match self {
            DayKey::Sun => "Sunday",
            DayKey::Mon => "Monday",
            DayKey::Tue => "Tuesday",
            DayKey::Wed => "Wednesday",
            DayKey::Thu => "Thursday",
            DayKey::Fri => "Friday",
            DayKey::Sat => "Saturday",
        }
    }

    /// Single-letter label used on the day selector.
    pub fn label(&self) -> &'static str {
        &self.full_name()[..1]
    }

    /// Day key for the current date in the system time zone.
    pub fn today() -> Self {
        Zoned::now().weekday().into()
    }
}

impl From<Weekday> for DayKey {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sunday => DayKey::Sun,
            Weekday::Monday => DayKey::Mon,
            Weekday::Tuesday => DayKey::Tue,
            Weekday::Wednesday => DayKey::Wed,
            Weekday::Thursday => DayKey::Thu,
            Weekday::Friday => DayKey::Fri,
            Weekday::Saturday => DayKey::Sat,
        }
    }
}

impl FromStr for DayKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        DayKey::ALL
            .into_iter()
            .find(|day| day.as_str() == lower || day.full_name().to_lowercase() == lower)
            .ok_or_else(|| format!("Invalid day: {s}"))
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
