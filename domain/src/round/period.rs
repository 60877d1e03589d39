//! ISO-8601 week identifiers

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a playing period: an ISO-8601 week such as `2025-W10`.
///
/// Weeks run Monday to Sunday and week 1 is the week containing the year's
/// first Thursday, so the year part is the ISO week-year and may differ from
/// the calendar year around New Year.
///
/// # Example
///
/// ```
/// use arena_domain::PeriodId;
/// use chrono::{TimeZone, Utc};
///
/// let now = Utc.with_ymd_and_hms(2025, 3, 5, 12, 0, 0).unwrap();
/// assert_eq!(PeriodId::from_datetime(&now).as_str(), "2025-W10");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodId(String);

impl PeriodId {
    /// Derive the period containing `now`.
    pub fn from_datetime(now: &DateTime<Utc>) -> Self {
        let week = now.iso_week();
        Self(format!("{}-W{:02}", week.year(), week.week()))
    }

    /// The empty period, used before any round has been opened.
    pub fn unplayed() -> Self {
        Self::default()
    }

    pub fn is_unplayed(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PeriodId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unplayed() {
            write!(f, "(none)")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl std::str::FromStr for PeriodId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, week) = s
            .split_once("-W")
            .ok_or_else(|| format!("Invalid period '{}': expected YYYY-Www", s))?;
        let year: i32 = year
            .parse()
            .map_err(|_| format!("Invalid year in period '{}'", s))?;
        if week.len() != 2 {
            return Err(format!("Week in period '{}' must be two digits", s));
        }
        let week: u32 = week
            .parse()
            .map_err(|_| format!("Invalid week in period '{}'", s))?;
        if !(1..=53).contains(&week) {
            return Err(format!("Week {} out of range 1-53", week));
        }
        Ok(Self(format!("{}-W{:02}", year, week)))
    }
}
