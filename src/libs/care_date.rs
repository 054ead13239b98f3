//! Local calendar date value type.
//!
//! All scheduling in frond works on calendar dates in the observer's local
//! timezone, never on instants. `CareDate` is the single type task dates,
//! watering dates, and calendar cells pass through, so a task scheduled for
//! "today" can never drift a day depending on the UTC offset.

use chrono::{Datelike, Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical text form used in the database, exports, and prompts.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A date with no time-of-day component, compared in local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CareDate(NaiveDate);

impl CareDate {
    /// The current calendar date in the local timezone.
    pub fn today() -> Self {
        CareDate(Local::now().date_naive())
    }

    pub fn new(date: NaiveDate) -> Self {
        CareDate(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(CareDate)
    }

    /// The date `days` days later, or `None` past chrono's calendar range.
    pub fn plus_days(&self, days: u32) -> Option<Self> {
        self.0.checked_add_days(Days::new(u64::from(days))).map(CareDate)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Weekday index with Sunday as 0, the calendar grid's week origin.
    pub fn weekday_from_sunday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    pub fn inner(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CareDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CareDate {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map(CareDate)
    }
}

impl From<NaiveDate> for CareDate {
    fn from(date: NaiveDate) -> Self {
        CareDate(date)
    }
}
