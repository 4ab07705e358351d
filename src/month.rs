//! Calendar month identity for game records.
//!
//! A month key is fixed on a record at creation time and stored verbatim in
//! the wire form `<year>-<3-letter month>` (e.g. `2025-Aug`). Keys compare by
//! calendar time, never by string value, so ordering holds across year
//! boundaries.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Identifies the calendar month a game belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// `month` is 1-based (January = 1).
    pub fn new(year: i32, month: u32) -> Result<Self, MonthKeyError> {
        if !(1..=12).contains(&month) {
            return Err(MonthKeyError::Malformed(format!("{}-{}", year, month)));
        }
        Ok(MonthKey { year, month })
    }

    /// The single derivation rule used both at record creation and for the
    /// "current month" comparison.
    pub fn from_date(date: NaiveDate) -> Self {
        MonthKey {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Full month name plus year, e.g. "August 2025".
    pub fn display_label(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month as usize - 1], self.year)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, MONTH_ABBREVS[self.month as usize - 1])
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, abbrev) = s
            .split_once('-')
            .ok_or_else(|| MonthKeyError::Malformed(s.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| MonthKeyError::Malformed(s.to_string()))?;
        let month = MONTH_ABBREVS
            .iter()
            .position(|a| *a == abbrev)
            .ok_or_else(|| MonthKeyError::UnknownMonth(abbrev.to_string()))? as u32
            + 1;
        Ok(MonthKey { year, month })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthKeyError {
    /// Not of the form `<year>-<3-letter month>`.
    Malformed(String),
    /// The month segment is not a recognized abbreviation.
    UnknownMonth(String),
}

impl fmt::Display for MonthKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthKeyError::Malformed(value) => {
                write!(f, "malformed month key {:?}, expected e.g. \"2025-Aug\"", value)
            }
            MonthKeyError::UnknownMonth(value) => {
                write!(f, "unknown month abbreviation {:?}", value)
            }
        }
    }
}

impl std::error::Error for MonthKeyError {}
