//! # Month Module
//!
//! Helpers for the `YYYY-MM` month strings the picker is driven by.
//!
//! The picker never rejects its inputs: display helpers such as
//! [`display_year`] and [`is_selected_month`] work on raw strings and degrade
//! quietly when the value is malformed. [`YearMonth`] is the strict form, used
//! by hosts that need to build or validate a range.

use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Year shown when a date string is empty
pub const FALLBACK_YEAR: &str = "2024";

/// Short month labels in grid order
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr",
    "May", "Jun", "Jul", "Aug",
    "Sep", "Oct", "Nov", "Dec",
];

/// Year to display for a `YYYY-MM` string.
///
/// Returns the first four characters of `date` (fewer if the string is
/// shorter), or [`FALLBACK_YEAR`] when `date` is empty.
pub fn display_year(date: &str) -> &str {
    if date.is_empty() {
        return FALLBACK_YEAR;
    }

    match date.char_indices().nth(4) {
        Some((byte_index, _)) => &date[..byte_index],
        None => date,
    }
}

/// Whether `date` falls in the month at `month_index` (0 = January).
///
/// This is a plain suffix match against `-MM`, so any string ending in the
/// right month suffix counts as selected.
pub fn is_selected_month(date: &str, month_index: usize) -> bool {
    date.ends_with(&month_suffix(month_index))
}

fn month_suffix(month_index: usize) -> String {
    format!("-{:02}", month_index + 1)
}

/// Errors produced when parsing a strict `YYYY-MM` value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthParseError {
    #[error("expected YYYY-MM, got {0:?}")]
    InvalidFormat(String),
    #[error("invalid year in {0:?}")]
    InvalidYear(String),
    #[error("month {0} is out of range (1-12)")]
    MonthOutOfRange(u32),
}

/// A calendar month, written as `YYYY-MM`.
///
/// Only built through [`YearMonth::new`] or parsing, so `month` is always 1-12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    /// 1-based month number
    month: u32,
}

impl YearMonth {
    /// Build a month, rejecting month numbers outside 1-12
    pub fn new(year: i32, month: u32) -> Result<Self, MonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }

    pub fn year(self) -> i32 {
        self.year
    }

    /// 1-based month number
    pub fn month(self) -> u32 {
        self.month
    }

    /// The month containing today's local date
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// January of the same year
    pub fn start_of_year(self) -> Self {
        Self { year: self.year, month: 1 }
    }

    /// Zero-based index into [`MONTH_LABELS`]
    pub fn month_index(self) -> usize {
        (self.month - 1) as usize
    }

    /// Short label for this month, e.g. "Mar"
    pub fn label(self) -> &'static str {
        MONTH_LABELS[self.month_index()]
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year_part, month_part) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        if year_part.len() != 4 || month_part.len() != 2 {
            return Err(MonthParseError::InvalidFormat(s.to_string()));
        }

        let year = year_part
            .parse::<i32>()
            .map_err(|_| MonthParseError::InvalidYear(s.to_string()))?;
        let month = month_part
            .parse::<u32>()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = MonthParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}
