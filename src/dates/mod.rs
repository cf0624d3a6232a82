//! Date range resolution without I/O operations.
//!
//! This module contains pure logic for turning the date-related CLI flags into
//! the ordered list of calendar days whose posts should be opened. It provides
//! the `DateSpec` enum for the three ways of selecting days without any network
//! or filesystem access.

use crate::constants::{
    DATE_FORMAT_COMPACT, DATE_FORMAT_HINT, DATE_FORMAT_ISO, MONTH_FORMAT_HINT,
};
use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, NaiveDate};

/// Represents the different ways of selecting the days to query.
///
/// Exactly one form is active per invocation. When several flags are given,
/// `DateSpec::from_cli_args` picks one by precedence: an explicit start/end
/// range, then a month, then the day offset.
///
/// # Examples
///
/// ```
/// use esampo::dates::DateSpec;
/// use chrono::NaiveDate;
///
/// // Yesterday
/// let offset = DateSpec::Offset { days: 1 };
///
/// // An inclusive range
/// let range = DateSpec::Range {
///     start: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     end: NaiveDate::from_ymd_opt(2024, 6, 7).unwrap(),
/// };
///
/// // Every day of February 2024
/// let month = DateSpec::Month { year: 2024, month: 2 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSpec {
    /// A single day, `days` before today.
    ///
    /// The count is non-negative; the resolver subtracts it from today.
    Offset {
        /// How many days to go back from today (0 is today)
        days: u32,
    },

    /// Every day from `start` to `end`, both inclusive.
    ///
    /// If `start` is after `end` the range resolves to no days at all.
    Range {
        /// First day of the range
        start: NaiveDate,
        /// Last day of the range
        end: NaiveDate,
    },

    /// Every day of a calendar month.
    Month {
        /// The year of the month
        year: i32,
        /// The month number, 1 through 12
        month: u32,
    },
}

impl DateSpec {
    /// Creates a DateSpec from command-line arguments.
    ///
    /// Empty strings are treated the same as absent flags. Precedence:
    ///
    /// 1. `start` and `end`, if both are present
    /// 2. `month`, if present
    /// 3. `before_day_number` otherwise
    ///
    /// A lone `start` or `end` is not enough to select a range and falls
    /// through to the next rule.
    ///
    /// # Errors
    ///
    /// Returns `AppError::DateParse` if the selected start/end or month string
    /// is malformed. Values of flags that lose on precedence are not parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use esampo::dates::DateSpec;
    ///
    /// let spec = DateSpec::from_cli_args(1, None, None, None).unwrap();
    /// assert_eq!(spec, DateSpec::Offset { days: 1 });
    ///
    /// let spec = DateSpec::from_cli_args(1, None, None, Some("2024-02")).unwrap();
    /// assert_eq!(spec, DateSpec::Month { year: 2024, month: 2 });
    /// ```
    pub fn from_cli_args(
        before_day_number: u32,
        start: Option<&str>,
        end: Option<&str>,
        month: Option<&str>,
    ) -> AppResult<Self> {
        let start = start.filter(|s| !s.is_empty());
        let end = end.filter(|s| !s.is_empty());
        let month = month.filter(|s| !s.is_empty());

        if let (Some(start), Some(end)) = (start, end) {
            return Ok(DateSpec::Range {
                start: parse_date_string("start", start)?,
                end: parse_date_string("end", end)?,
            });
        }

        if let Some(month) = month {
            let first = parse_month_string(month)?;
            return Ok(DateSpec::Month {
                year: first.year(),
                month: first.month(),
            });
        }

        Ok(DateSpec::Offset {
            days: before_day_number,
        })
    }

    /// Gets the days selected by this spec, in ascending order.
    ///
    /// - For Offset: returns the single day `days` before `today`
    /// - For Range: returns every day from start to end inclusive, or nothing if start > end
    /// - For Month: returns every day from the 1st to the last day of the month
    ///
    /// Days that fall outside chrono's representable range are dropped, so an
    /// absurd offset resolves to an empty list rather than panicking.
    ///
    /// # Examples
    ///
    /// ```
    /// use esampo::dates::DateSpec;
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    ///
    /// let dates = DateSpec::Offset { days: 1 }.resolve_dates(today);
    /// assert_eq!(dates, vec![NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()]);
    ///
    /// let dates = DateSpec::Month { year: 2024, month: 2 }.resolve_dates(today);
    /// assert_eq!(dates.len(), 29);
    /// ```
    pub fn resolve_dates(&self, today: NaiveDate) -> Vec<NaiveDate> {
        match *self {
            DateSpec::Offset { days } => today
                .checked_sub_days(Days::new(u64::from(days)))
                .into_iter()
                .collect(),
            DateSpec::Range { start, end } => days_between(start, end),
            DateSpec::Month { year, month } => match month_bounds(year, month) {
                Some((first, last)) => days_between(first, last),
                None => Vec::new(),
            },
        }
    }
}

/// Every day from `start` to `end` inclusive; empty when `start > end`.
fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|date| *date <= end).collect()
}

/// First and last day of a month. The last day is the first of the next month
/// minus one day, with December rolling over into January.
fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
    Some((first, last))
}

/// Parse a date string in YYYY-MM-DD or YYYYMMDD format
fn parse_date_string(flag: &'static str, input: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT_ISO)
        .or_else(|_| NaiveDate::parse_from_str(input, DATE_FORMAT_COMPACT))
        .map_err(|_| AppError::DateParse {
            flag,
            input: input.to_string(),
            expected: DATE_FORMAT_HINT,
        })
}

/// Parse a month string in YYYY-MM or YYYYMM format into the month's first day
fn parse_month_string(input: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", input), DATE_FORMAT_ISO)
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}01", input), DATE_FORMAT_COMPACT))
        .map_err(|_| AppError::DateParse {
            flag: "month",
            input: input.to_string(),
            expected: MONTH_FORMAT_HINT,
        })
}
