//! Search queries for the esa posts endpoint.

use crate::errors::{AppError, AppResult};
use crate::filter::FilterSpec;
use chrono::NaiveDate;
use std::fmt::Write;

/// One posts lookup: a team, a day, and the author filter for that day.
///
/// Built fresh for every resolved date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    /// The esa team to search
    pub team_name: String,
    /// strftime pattern that turns the target date into a category path
    pub date_format: String,
    /// The day whose posts are wanted
    pub target_date: NaiveDate,
    /// Author filter; also supplies the search hint
    pub author_filter: FilterSpec,
}

impl QuerySpec {
    /// Creates the query for one day.
    pub fn new(
        team_name: impl Into<String>,
        date_format: impl Into<String>,
        target_date: NaiveDate,
        author_filter: FilterSpec,
    ) -> Self {
        Self {
            team_name: team_name.into(),
            date_format: date_format.into(),
            target_date,
            author_filter,
        }
    }

    /// The target date rendered with the configured pattern.
    pub fn category_path(&self) -> AppResult<String> {
        format_date(self.target_date, &self.date_format)
    }

    /// The esa `q` parameter: `in:"<category path>" <author scope>`.
    ///
    /// The path is quoted so that spaces stay part of the category. Embedded
    /// double quotes are backslash-escaped.
    ///
    /// # Examples
    ///
    /// ```
    /// use esampo::esa::QuerySpec;
    /// use esampo::filter::FilterSpec;
    /// use chrono::NaiveDate;
    ///
    /// let query = QuerySpec::new(
    ///     "myteam",
    ///     "日報/%Y/%m/%d",
    ///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    ///     FilterSpec::OnlyUser { user_name: "bob".to_string() },
    /// );
    /// assert_eq!(query.search_query().unwrap(), r#"in:"日報/2024/06/01" user:bob"#);
    /// ```
    pub fn search_query(&self) -> AppResult<String> {
        let path = self.category_path()?.replace('"', "\\\"");
        Ok(format!(
            "in:\"{}\" {}",
            path,
            self.author_filter.author_scope()
        ))
    }
}

/// Renders `date` with a strftime-style pattern.
///
/// # Errors
///
/// Returns `AppError::Config` if the pattern contains an unknown specifier or
/// asks for fields a calendar date does not have (e.g. `%H`).
pub fn format_date(date: NaiveDate, pattern: &str) -> AppResult<String> {
    let mut rendered = String::new();
    write!(rendered, "{}", date.format(pattern)).map_err(|_| {
        AppError::Config(format!("Invalid date format pattern in path: '{}'", pattern))
    })?;
    Ok(rendered)
}
