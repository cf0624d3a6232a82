//! Open the posts published on a set of days.

use crate::browser::Browser;
use crate::config::Config;
use crate::dates::DateSpec;
use crate::errors::{AppError, AppResult};
use crate::esa::{PostSource, QuerySpec};
use crate::filter::FilterSpec;
use chrono::NaiveDate;
use tracing::{debug, info};

/// What a completed run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenReport {
    /// Days queried
    pub dates_queried: usize,
    /// Posts returned by the source, across all days
    pub posts_fetched: usize,
    /// Posts rejected by the author filter
    pub posts_skipped: usize,
    /// URLs handed to the browser
    pub urls_opened: usize,
}

/// Resolves `date_spec` against `today` and opens the qualifying posts.
///
/// This is the single entry point the binary calls once per execution.
///
/// # Errors
///
/// See [`open_posts_for_dates`].
pub fn run(
    date_spec: &DateSpec,
    filter: &FilterSpec,
    config: &Config,
    today: NaiveDate,
    source: &dyn PostSource,
    browser: &dyn Browser,
) -> AppResult<OpenReport> {
    let dates = date_spec.resolve_dates(today);
    info!("Resolved {} date(s) from {:?}", dates.len(), date_spec);

    open_posts_for_dates(
        &dates,
        &config.team_name,
        &config.path,
        filter,
        source,
        browser,
    )
}

/// Opens every post that passes `filter`, one day at a time.
///
/// # Flow
///
/// For each date, in the order given:
/// 1. Build the search query for that date
/// 2. Fetch the posts from `source`
/// 3. Hand each post accepted by `filter` to `browser`, in fetch order
///
/// # Errors
///
/// The first failure aborts the run; later dates are not queried and nothing
/// already opened is undone. Returns:
/// - `AppError::Config` if `date_format` cannot render a date
/// - `AppError::Fetch` if fetching a date's posts fails
/// - `AppError::Open` if a URL cannot be opened
pub fn open_posts_for_dates(
    dates: &[NaiveDate],
    team_name: &str,
    date_format: &str,
    filter: &FilterSpec,
    source: &dyn PostSource,
    browser: &dyn Browser,
) -> AppResult<OpenReport> {
    let mut report = OpenReport::default();

    for &date in dates {
        let query = QuerySpec::new(team_name, date_format, date, filter.clone());
        // Surface a bad pattern as a config problem rather than a fetch failure
        let category = query.category_path()?;
        debug!("Querying posts for {} in {}", date, category);

        let posts = source
            .fetch_posts(&query)
            .map_err(|source| AppError::Fetch { date, source })?;
        report.dates_queried += 1;
        report.posts_fetched += posts.len();

        for post in &posts {
            if !filter.accepts(post) {
                debug!("Skipping {} by {}", post.url, post.author_screen_name());
                report.posts_skipped += 1;
                continue;
            }

            browser
                .open_url(&post.url)
                .map_err(|source| AppError::Open {
                    date,
                    url: post.url.clone(),
                    source,
                })?;
            report.urls_opened += 1;
            info!("Opened {}", post.url);
        }
    }

    Ok(report)
}
