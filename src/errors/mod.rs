//! Error handling utilities for the esampo application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//! The collaborator-specific errors (`FetchError`, `OpenError`) are kept separate
//! so that the orchestrator can wrap them with the date or URL being processed.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

/// Represents failures while fetching posts from the esa API.
///
/// # Examples
///
/// ```
/// use esampo::errors::FetchError;
///
/// let error = FetchError::TeamNotFound("myteam".to_string());
/// assert!(format!("{}", error).contains("myteam"));
/// ```
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API could not be reached, or the connection failed mid-request.
    #[error("esa API request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The access token was rejected.
    #[error("esa API rejected the access token (HTTP {status}). Check access_token in your config file.")]
    Unauthorized {
        /// The HTTP status code returned (401 or 403)
        status: u16,
    },

    /// The configured team does not exist or is not visible to the token.
    #[error("Team '{0}' not found on esa. Check team_name in your config file.")]
    TeamNotFound(String),

    /// Any other non-success HTTP status.
    #[error("esa API returned HTTP {status}: {body}")]
    Status {
        /// The HTTP status code
        status: u16,
        /// The response body, as returned by the server
        body: String,
    },

    /// The search query could not be built.
    #[error("Could not build esa search query: {0}")]
    InvalidQuery(String),

    /// The response body could not be decoded.
    #[error("Invalid response from esa API: {0}")]
    InvalidResponse(String),
}

/// Represents failures while handing a URL to the browser.
#[derive(Debug, Error)]
pub enum OpenError {
    /// No browser could be launched for the URL.
    #[error("Failed to launch browser: {0}")]
    Launch(#[source] io::Error),

    /// Writing the URL to the dry-run output failed.
    #[error("Failed to write URL: {0}")]
    Write(#[source] io::Error),
}

/// Represents all possible errors that can occur in the esampo application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. Errors raised while processing a specific date
/// carry that date so the failing step can be identified from the message alone.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use esampo::errors::AppError;
///
/// let error = AppError::Config("team_name is empty".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: team_name is empty");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A date or month flag could not be parsed.
    #[error("Invalid date format for --{flag}: '{input}' (expected {expected})")]
    DateParse {
        /// The CLI flag the value came from
        flag: &'static str,
        /// The value as given by the user
        input: String,
        /// Description of the accepted formats
        expected: &'static str,
    },

    /// Fetching the posts for a date failed.
    #[error("Failed to fetch posts for {date}: {source}")]
    Fetch {
        /// The date being queried
        date: NaiveDate,
        /// The underlying fetch error
        #[source]
        source: FetchError,
    },

    /// Opening a post failed.
    #[error("Failed to open {url} (posts for {date}): {source}")]
    Open {
        /// The date whose posts were being opened
        date: NaiveDate,
        /// The URL that could not be opened
        url: String,
        /// The underlying open error
        #[source]
        source: OpenError,
    },
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;
