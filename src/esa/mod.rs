//! Access to posts on esa.io.
//!
//! # Module Structure
//!
//! - `client`: blocking HTTP client for the esa v1 API
//! - `models`: response types
//! - `query`: per-date search queries
//!
//! # Example
//!
//! ```no_run
//! use esampo::esa::{EsaClient, PostSource, QuerySpec};
//! use esampo::filter::FilterSpec;
//! use chrono::NaiveDate;
//!
//! let client = EsaClient::new("https://api.esa.io", "access-token");
//! let query = QuerySpec::new(
//!     "myteam",
//!     "日報/%Y/%m/%d",
//!     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
//!     FilterSpec::ExcludeSelf { self_name: "alice".to_string() },
//! );
//! let posts = client.fetch_posts(&query)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod client;
pub mod models;
pub mod query;

use crate::errors::FetchError;

// Re-export commonly used types
pub use client::EsaClient;
pub use models::{Author, Post};
pub use query::{format_date, QuerySpec};

/// Trait defining where posts come from.
///
/// The orchestrator only depends on this trait, so tests can substitute a
/// canned source for the real API client.
///
/// # Examples
///
/// ```
/// use esampo::errors::FetchError;
/// use esampo::esa::{Post, PostSource, QuerySpec};
///
/// struct NoPosts;
///
/// impl PostSource for NoPosts {
///     fn fetch_posts(&self, _query: &QuerySpec) -> Result<Vec<Post>, FetchError> {
///         Ok(Vec::new())
///     }
/// }
/// ```
pub trait PostSource {
    /// Returns the posts matching `query`, in the order the service lists them.
    ///
    /// # Errors
    ///
    /// Implementations return a `FetchError` for transport, auth, or decoding
    /// failures. Callers do not retry.
    fn fetch_posts(&self, query: &QuerySpec) -> Result<Vec<Post>, FetchError>;
}
