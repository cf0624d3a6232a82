//! High-level operations.
//!
//! This module provides the user-facing operation that ties date resolution,
//! the esa client, author filtering, and the browser together.

pub mod open;

// Re-export commonly used functions
pub use open::{open_posts_for_dates, run, OpenReport};
