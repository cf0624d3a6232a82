//! Author filtering for fetched posts.
//!
//! A `FilterSpec` does two jobs: it supplies the author-scoping hint that is
//! added to the esa search query, and it is the predicate that decides locally
//! whether a fetched post gets opened. The server-side hint only narrows the
//! result set; `accepts` is always applied to what comes back.

use crate::esa::Post;

/// Which posts qualify for opening, by author.
///
/// # Examples
///
/// ```
/// use esampo::filter::FilterSpec;
///
/// let filter = FilterSpec::from_cli_args(None, "alice");
/// assert_eq!(filter, FilterSpec::ExcludeSelf { self_name: "alice".to_string() });
///
/// let filter = FilterSpec::from_cli_args(Some("bob"), "alice");
/// assert_eq!(filter, FilterSpec::OnlyUser { user_name: "bob".to_string() });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSpec {
    /// Every post except those written by the current user.
    ExcludeSelf {
        /// The current user's esa screen name
        self_name: String,
    },

    /// Only posts written by one user.
    OnlyUser {
        /// The esa screen name whose posts are wanted
        user_name: String,
    },
}

impl FilterSpec {
    /// Builds the filter from the `--user` flag and the configured screen name.
    ///
    /// An empty `--user` value counts as absent.
    pub fn from_cli_args(user: Option<&str>, my_screen_name: &str) -> Self {
        match user.filter(|name| !name.is_empty()) {
            Some(user_name) => FilterSpec::OnlyUser {
                user_name: user_name.to_string(),
            },
            None => FilterSpec::ExcludeSelf {
                self_name: my_screen_name.to_string(),
            },
        }
    }

    /// Returns true if `post` should be opened.
    pub fn accepts(&self, post: &Post) -> bool {
        match self {
            FilterSpec::ExcludeSelf { self_name } => post.author_screen_name() != self_name,
            FilterSpec::OnlyUser { user_name } => post.author_screen_name() == user_name,
        }
    }

    /// The esa search fragment used as a server-side pre-filter.
    pub fn author_scope(&self) -> String {
        match self {
            FilterSpec::ExcludeSelf { self_name } => format!("-user:{}", self_name),
            FilterSpec::OnlyUser { user_name } => format!("user:{}", user_name),
        }
    }
}
