//! esa HTTP client for listing posts.
//!
//! This module provides a simple blocking client for the esa v1 API. Only the
//! first page of results is requested.

use super::models::{Post, PostsResponse};
use super::query::QuerySpec;
use super::PostSource;
use crate::constants::POSTS_PER_PAGE;
use crate::errors::FetchError;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::fmt;
use tracing::debug;

/// Client for the esa API.
pub struct EsaClient {
    base_url: String,
    access_token: String,
    client: Client,
}

impl fmt::Debug for EsaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EsaClient")
            .field("base_url", &self.base_url)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

impl EsaClient {
    /// Creates a new esa client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the esa API (e.g., "https://api.esa.io")
    /// * `access_token` - Personal access token with read scope
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            client: Client::new(),
        }
    }
}

impl PostSource for EsaClient {
    /// Lists the posts matching `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The API is not reachable
    /// - The token is rejected (401/403) or the team is unknown (404)
    /// - The API returns any other error status or an undecodable body
    fn fetch_posts(&self, query: &QuerySpec) -> Result<Vec<Post>, FetchError> {
        let q = query
            .search_query()
            .map_err(|e| FetchError::InvalidQuery(e.to_string()))?;
        let per_page = POSTS_PER_PAGE.to_string();
        let url = format!("{}/v1/teams/{}/posts", self.base_url, query.team_name);
        debug!("Fetching posts from {} with q={}", url, q);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[("q", q.as_str()), ("per_page", per_page.as_str())])
            .send()
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => FetchError::Unauthorized {
                    status: status.as_u16(),
                },
                StatusCode::NOT_FOUND => FetchError::TeamNotFound(query.team_name.clone()),
                _ => FetchError::Status {
                    status: status.as_u16(),
                    body: response.text().unwrap_or_default(),
                },
            });
        }

        let posts_response: PostsResponse = response.json().map_err(|e| {
            FetchError::InvalidResponse(format!("Failed to parse posts response: {}", e))
        })?;

        debug!("Received {} posts", posts_response.posts.len());
        Ok(posts_response.posts)
    }
}
