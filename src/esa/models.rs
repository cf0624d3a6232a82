//! Response types for the esa posts endpoint.
//!
//! Only the fields esampo reads are modelled; serde ignores the rest.

use serde::Deserialize;

/// The author block embedded in a post.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Author {
    /// The author's esa screen name
    pub screen_name: String,
}

/// A post as returned by `GET /v1/teams/:team_name/posts`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Post {
    /// Post number within the team
    #[serde(default)]
    pub number: u64,
    /// Category path plus title
    #[serde(default)]
    pub full_name: String,
    /// Browser URL of the post
    pub url: String,
    /// Creation timestamp as sent by the API (ISO 8601 with offset)
    #[serde(default)]
    pub created_at: Option<String>,
    /// The post's author
    pub created_by: Author,
}

impl Post {
    /// Creates a post with only the fields the filter and opener use.
    pub fn new(url: impl Into<String>, author_screen_name: impl Into<String>) -> Self {
        Self {
            number: 0,
            full_name: String::new(),
            url: url.into(),
            created_at: None,
            created_by: Author {
                screen_name: author_screen_name.into(),
            },
        }
    }

    /// The screen name of the user who created the post.
    pub fn author_screen_name(&self) -> &str {
        &self.created_by.screen_name
    }
}

/// Body of the posts endpoint response.
#[derive(Debug, Deserialize)]
pub(crate) struct PostsResponse {
    pub posts: Vec<Post>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_posts_response_ignores_unknown_fields() {
        let body = r#"{
            "posts": [
                {
                    "number": 1,
                    "name": "hi!",
                    "full_name": "日報/2024/06/01/hi!",
                    "wip": false,
                    "url": "https://docs.esa.io/posts/1",
                    "created_at": "2024-06-01T18:05:00+09:00",
                    "created_by": {
                        "name": "Alice",
                        "screen_name": "alice",
                        "icon": "https://img.esa.io/uploads/icon.png"
                    }
                }
            ],
            "prev_page": null,
            "next_page": null,
            "total_count": 1
        }"#;

        let response: PostsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.posts.len(), 1);

        let post = &response.posts[0];
        assert_eq!(post.number, 1);
        assert_eq!(post.url, "https://docs.esa.io/posts/1");
        assert_eq!(post.author_screen_name(), "alice");
        assert_eq!(post.created_at.as_deref(), Some("2024-06-01T18:05:00+09:00"));
    }

    #[test]
    fn test_deserialize_post_without_optional_fields() {
        let body = r#"{"url": "https://docs.esa.io/posts/2", "created_by": {"screen_name": "bob"}}"#;
        let post: Post = serde_json::from_str(body).unwrap();
        assert_eq!(post, Post::new("https://docs.esa.io/posts/2", "bob"));
    }
}
