//! Integration tests for the open operation and the esa client.
//!
//! These tests drive `open_posts_for_dates` with scripted sources and a
//! recording browser to pin down ordering and fail-fast behavior, and run the
//! real `EsaClient` against a mock esa server.


use chrono::NaiveDate;
use esampo::browser::Browser;
use esampo::errors::{AppError, FetchError, OpenError};
use esampo::esa::{EsaClient, Post, PostSource, QuerySpec};
use esampo::filter::FilterSpec;
use esampo::ops::open_posts_for_dates;
use mockito::Matcher;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use test_helpers::posts_body;

/// Returns canned posts per date, or a failure for dates listed in `failing`.
#[derive(Default)]
struct ScriptedSource {
    posts: HashMap<NaiveDate, Vec<Post>>,
    failing: Vec<NaiveDate>,
    fetched: RefCell<Vec<NaiveDate>>,
}

impl PostSource for ScriptedSource {
    fn fetch_posts(&self, query: &QuerySpec) -> Result<Vec<Post>, FetchError> {
        self.fetched.borrow_mut().push(query.target_date);
        if self.failing.contains(&query.target_date) {
            return Err(FetchError::Status {
                status: 500,
                body: "boom".to_string(),
            });
        }
        Ok(self
            .posts
            .get(&query.target_date)
            .cloned()
            .unwrap_or_default())
    }
}

/// Records opened URLs; fails on URLs listed in `failing`.
#[derive(Default)]
struct RecordingBrowser {
    failing: Vec<String>,
    opened: RefCell<Vec<String>>,
}

impl Browser for RecordingBrowser {
    fn open_url(&self, url: &str) -> Result<(), OpenError> {
        if self.failing.iter().any(|u| u == url) {
            return Err(OpenError::Launch(io::Error::new(
                io::ErrorKind::NotFound,
                "no browser available",
            )));
        }
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}

fn exclude_alice() -> FilterSpec {
    FilterSpec::ExcludeSelf {
        self_name: "alice".to_string(),
    }
}

#[test]
fn test_opens_in_date_then_fetch_order() {
    let mut source = ScriptedSource::default();
    source.posts.insert(
        date(1),
        vec![Post::new("u1", "alice"), Post::new("u2", "bob")],
    );
    source.posts.insert(date(2), vec![Post::new("u3", "alice")]);
    let browser = RecordingBrowser::default();

    let report = open_posts_for_dates(
        &[date(1), date(2)],
        "myteam",
        "%Y/%m/%d",
        &exclude_alice(),
        &source,
        &browser,
    )
    .unwrap();

    assert_eq!(*browser.opened.borrow(), vec!["u2"]);
    assert_eq!(*source.fetched.borrow(), vec![date(1), date(2)]);
    assert_eq!(report.urls_opened, 1);
    assert_eq!(report.posts_skipped, 2);
}

#[test]
fn test_fetch_failure_aborts_remaining_dates() {
    let mut source = ScriptedSource::default();
    source.posts.insert(
        date(1),
        vec![Post::new("u1", "bob"), Post::new("u2", "carol")],
    );
    source.posts.insert(date(3), vec![Post::new("u3", "bob")]);
    source.failing.push(date(2));
    let browser = RecordingBrowser::default();

    let result = open_posts_for_dates(
        &[date(1), date(2), date(3)],
        "myteam",
        "%Y/%m/%d",
        &exclude_alice(),
        &source,
        &browser,
    );

    match result {
        Err(AppError::Fetch { date: failed, .. }) => assert_eq!(failed, date(2)),
        other => panic!("Expected AppError::Fetch, got {:?}", other),
    }
    // Day one was already opened; day three was never queried
    assert_eq!(*browser.opened.borrow(), vec!["u1", "u2"]);
    assert_eq!(*source.fetched.borrow(), vec![date(1), date(2)]);
}

#[test]
fn test_open_failure_aborts_remaining_posts() {
    let mut source = ScriptedSource::default();
    source.posts.insert(
        date(1),
        vec![
            Post::new("u1", "bob"),
            Post::new("u2", "carol"),
            Post::new("u3", "dave"),
        ],
    );
    source.posts.insert(date(2), vec![Post::new("u4", "bob")]);
    let browser = RecordingBrowser {
        failing: vec!["u2".to_string()],
        ..Default::default()
    };

    let result = open_posts_for_dates(
        &[date(1), date(2)],
        "myteam",
        "%Y/%m/%d",
        &exclude_alice(),
        &source,
        &browser,
    );

    match result {
        Err(AppError::Open { date: failed, url, .. }) => {
            assert_eq!(failed, date(1));
            assert_eq!(url, "u2");
        }
        other => panic!("Expected AppError::Open, got {:?}", other),
    }
    assert_eq!(*browser.opened.borrow(), vec!["u1"]);
    assert_eq!(*source.fetched.borrow(), vec![date(1)]);
}

#[test]
fn test_only_user_filter_applied_locally() {
    let mut source = ScriptedSource::default();
    source.posts.insert(
        date(1),
        vec![
            Post::new("u1", "alice"),
            Post::new("u2", "bob"),
            Post::new("u3", "bob"),
        ],
    );
    let browser = RecordingBrowser::default();

    open_posts_for_dates(
        &[date(1)],
        "myteam",
        "%Y/%m/%d",
        &FilterSpec::OnlyUser {
            user_name: "bob".to_string(),
        },
        &source,
        &browser,
    )
    .unwrap();

    assert_eq!(*browser.opened.borrow(), vec!["u2", "u3"]);
}

fn june_first_query() -> QuerySpec {
    QuerySpec::new("myteam", "日報/%Y/%m/%d", date(1), exclude_alice())
}

#[test]
fn test_esa_client_sends_query_and_token() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v1/teams/myteam/posts")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), r#"in:"日報/2024/06/01" -user:alice"#.into()),
            Matcher::UrlEncoded("per_page".into(), "100".into()),
        ]))
        .match_header("authorization", "Bearer secret")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(posts_body(&[
            ("https://myteam.esa.io/posts/1", "bob"),
            ("https://myteam.esa.io/posts/2", "carol"),
        ]))
        .create();

    let client = EsaClient::new(server.url(), "secret");
    let posts = client.fetch_posts(&june_first_query()).unwrap();

    mock.assert();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].url, "https://myteam.esa.io/posts/1");
    assert_eq!(posts[0].author_screen_name(), "bob");
    assert_eq!(posts[1].author_screen_name(), "carol");
}

#[test]
fn test_esa_client_maps_status_codes() {
    let cases: [(usize, fn(&FetchError) -> bool); 4] = [
        (401, |e| matches!(e, FetchError::Unauthorized { status: 401 })),
        (403, |e| matches!(e, FetchError::Unauthorized { status: 403 })),
        (404, |e| matches!(e, FetchError::TeamNotFound(team) if team == "myteam")),
        (500, |e| matches!(e, FetchError::Status { status: 500, .. })),
    ];

    for (status, check) in cases {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/v1/teams/myteam/posts")
            .match_query(Matcher::Any)
            .with_status(status)
            .with_body("{}")
            .create();

        let client = EsaClient::new(server.url(), "secret");
        let error = client.fetch_posts(&june_first_query()).unwrap_err();
        assert!(check(&error), "unexpected error for {}: {:?}", status, error);
    }
}

#[test]
fn test_esa_client_rejects_malformed_body() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/v1/teams/myteam/posts")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"posts": "not a list"}"#)
        .create();

    let client = EsaClient::new(server.url(), "secret");
    let error = client.fetch_posts(&june_first_query()).unwrap_err();
    assert!(matches!(error, FetchError::InvalidResponse(_)));
}

#[test]
fn test_esa_client_unreachable_server() {
    // Port 9 (discard) is not expected to have an HTTP server listening
    let client = EsaClient::new("http://127.0.0.1:9", "secret");
    let error = client.fetch_posts(&june_first_query()).unwrap_err();
    assert!(matches!(error, FetchError::Transport(_)));
}
