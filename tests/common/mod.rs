// Shared fixtures for the end-to-end tests.
// A wiremock server stands in for GitHub; the app is served on an ephemeral port.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::{Datelike, Utc};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use folio::github::GitHubClient;
use folio::server::{self, AppState};

pub const LOGIN: &str = "octo";
pub const TOKEN: &str = "test-token";

/// Serve the app against `github` and return its base URL and state.
pub async fn spawn_app(github: &MockServer, ttl: Duration) -> (String, Arc<AppState>) {
    let client = GitHubClient::with_base_url(TOKEN, &github.uri()).unwrap();
    let state = Arc::new(AppState::new(client, LOGIN, ttl));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = server::router(Arc::clone(&state));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), state)
}

pub fn user_body(github: &MockServer) -> Value {
    json!({
        "login": LOGIN,
        "id": 42,
        "avatar_url": "https://avatars.githubusercontent.com/u/42",
        "html_url": "https://github.com/octo",
        "name": "Octo Cat",
        "company": null,
        "blog": "https://octo.dev",
        "location": "Internet",
        "email": null,
        "bio": "Writes code.",
        "public_repos": 2,
        "followers": 17,
        "following": 3,
        "repos_url": format!("{}/users/{}/repos", github.uri(), LOGIN),
        "type": "User"
    })
}

pub fn repo_body(github: &MockServer, name: &str, language: Option<&str>, stars: u64, issues: u64) -> Value {
    json!({
        "name": name,
        "full_name": format!("{}/{}", LOGIN, name),
        "url": format!("{}/repos/{}/{}", github.uri(), LOGIN, name),
        "language": language,
        "stargazers_count": stars,
        "open_issues_count": issues
    })
}

pub fn commit_body(date: &str) -> Value {
    json!({
        "sha": "0000000",
        "commit": { "author": { "name": "Octo Cat", "date": date } }
    })
}

pub fn this_year(month_day: &str) -> String {
    format!("{}-{}T12:00:00Z", Utc::now().year(), month_day)
}

pub async fn mount_user(github: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("/users/{}", LOGIN)))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body(github)))
        .mount(github)
        .await;
}

pub async fn mount_repos(github: &MockServer, repos: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/users/{}/repos", LOGIN)))
        .respond_with(ResponseTemplate::new(200).set_body_json(repos))
        .mount(github)
        .await;
}

pub async fn mount_pulls(github: &MockServer, repo: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{}/{}/pulls", LOGIN, repo)))
        .and(query_param("state", "all"))
        .respond_with(response)
        .mount(github)
        .await;
}

pub async fn mount_commits(github: &MockServer, repo: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{}/{}/commits", LOGIN, repo)))
        .respond_with(response)
        .mount(github)
        .await;
}

/// Two repositories: `alpha` (Rust, 2 PRs, 3 commits of which 2 this year)
/// and `beta` (no language, failing PR list, 1 commit this year).
pub async fn mount_portfolio(github: &MockServer) {
    mount_user(github).await;
    mount_repos(
        github,
        json!([
            repo_body(github, "alpha", Some("Rust"), 5, 1),
            repo_body(github, "beta", None, 2, 0),
        ]),
    )
    .await;

    mount_pulls(
        github,
        "alpha",
        ResponseTemplate::new(200).set_body_json(json!([{ "number": 1 }, { "number": 2 }])),
    )
    .await;
    mount_commits(
        github,
        "alpha",
        ResponseTemplate::new(200).set_body_json(json!([
            commit_body(&this_year("01-15")),
            commit_body(&this_year("02-20")),
            commit_body("2001-06-01T08:00:00Z"),
        ])),
    )
    .await;

    mount_pulls(github, "beta", ResponseTemplate::new(500)).await;
    mount_commits(
        github,
        "beta",
        ResponseTemplate::new(200).set_body_json(json!([commit_body(&this_year("03-01"))])),
    )
    .await;
}

pub async fn request_count(github: &MockServer) -> usize {
    github.received_requests().await.map(|r| r.len()).unwrap_or(0)
}
