// GitHub API response types.
// Defines structs for deserializing GitHub REST API responses.

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// GitHub user profile.
///
/// The fields the portfolio reads are typed; everything else the API returns
/// is kept in `extra` so the profile is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub id: u64,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
    pub name: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    pub repos_url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// GitHub repository, reduced to what the statistics need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    #[serde(default)]
    pub name: String,
    /// API URL of the repository, the root for `/pulls` and `/commits`.
    pub url: String,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
}

impl Repository {
    /// Primary language, treating an empty string as unknown.
    pub fn known_language(&self) -> Option<&str> {
        self.language.as_deref().filter(|language| !language.is_empty())
    }
}

/// Pull request list item. Only counted, never inspected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
}

/// Commit list item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    pub commit: CommitDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDetail {
    pub author: Option<GitSignature>,
}

/// Git author/committer signature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitSignature {
    pub date: Option<DateTime<Utc>>,
}

impl Commit {
    pub fn authored_at(&self) -> Option<DateTime<Utc>> {
        self.commit.author.as_ref().and_then(|author| author.date)
    }
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimit {
    pub remaining: Option<u64>,
    pub reset: Option<u64>,
}

impl RateLimit {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let read = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
        };

        Self {
            remaining: read("x-ratelimit-remaining"),
            reset: read("x-ratelimit-reset"),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }
}
