// Application state shared across handlers.
// One GitHub client and one statistics cache per process.

use std::time::Duration;

use crate::cache::RefreshCache;
use crate::github::GitHubClient;
use crate::stats::AggregateResult;

/// Application state shared across all handlers.
#[derive(Debug)]
pub struct AppState {
    pub client: GitHubClient,
    /// GitHub login whose statistics are served.
    pub user: String,
    pub cache: RefreshCache<AggregateResult>,
}

impl AppState {
    pub fn new(client: GitHubClient, user: impl Into<String>, ttl: Duration) -> Self {
        Self {
            client,
            user: user.into(),
            cache: RefreshCache::new(ttl),
        }
    }
}
