// Aggregation of a GitHub user's repositories into portfolio statistics.
// Costs 2 + 2×R upstream calls for R repositories.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{FolioError, Result};
use crate::github::{Commit, GitHubClient, Repository, UserProfile};

use super::languages::{LanguageShare, language_shares};

pub const USER_FETCH_FAILED: &str = "Failed to fetch GitHub user";
pub const REPOS_FETCH_FAILED: &str = "Failed to fetch repositories";

/// Statistics computed from a user's profile and repositories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub user: UserProfile,
    pub most_used_languages: Vec<LanguageShare>,
    pub total_stars: u64,
    pub total_issues: u64,
    #[serde(rename = "totalPRs")]
    pub total_prs: u64,
    pub total_commits_this_year: u64,
    pub total_commits_all: u64,
}

/// Running totals over the repository scan.
#[derive(Debug, Default)]
struct Totals {
    stars: u64,
    issues: u64,
    prs: u64,
    commits_this_year: u64,
    commits_all: u64,
}

/// Count commits authored in the given calendar year (UTC).
pub fn commits_in_year(commits: &[Commit], year: i32) -> u64 {
    commits
        .iter()
        .filter(|commit| commit.authored_at().is_some_and(|date| date.year() == year))
        .count() as u64
}

/// Fetch a user's profile and repositories and compute the statistics.
///
/// The profile and repository list are mandatory: a non-success status on
/// either fails with [`FolioError::Upstream`]. Per-repository pull request
/// and commit lists that come back with a non-success status are skipped.
pub async fn aggregate(
    client: &GitHubClient,
    login: &str,
    now: DateTime<Utc>,
) -> Result<AggregateResult> {
    let user = client
        .get_user(login)
        .await
        .map_err(|e| e.upstream(USER_FETCH_FAILED))?;

    let repos = client
        .get_repos(&user.repos_url)
        .await
        .map_err(|e| e.upstream(REPOS_FETCH_FAILED))?;

    info!(login, repos = repos.len(), "aggregating GitHub statistics");

    let year = now.year();
    let mut totals = Totals::default();
    let mut languages: HashMap<String, u64> = HashMap::new();

    for repo in &repos {
        if let Some(language) = repo.known_language() {
            *languages.entry(language.to_string()).or_default() += 1;
        }

        totals.stars += repo.stargazers_count;
        totals.issues += repo.open_issues_count;

        let (pulls, commits) = tokio::join!(client.get_pulls(repo), client.get_commits(repo));

        if let Some(pulls) = skip_status(pulls, "pull requests", repo)? {
            totals.prs += pulls.len() as u64;
        }

        if let Some(commits) = skip_status(commits, "commits", repo)? {
            totals.commits_all += commits.len() as u64;
            totals.commits_this_year += commits_in_year(&commits, year);
        }
    }

    Ok(AggregateResult {
        user,
        most_used_languages: language_shares(&languages),
        total_stars: totals.stars,
        total_issues: totals.issues,
        total_prs: totals.prs,
        total_commits_this_year: totals.commits_this_year,
        total_commits_all: totals.commits_all,
    })
}

/// Treat a non-success status as "no data" and propagate anything else.
fn skip_status<T>(result: Result<T>, what: &str, repo: &Repository) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(FolioError::Status { status, .. }) => {
            debug!(repo = %repo.name, %status, "skipping {}", what);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
