// Portfolio API consumer.
// Fetches the cached statistics the way the portfolio page does and renders
// them as plain text.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::error::{FolioError, Result};
use crate::projects::Project;
use crate::stats::AggregateResult;

/// How long the page waits for statistics before giving up.
pub const CLIENT_TIMEOUT: Duration = Duration::from_secs(30);

/// Response of `GET /api/git`, successful or not.
#[derive(Debug, Deserialize)]
struct StatsResponse {
    data: Option<AggregateResult>,
    error: Option<String>,
}

/// Client for a running portfolio server.
#[derive(Debug, Clone)]
pub struct PortfolioClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl PortfolioClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, CLIENT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FolioError::Api)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Fetch the aggregate statistics.
    ///
    /// Any response without `data` is an error carrying the server's message,
    /// whatever its status code.
    pub async fn fetch_stats(&self) -> Result<AggregateResult> {
        let url = format!("{}/api/git", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;
        let body: StatsResponse = response.json().await.map_err(|e| self.classify(e))?;

        match body.data {
            Some(data) => Ok(data),
            None => Err(FolioError::Portfolio(
                body.error.unwrap_or_else(|| "no data in response".to_string()),
            )),
        }
    }

    /// Fetch the featured project cards.
    pub async fn fetch_projects(&self) -> Result<Vec<Project>> {
        let url = format!("{}/api/projects", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify(e))?
            .error_for_status()?;
        let projects: Vec<Project> = response.json().await.map_err(|e| self.classify(e))?;
        Ok(projects)
    }

    fn classify(&self, err: reqwest::Error) -> FolioError {
        if err.is_timeout() {
            FolioError::Timeout(self.timeout)
        } else {
            FolioError::Api(err)
        }
    }
}

/// Render the profile, statistics, and project cards as plain text.
pub fn render_profile(stats: &AggregateResult, projects: &[Project]) -> String {
    let user = &stats.user;
    let mut out = String::new();

    out.push_str(user.name.as_deref().unwrap_or(&user.login));
    out.push('\n');
    if let Some(bio) = user.bio.as_deref().filter(|bio| !bio.is_empty()) {
        out.push_str(bio);
        out.push('\n');
    }

    out.push_str("\nGitHub Stats\n");
    let counters = [
        ("Public Repositories", user.public_repos),
        ("Followers", user.followers),
        ("Following", user.following),
        ("Total Stars", stats.total_stars),
        ("Open Issues", stats.total_issues),
        ("Pull Requests", stats.total_prs),
        ("Commits This Year", stats.total_commits_this_year),
        ("Commits (All Time)", stats.total_commits_all),
    ];
    for (label, value) in counters {
        out.push_str(&format!("  {:<20} {}\n", label, value));
    }

    if !stats.most_used_languages.is_empty() {
        out.push_str("\nMost Used Languages\n");
        for share in &stats.most_used_languages {
            out.push_str(&format!("  {:<20} {:.2}%\n", share.language, share.percentage));
        }
    }

    if !projects.is_empty() {
        out.push_str("\nProjects\n");
        for project in projects {
            let mut tags = Vec::new();
            if project.discontinued {
                tags.push("discontinued");
            }
            if !project.owned_by_me {
                tags.push("contributor");
            }
            let tags = if tags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", tags.join(", "))
            };

            out.push_str(&format!("  {}{}\n", project.title, tags));
            out.push_str(&format!("    {}\n", project.description));
            out.push_str(&format!("    {}\n", project.link));
            out.push_str(&format!("    {}\n", project.languages.join(", ")));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects;
    use crate::stats::LanguageShare;
    use serde_json::json;

    fn sample_stats() -> AggregateResult {
        AggregateResult {
            user: serde_json::from_value(json!({
                "login": "octo",
                "id": 1,
                "name": "Octo Cat",
                "bio": "Builds things.",
                "public_repos": 4,
                "followers": 10,
                "following": 2,
                "repos_url": "https://api.github.com/users/octo/repos"
            }))
            .unwrap(),
            most_used_languages: vec![LanguageShare {
                language: "Rust".to_string(),
                percentage: 100.0,
            }],
            total_stars: 12,
            total_issues: 3,
            total_prs: 5,
            total_commits_this_year: 7,
            total_commits_all: 30,
        }
    }

    #[test]
    fn test_render_profile() {
        let text = render_profile(&sample_stats(), &projects::featured());

        assert!(text.starts_with("Octo Cat\nBuilds things.\n"));
        assert!(text.contains("Total Stars          12"));
        assert!(text.contains("Rust                 100.00%"));
        assert!(text.contains("Urlcut [discontinued, contributor]"));
        assert!(text.contains("PhantomGuard\n"));
    }

    #[test]
    fn test_render_falls_back_to_login() {
        let mut stats = sample_stats();
        stats.user.name = None;
        stats.user.bio = None;
        stats.most_used_languages.clear();

        let text = render_profile(&stats, &[]);
        assert!(text.starts_with("octo\n\nGitHub Stats\n"));
        assert!(!text.contains("Most Used Languages"));
        assert!(!text.contains("Projects"));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = PortfolioClient::new("http://localhost:3000/").unwrap();
        assert_eq!(client.base_url, "http://localhost:3000");
        assert_eq!(client.timeout, CLIENT_TIMEOUT);
    }
}
