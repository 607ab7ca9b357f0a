// GitHub API endpoint functions.
// Only the first page of every list is consulted; there is no pagination.

use crate::error::Result;

use super::client::GitHubClient;
use super::types::{Commit, PullRequest, Repository, UserProfile};

impl GitHubClient {
    /// Get a user's public profile.
    pub async fn get_user(&self, login: &str) -> Result<UserProfile> {
        let response = self.get(&format!("/users/{}", login)).await?;
        let user: UserProfile = response.json().await?;
        Ok(user)
    }

    /// Get the repositories listed at a profile's `repos_url`.
    pub async fn get_repos(&self, repos_url: &str) -> Result<Vec<Repository>> {
        let response = self.get_url(repos_url).await?;
        let repos: Vec<Repository> = response.json().await?;
        Ok(repos)
    }

    /// Get pull requests of a repository in any state.
    pub async fn get_pulls(&self, repo: &Repository) -> Result<Vec<PullRequest>> {
        let response = self
            .get_url_with_params(&format!("{}/pulls", repo.url), &[("state", "all")])
            .await?;
        let pulls: Vec<PullRequest> = response.json().await?;
        Ok(pulls)
    }

    /// Get commits on a repository's default branch.
    pub async fn get_commits(&self, repo: &Repository) -> Result<Vec<Commit>> {
        let response = self.get_url(&format!("{}/commits", repo.url)).await?;
        let commits: Vec<Commit> = response.json().await?;
        Ok(commits)
    }
}
