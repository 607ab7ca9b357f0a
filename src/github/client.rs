// GitHub API HTTP client.
// Handles authentication, rate limit logging, and response status checks.

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::{debug, warn};

use crate::error::{FolioError, Result};

use super::types::RateLimit;

pub const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub API client with bearer authentication.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    /// Create a client against an API root, normally [`GITHUB_API_BASE`].
    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| FolioError::Other(e.to_string()))?,
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("folio"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(FolioError::Api)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request to an endpoint relative to the API root.
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        self.get_url(&url).await
    }

    /// Make a GET request to an absolute URL, as handed out by the API
    /// itself (`repos_url`, repository `url`).
    pub async fn get_url(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await.map_err(FolioError::Api)?;
        self.check_response(response)
    }

    /// Make a GET request to an absolute URL with query parameters.
    pub async fn get_url_with_params<T: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        params: &T,
    ) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(FolioError::Api)?;
        self.check_response(response)
    }

    /// Check response status and convert failures.
    fn check_response(&self, response: Response) -> Result<Response> {
        let rate_limit = RateLimit::from_headers(response.headers());
        let status = response.status();
        debug!(
            url = %response.url(),
            %status,
            remaining = ?rate_limit.remaining,
            "GitHub response"
        );

        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::FORBIDDEN && rate_limit.is_exhausted() {
            let reset_at = rate_limit
                .reset
                .and_then(|reset| chrono::DateTime::from_timestamp(reset as i64, 0))
                .map(|dt| dt.format("%H:%M:%S").to_string())
                .unwrap_or_else(|| "unknown".to_string());
            warn!(%reset_at, "GitHub rate limit exhausted");
        }

        Err(FolioError::Status {
            status,
            url: response.url().to_string(),
        })
    }
}
