// Error types for folio.
// Covers GitHub API failures, portfolio client failures, and general errors.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: StatusCode, url: String },

    /// A non-success status on one of the aggregation's mandatory fetches.
    #[error("{context} (HTTP {status})")]
    Upstream {
        context: &'static str,
        status: StatusCode,
    },

    #[error("Missing GITHUB_TOKEN environment variable")]
    MissingToken,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Timeout after {} seconds.", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("{0}")]
    Portfolio(String),

    #[error("{0}")]
    Other(String),
}

impl FolioError {
    /// Tag a non-success HTTP status with the stage that produced it.
    /// Any other error passes through unchanged.
    pub fn upstream(self, context: &'static str) -> Self {
        match self {
            FolioError::Status { status, .. } => FolioError::Upstream { context, status },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
