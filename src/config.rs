// Command-line and environment configuration.

use std::net::SocketAddr;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::error::{FolioError, Result};
use crate::github::GITHUB_API_BASE;

pub const DEFAULT_USER: &str = "Scarlot-Ruskipy";

#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(version, about = "Portfolio backend serving cached GitHub statistics", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the portfolio API
    Serve(ServeArgs),
    /// Fetch statistics from a running server and print them
    Show(ShowArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "FOLIO_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// GitHub login whose statistics are served
    #[arg(long, env = "FOLIO_GITHUB_USER", default_value = DEFAULT_USER)]
    pub user: String,

    /// GitHub REST API root
    #[arg(long, env = "GITHUB_API_URL", default_value = GITHUB_API_BASE)]
    pub api_url: String,

    /// Seconds a computed result stays fresh
    #[arg(long, env = "FOLIO_CACHE_TTL_SECS", default_value_t = 120)]
    pub cache_ttl_secs: u64,

    /// GitHub bearer token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

impl ServeArgs {
    pub fn token(&self) -> Result<&str> {
        self.token
            .as_deref()
            .filter(|token| !token.is_empty())
            .ok_or(FolioError::MissingToken)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Base URL of the portfolio server
    #[arg(long, env = "FOLIO_URL", default_value = "http://127.0.0.1:3000")]
    pub url: String,
}
