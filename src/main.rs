// folio entrypoint.
// Initializes logging and dispatches the serve and show commands.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use folio::client::{PortfolioClient, render_profile};
use folio::config::{Cli, Command};
use folio::github::GitHubClient;
use folio::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => {
            let client = GitHubClient::with_base_url(args.token()?, &args.api_url)?;
            let state = AppState::new(client, args.user.clone(), args.cache_ttl());
            server::serve(args.bind, state).await?;
        }
        Command::Show(args) => {
            let client = PortfolioClient::new(&args.url)?;
            let stats = client.fetch_stats().await?;
            let projects = client.fetch_projects().await?;
            print!("{}", render_profile(&stats, &projects));
        }
    }

    Ok(())
}
