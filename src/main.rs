use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gitpulse::{Aggregator, AggregatorConfig, Config, EventContributionSource, GitHubClient};

#[derive(Parser, Debug)]
#[command(name = "gitpulse")]
#[command(version = "0.1.0")]
#[command(about = "Serve aggregated GitHub profile analytics over HTTP")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gitpulse=info".parse()?)
                .add_directive("reqwest=warn".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let config = Config::from_env()?;
    if config.github_token.is_none() {
        tracing::warn!("GITHUB_TOKEN not set, running with unauthenticated rate limits");
    }

    // Initialize the upstream client and the aggregator
    let github = Arc::new(GitHubClient::new(
        &config.api_base_url,
        config.github_token.as_deref(),
    )?);
    let contributions = EventContributionSource::new(github.clone(), config.events_page_size);
    let aggregator = Aggregator::new(github, contributions, AggregatorConfig::from(&config));

    gitpulse::web::serve(aggregator, args.port).await
}
