//! AddThis CLI - query the AddThis Analytics API from the command line.

mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use addthis_client::{AddthisClient, AddthisConfig};
use cli::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,addthis=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = cli.apply(AddthisConfig::from_env()?);
    tracing::info!(
        userid = %config.userid,
        pubid = ?config.pubid,
        base_url = %config.options.base_url,
        "Configuration loaded"
    );

    let client = AddthisClient::from_config(config)?;
    let result = client
        .metric(&cli.metric)
        .dimension(&cli.dimension)
        .params(cli.query())
        .send()
        .await?;

    let output = if cli.compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{output}");

    Ok(())
}
