//! Command-line arguments.

use clap::Parser;

use addthis_client::{AddthisConfig, QueryParams};

/// Query the AddThis Analytics API.
///
/// Credentials are read from `.secrets/addthis.json` or from the
/// `ADDTHIS_USERID`, `ADDTHIS_PASSWORD` and `ADDTHIS_PUBID` environment variables.
#[derive(Debug, Parser)]
#[command(name = "addthis", version, about)]
pub struct Cli {
    /// Metric to query, e.g. `shares`.
    pub metric: String,

    /// Dimension to group by, e.g. `day`.
    pub dimension: String,

    /// Publisher profile to query.
    #[arg(long)]
    pub pubid: Option<String>,

    /// Extra query parameter, repeatable.
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    /// Override the API endpoint root.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print JSON on a single line.
    #[arg(long)]
    pub compact: bool,
}

impl Cli {
    /// Apply command-line overrides to a loaded configuration.
    #[must_use]
    pub fn apply(&self, mut config: AddthisConfig) -> AddthisConfig {
        if let Some(ref pubid) = self.pubid {
            config.pubid = Some(pubid.clone());
        }
        if let Some(ref base_url) = self.base_url {
            config.options.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.options.timeout_seconds = timeout;
        }
        config
    }

    /// Query parameters given with `--param`.
    #[must_use]
    pub fn query(&self) -> QueryParams {
        self.params.iter().cloned().collect()
    }
}

/// Parse a `KEY=VALUE` pair.
fn parse_param(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))?;
    if key.is_empty() {
        return Err(format!("empty key in `{s}`"));
    }
    Ok((key.to_string(), value.to_string()))
}
