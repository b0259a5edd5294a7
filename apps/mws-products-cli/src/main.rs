//! MWS Products CLI - signed queries against the Amazon MWS Products API.
//!
//! Runs one Products operation and writes the raw XML response body to
//! stdout. The HTTP status is logged; a non-2xx status exits with code 1.
//!
//! # Usage
//!
//! ```text
//! mws-products competitive-pricing --asins B000123456,B000654321
//! mws-products --marketplace DE lowest-priced-offers --asin B000123456 --condition Used
//! ```
//!
//! # Environment Variables
//!
//! A `.env` file in the working directory is loaded first, if present.
//! Command-line flags take precedence over the environment.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MWS_ACCESS_KEY_ID` | *(required)* | AWS access key id |
//! | `MWS_SECRET_KEY` | *(required)* | AWS secret key |
//! | `MWS_SELLER_ID` | *(required)* | Seller (merchant) id |
//! | `MWS_AUTH_TOKEN` | *(unset)* | Delegated-access token |
//! | `MWS_MARKETPLACE` | `US` | Region code or marketplace id |
//! | `MWS_HOST` | *(from marketplace)* | Endpoint host override |
//! | `MWS_TIMEOUT_SECS` | `30` | Request timeout |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod cli;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

/// Outcome of loading the `.env` file.
#[derive(Debug)]
enum EnvFile {
    Loaded(PathBuf),
    Missing,
    Invalid(dotenvy::Error),
}

impl From<Result<PathBuf, dotenvy::Error>> for EnvFile {
    fn from(result: Result<PathBuf, dotenvy::Error>) -> Self {
        match result {
            Ok(path) => Self::Loaded(path),
            Err(e) if e.not_found() => Self::Missing,
            Err(e) => Self::Invalid(e),
        }
    }
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` value.
/// Logs go to stderr so stdout carries only the response body.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let env_file = EnvFile::from(dotenvy::dotenv());

    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    match env_file {
        EnvFile::Loaded(path) => info!(path = %path.display(), "loaded environment file"),
        EnvFile::Missing => {}
        EnvFile::Invalid(e) => warn!(error = %e, "ignoring unreadable environment file"),
    }

    let client = cli.connection.client()?;
    let marketplace = cli.connection.marketplace;
    let response = cli.command.execute(&client, marketplace).await?;

    let status = response.status;
    println!("{}", response.body);

    if status.is_success() {
        info!(status = status.as_u16(), "request completed");
        Ok(ExitCode::SUCCESS)
    } else {
        warn!(status = status.as_u16(), "MWS returned a non-success status");
        Ok(ExitCode::FAILURE)
    }
}
