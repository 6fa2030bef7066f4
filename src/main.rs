//! relation - connectivity check for the Re:lation API
//!
//! Loads configuration, verifies the token against the API and prints the
//! message boxes it can see.
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `RELATION_ACCESS_TOKEN`: API access token
//! - `RELATION_SUBDOMAIN`: tenant subdomain
//!
//! # Usage
//!
//! ```bash
//! RELATION_ACCESS_TOKEN=... RELATION_SUBDOMAIN=acme ./relation
//! ```

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use relation_client::{Config, RelationClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore errors if not found)
    dotenvy::dotenv().ok();

    // stdout carries the listing, logs go to stderr
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("relation_client=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("relation v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env().context("Failed to load configuration")?;

    tracing::debug!(?config, "Configuration loaded");

    let client = RelationClient::new(&config).context("Failed to create Re:lation client")?;

    let boxes = client
        .test_connection()
        .await
        .context("Connection test failed")?;

    for mb in &boxes {
        println!(
            "{}\t{}",
            mb.message_box_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
            mb.display_name()
        );
    }

    Ok(())
}
