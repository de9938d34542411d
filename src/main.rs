//! redlist-explorer: A terminal UI for browsing threatened species by region

use clap::Parser;
use color_eyre::{Result, eyre::eyre};
use redlist_explorer_core::constants::DEFAULT_LOG_FILE;
use redlist_explorer_core::{Classifications, QueryState};
use redlist_explorer_tui::App;
use redlist_rs::{RedlistClient, RedlistConfig, RedlistError};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::{EnvFilter, prelude::*};

/// redlist-explorer: Terminal UI for species listings by region
#[derive(Parser, Debug)]
#[command(name = "redlist-explorer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Region to browse (overrides default_region from the config)
    #[arg(short, long)]
    region: Option<String>,

    /// Path to config file (default: ~/.redlist/config)
    #[arg(long)]
    config: Option<String>,

    /// API base URL (overrides base_url from the config)
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides timeout_secs from the config)
    #[arg(long)]
    timeout: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Log file path
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: String,
}

/// Merge the config file with command line overrides
fn resolve_config(cli: &Cli) -> Result<RedlistConfig> {
    let loaded = match &cli.config {
        Some(path) => RedlistConfig::load_from(Path::new(path)),
        None => RedlistConfig::load_default(),
    };

    let mut config = match loaded {
        Ok(config) => config,
        // A missing file is fine when the URL comes from the command line
        Err(RedlistError::ConfigNotFound(_) | RedlistError::NoHomeDirectory)
            if cli.base_url.is_some() =>
        {
            tracing::info!("No config file, using command line settings");
            RedlistConfig::with_base_url(String::new())
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize error handling
    color_eyre::install()?;

    // Initialize logging to file (not stdout, which would corrupt TUI)
    let log_level = if cli.debug { Level::DEBUG } else { Level::INFO };
    let log_file = File::create(&cli.log_file)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(log_file)
                .with_ansi(true)
                .with_target(false),
        )
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .init();

    tracing::info!("Starting redlist-explorer");

    let config = resolve_config(&cli)?;
    let region = cli
        .region
        .clone()
        .or_else(|| config.default_region.clone())
        .ok_or_else(|| eyre!("no region given: pass --region or set default_region in the config"))?;
    let query = QueryState::new(region)?;

    tracing::info!(
        "Using {} (region {}, timeout {}s)",
        config.api_url(),
        query.region(),
        config.timeout_secs
    );

    let client = RedlistClient::from_config(&config)?;
    let tables = Arc::new(Classifications::from_config(&config));

    let mut app = App::new(Arc::new(client), query, tables, config.timeout());
    app.run().await?;

    tracing::info!("Goodbye!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["redlist-explorer", "-r", "AF"]);
        assert_eq!(cli.region.as_deref(), Some("AF"));
        assert_eq!(cli.log_file, DEFAULT_LOG_FILE);
        assert!(!cli.debug);
        assert!(cli.timeout.is_none());
    }

    #[test]
    fn test_missing_config_with_base_url() {
        let cli = Cli::parse_from([
            "redlist-explorer",
            "--config",
            "/nonexistent/redlist/config",
            "--base-url",
            "api.example.org/v1/",
            "--timeout",
            "3",
        ]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.api_url(), "https://api.example.org/v1");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn test_missing_config_without_base_url_fails() {
        let cli = Cli::parse_from(["redlist-explorer", "--config", "/nonexistent/redlist/config"]);
        assert!(resolve_config(&cli).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let cli = Cli::parse_from([
            "redlist-explorer",
            "--config",
            "/nonexistent/redlist/config",
            "--base-url",
            "http://localhost:8080",
            "--timeout",
            "0",
        ]);
        assert!(resolve_config(&cli).is_err());
    }
}
