// Standalone MCP server binary

use anyhow::{Context, Result};
use clap::Parser;
use realestate_core::catalog::{DEFAULT_BASE_URL, UPSTREAM_API_PAGE};
use realestate_mcp::server::McpServer;
use realestate_mcp::tools::catalog_registry;
use realestate_sdk::{ClientConfig, ToolInvoker};
use std::time::Duration;

/// Log filter used when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "realestate=info,us_real_estate_mcp=info";

#[derive(Parser, Debug)]
#[command(name = "us-real-estate-mcp")]
#[command(about = "MCP server exposing the US Real Estate API as tools", long_about = None)]
struct Args {
    /// Accepted for compatibility with existing launch scripts and ignored.
    /// The server only speaks MCP over stdin/stdout and never opens a port.
    #[arg(allow_negative_numbers = true)]
    port: Option<String>,

    /// Base URL of the upstream API
    #[arg(long, env = "US_REAL_ESTATE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Upstream request timeout in seconds
    #[arg(long, env = "US_REAL_ESTATE_TIMEOUT_SECS", default_value = "30")]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up RAPID_API_KEY from a local .env if present
    dotenvy::dotenv().ok();

    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    if let Some(port) = args.port {
        tracing::debug!(port = %port, "Ignoring port argument, serving over stdio");
    }

    tracing::info!("US Real Estate MCP server starting...");

    let config = ClientConfig::from_env()
        .context("Cannot start without an upstream API key")?
        .with_base_url(&args.base_url)?
        .with_timeout(Duration::from_secs(args.timeout_secs));

    tracing::info!(base_url = %config.base_url, timeout_secs = args.timeout_secs, "Upstream configured");

    let invoker = ToolInvoker::from_config(config)?;
    let registry = catalog_registry(invoker);

    tracing::info!("Registered {} tools", registry.len());

    let server = McpServer::new(registry).with_instructions(format!(
        "Query US property listings, location data, mortgage figures and agent \
         directories from the US Real Estate API ({}).",
        UPSTREAM_API_PAGE
    ));
    server.start().await?;

    Ok(())
}
