//! # hostelctl — hostel front-desk client
//!
//! Composition root that wires the reqwest transport into the API client and
//! runs one command against the remote hostel API.
//!
//! ## Responsibilities
//! - Parse the command line and configuration (file, env vars, flags)
//! - Initialize logging
//! - Construct the transport adapter and inject it into the API client
//! - Build the route table and view registry behind a `Navigator`
//! - Run the command and print its JSON result on stdout
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no API or routing logic belongs here.

mod cli;
mod commands;
mod config;

use anyhow::Context;
use clap::Parser;
use hostel_adapter_http_reqwest::ReqwestTransport;
use hostel_app::client::ApiClient;
use hostel_app::navigator::Navigator;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(url) = &cli.api_url {
        config.override_api_url(url.clone());
    }
    config.validate()?;

    init_tracing(&config, cli.verbose);

    // Transport
    let transport =
        ReqwestTransport::new(&config.transport).context("failed to build HTTP transport")?;

    // Client and navigation
    let client = ApiClient::new(config.api_config(), transport);
    let navigator = Navigator::standard(client);
    tracing::debug!(api = %config.api.url, "hostelctl ready");

    let output = commands::run(cli.command, &navigator).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn init_tracing(config: &Config, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
