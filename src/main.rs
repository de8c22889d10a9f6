//! Tubescout CLI entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tubescout::cli::{commands, Cli, Commands};
use tubescout::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. In MCP mode stdout carries JSON-RPC, so logs
    // always go to stderr.
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("tubescout={}", log_level)),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Load configuration; validation of the API key happens per command
    // so transcript-only use works without one
    let settings = match &cli.config {
        Some(path) => Settings::load_from(Some(&std::path::PathBuf::from(path)))?,
        None => Settings::load()?,
    };

    match &cli.command {
        Commands::Mcp => {
            commands::run_mcp(settings).await?;
        }

        Commands::Serve { host, port } => {
            commands::run_serve(host.clone(), *port, settings).await?;
        }

        Commands::Transcript { video } => {
            commands::run_transcript(video, settings).await?;
        }

        Commands::Search {
            query,
            limit,
            order,
            before,
            after,
        } => {
            commands::run_search(query, *limit, order, before.clone(), after.clone(), settings)
                .await?;
        }

        Commands::Channels { query, limit } => {
            commands::run_channels(query, *limit, settings).await?;
        }

        Commands::Uploads { channel_id, limit } => {
            commands::run_uploads(channel_id, *limit, settings).await?;
        }

        Commands::Doctor => {
            commands::run_doctor(&settings)?;
        }

        Commands::Config { action } => {
            commands::run_config(action, settings)?;
        }
    }

    Ok(())
}
