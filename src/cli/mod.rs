//! CLI module for Tubescout.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Tubescout - YouTube search and transcripts for AI assistants
///
/// Exposes YouTube metadata search and transcript retrieval as MCP tools,
/// with a small HTTP API for direct integration.
#[derive(Parser, Debug)]
#[command(name = "tubescout")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start MCP server for AI assistant integration (Claude, etc.)
    Mcp,

    /// Start HTTP API server (health, MCP transport, transcripts)
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Fetch a video's transcript as plain text
    Transcript {
        /// YouTube video ID or watch URL
        video: String,
    },

    /// Search YouTube for videos
    Search {
        /// Search query
        query: String,

        /// Maximum number of results (1-50)
        #[arg(short, long, default_value = "10")]
        limit: u32,

        /// Sort order (relevance, date, rating, title, videoCount, viewCount)
        #[arg(short, long, default_value = "relevance")]
        order: String,

        /// Only videos published before this RFC 3339 datetime
        #[arg(long)]
        before: Option<String>,

        /// Only videos published after this RFC 3339 datetime
        #[arg(long)]
        after: Option<String>,
    },

    /// Search YouTube for channels
    Channels {
        /// Search query
        query: String,

        /// Maximum number of results (1-50)
        #[arg(short, long, default_value = "10")]
        limit: u32,
    },

    /// List the latest uploads of a channel
    Uploads {
        /// Channel ID (UC...)
        channel_id: String,

        /// Maximum number of uploads (1-50)
        #[arg(short, long, default_value = "10")]
        limit: u32,
    },

    /// Check system requirements and configuration
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write the current configuration to the default config file
    Init,
}
