//! Tubescout - YouTube search and transcripts for AI assistants
//!
//! Exposes YouTube metadata search and video transcript retrieval as tools
//! over the Model Context Protocol (MCP), plus a small HTTP API.
//!
//! # Overview
//!
//! Tubescout allows an MCP client (Claude, etc.) to:
//! - Search YouTube for videos and channels with metadata
//! - List a channel's latest uploads
//! - Fetch a video's auto-generated captions as deduplicated plain text
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `subtitles` - yt-dlp subtitle fetching and VTT parsing
//! - `transcript` - Transcript orchestration (fetch, parse, cleanup)
//! - `youtube` - YouTube Data API client
//! - `mcp` - MCP server (JSON-RPC 2.0)
//! - `cli` - CLI commands and HTTP server
//!
//! # Example
//!
//! ```rust,no_run
//! use tubescout::config::Settings;
//! use tubescout::transcript::TranscriptService;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let service = TranscriptService::new(&settings);
//!
//!     let text = service.get_transcript("dQw4w9WgXcQ").await?;
//!     println!("{}", text);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod mcp;
pub mod subtitles;
pub mod transcript;
pub mod youtube;

pub use error::{Result, TubescoutError};
