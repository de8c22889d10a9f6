//! CLI command implementations.

mod config;
mod doctor;
mod mcp;
mod search;
mod serve;
mod transcript;

pub use config::run_config;
pub use doctor::run_doctor;
pub use mcp::run_mcp;
pub use search::{run_channels, run_search, run_uploads};
pub use serve::run_serve;
pub use transcript::run_transcript;
