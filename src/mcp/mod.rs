//! MCP (Model Context Protocol) server for Tubescout.
//!
//! Exposes YouTube search and transcript retrieval as tools for AI
//! assistants. Implements JSON-RPC 2.0 over stdio; the same handler is
//! reused by the HTTP /mcp endpoint.

mod protocol;
mod server;
mod tools;

pub use protocol::{JsonRpcRequest, JsonRpcResponse};
pub use server::McpServer;
