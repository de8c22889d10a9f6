//! MCP server implementation.

use super::protocol::*;
use super::tools::get_tools;
use crate::config::Settings;
use crate::transcript::TranscriptService;
use crate::youtube::{SearchOrder, VideoSearch, YoutubeClient};
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};
use tracing::error;

const PROTOCOL_VERSION: &str = "2024-11-05";
const SERVER_NAME: &str = "tubescout";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MCP Server for Tubescout.
pub struct McpServer {
    transcripts: TranscriptService,
    youtube: YoutubeClient,
}

impl McpServer {
    /// Create a new MCP server.
    ///
    /// Fails when the YouTube API key is missing; the entry point decides
    /// whether that terminates the process.
    pub fn new(settings: &Settings) -> crate::error::Result<Self> {
        let api_key = settings.validate_api_key()?;
        Ok(Self {
            transcripts: TranscriptService::new(settings),
            youtube: YoutubeClient::new(api_key),
        })
    }

    /// Run the MCP server (reads from stdin, writes to stdout).
    pub async fn run(&self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        // Log to stderr so it doesn't interfere with JSON-RPC
        eprintln!("Tubescout MCP server running on stdio");

        for line in stdin.lock().lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            let request: JsonRpcRequest = match serde_json::from_str(&line) {
                Ok(req) => req,
                Err(e) => {
                    error!("Failed to parse request: {}", e);
                    let response = JsonRpcResponse::error(None, -32700, "Parse error");
                    writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
                    stdout.flush()?;
                    continue;
                }
            };

            let response = self.handle_request(request).await;
            writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
            stdout.flush()?;
        }

        Ok(())
    }

    /// Handle a single JSON-RPC request. Shared with the HTTP transport.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id),
            "initialized" => JsonRpcResponse::success(request.id, json!({})),
            "tools/list" => self.handle_tools_list(request.id),
            "tools/call" => self.handle_tools_call(request.id, request.params).await,
            _ => JsonRpcResponse::error(
                request.id,
                -32601,
                &format!("Method not found: {}", request.method),
            ),
        }
    }

    fn handle_initialize(&self, id: Option<Value>) -> JsonRpcResponse {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
        };

        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => JsonRpcResponse::error(id, -32603, &e.to_string()),
        }
    }

    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        let result = ToolsListResult { tools: get_tools() };
        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => JsonRpcResponse::error(id, -32603, &e.to_string()),
        }
    }

    async fn handle_tools_call(&self, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
        let params: ToolCallParams = match params {
            Some(p) => match serde_json::from_value(p) {
                Ok(params) => params,
                Err(e) => {
                    return JsonRpcResponse::error(id, -32602, &format!("Invalid params: {}", e))
                }
            },
            None => return JsonRpcResponse::error(id, -32602, "Missing params"),
        };

        let result = match params.name.as_str() {
            "search_videos" => self.tool_search_videos(params.arguments).await,
            "search_channels" => self.tool_search_channels(params.arguments).await,
            "get_channel_videos" => self.tool_get_channel_videos(params.arguments).await,
            "get_transcript" => self.tool_get_transcript(params.arguments).await,
            _ => ToolCallResult::error(format!("Unknown tool: {}", params.name)),
        };

        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => JsonRpcResponse::error(id, -32603, &e.to_string()),
        }
    }

    /// Video search tool.
    async fn tool_search_videos(&self, args: Option<Value>) -> ToolCallResult {
        let args = match args {
            Some(a) => a,
            None => return ToolCallResult::error("Missing arguments".to_string()),
        };

        let query = match args.get("query").and_then(|v| v.as_str()) {
            Some(q) => q.to_string(),
            None => return ToolCallResult::error("Missing 'query' argument".to_string()),
        };

        let search = VideoSearch {
            query,
            max_results: arg_max_results(&args),
            order: arg_order(&args),
            published_before: arg_string(&args, "published_before"),
            published_after: arg_string(&args, "published_after"),
        };

        let videos = self.youtube.search_videos(&search).await;
        match serde_json::to_string_pretty(&videos) {
            Ok(text) => ToolCallResult::text(text),
            Err(e) => ToolCallResult::error(format!("Error searching YouTube: {}", e)),
        }
    }

    /// Channel search tool.
    async fn tool_search_channels(&self, args: Option<Value>) -> ToolCallResult {
        let args = match args {
            Some(a) => a,
            None => return ToolCallResult::error("Missing arguments".to_string()),
        };

        let query = match args.get("query").and_then(|v| v.as_str()) {
            Some(q) => q,
            None => return ToolCallResult::error("Missing 'query' argument".to_string()),
        };

        let channels = self
            .youtube
            .search_channels(query, arg_max_results(&args), arg_order(&args))
            .await;
        match serde_json::to_string_pretty(&channels) {
            Ok(text) => ToolCallResult::text(text),
            Err(e) => ToolCallResult::error(format!("Error searching channels: {}", e)),
        }
    }

    /// Channel uploads tool.
    async fn tool_get_channel_videos(&self, args: Option<Value>) -> ToolCallResult {
        let args = match args {
            Some(a) => a,
            None => return ToolCallResult::error("Missing arguments".to_string()),
        };

        let channel_id = match args.get("channel_id").and_then(|v| v.as_str()) {
            Some(id) => id,
            None => return ToolCallResult::error("Missing 'channel_id' argument".to_string()),
        };

        let videos = self
            .youtube
            .latest_videos(channel_id, arg_max_results(&args))
            .await;
        match serde_json::to_string_pretty(&videos) {
            Ok(text) => ToolCallResult::text(text),
            Err(e) => ToolCallResult::error(format!("Error listing channel videos: {}", e)),
        }
    }

    /// Transcript tool.
    async fn tool_get_transcript(&self, args: Option<Value>) -> ToolCallResult {
        let args = match args {
            Some(a) => a,
            None => return ToolCallResult::error("Missing arguments".to_string()),
        };

        let video_id = match args.get("video_id").and_then(|v| v.as_str()) {
            Some(id) => id,
            None => return ToolCallResult::error("Missing 'video_id' argument".to_string()),
        };

        match self.transcripts.get_transcript(video_id).await {
            Ok(text) => ToolCallResult::text(text),
            Err(e) => ToolCallResult::error(format!(
                "Error fetching transcript: {}. The video may not have captions available.",
                e
            )),
        }
    }
}

fn arg_max_results(args: &Value) -> u32 {
    args.get("max_results")
        .and_then(|v| v.as_u64())
        .map(|v| v as u32)
        .unwrap_or(10)
}

fn arg_order(args: &Value) -> SearchOrder {
    args.get("order")
        .and_then(|v| v.as_str())
        .and_then(|s| s.parse().ok())
        .unwrap_or_default()
}

fn arg_string(args: &Value, key: &str) -> Option<String> {
    args.get(key).and_then(|v| v.as_str()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_server() -> McpServer {
        let mut settings = Settings::default();
        settings.youtube.api_key = Some("test-key".to_string());
        McpServer::new(&settings).unwrap()
    }

    fn request(method: &str, params: Option<Value>) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: method.to_string(),
            params,
        }
    }

    #[test]
    fn test_new_requires_api_key() {
        let settings = Settings::default();
        assert!(McpServer::new(&settings).is_err());
    }

    #[tokio::test]
    async fn test_initialize() {
        let server = test_server();
        let response = server.handle_request(request("initialize", None)).await;
        let result = response.result.unwrap();
        assert_eq!(result["serverInfo"]["name"], "tubescout");
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
    }

    #[tokio::test]
    async fn test_tools_list() {
        let server = test_server();
        let response = server.handle_request(request("tools/list", None)).await;
        let tools = response.result.unwrap()["tools"].as_array().unwrap().len();
        assert_eq!(tools, 4);
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let server = test_server();
        let response = server.handle_request(request("prompts/list", None)).await;
        assert_eq!(response.error.unwrap().code, -32601);
    }

    #[tokio::test]
    async fn test_unknown_tool_is_error_result_not_crash() {
        let server = test_server();
        let response = server
            .handle_request(request(
                "tools/call",
                Some(json!({"name": "frobnicate", "arguments": {}})),
            ))
            .await;
        // Tool-level failures come back as isError payloads, not JSON-RPC errors
        let result = response.result.unwrap();
        assert_eq!(result["isError"], true);
    }

    #[tokio::test]
    async fn test_tool_call_missing_params() {
        let server = test_server();
        let response = server.handle_request(request("tools/call", None)).await;
        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[tokio::test]
    async fn test_get_transcript_missing_argument() {
        let server = test_server();
        let response = server
            .handle_request(request(
                "tools/call",
                Some(json!({"name": "get_transcript", "arguments": {}})),
            ))
            .await;
        let result = response.result.unwrap();
        assert_eq!(result["isError"], true);
    }

    #[test]
    fn test_arg_helpers() {
        let args = json!({"max_results": 3, "order": "date", "published_after": "2024-01-01T00:00:00Z"});
        assert_eq!(arg_max_results(&args), 3);
        assert_eq!(arg_order(&args), SearchOrder::Date);
        assert_eq!(
            arg_string(&args, "published_after").as_deref(),
            Some("2024-01-01T00:00:00Z")
        );
        assert_eq!(arg_string(&args, "published_before"), None);

        let empty = json!({});
        assert_eq!(arg_max_results(&empty), 10);
        assert_eq!(arg_order(&empty), SearchOrder::Relevance);
    }
}
