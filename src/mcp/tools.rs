//! MCP tool definitions for Tubescout.

use super::protocol::Tool;
use serde_json::json;

/// Get all available tools.
pub fn get_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "search_videos".to_string(),
            description: "Search YouTube for videos and retrieve metadata including title, \
                description, publish date, channel, and video ID."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The search query to find YouTube videos"
                    },
                    "max_results": {
                        "type": "integer",
                        "description": "Maximum number of results to return (1-50)",
                        "default": 10
                    },
                    "order": {
                        "type": "string",
                        "enum": ["relevance", "date", "rating", "title", "videoCount", "viewCount"],
                        "description": "The order in which to sort the results",
                        "default": "relevance"
                    },
                    "published_before": {
                        "type": "string",
                        "description": "RFC 3339 datetime; only videos published before this"
                    },
                    "published_after": {
                        "type": "string",
                        "description": "RFC 3339 datetime; only videos published after this"
                    }
                },
                "required": ["query"]
            }),
        },
        Tool {
            name: "search_channels".to_string(),
            description: "Search YouTube for channels and retrieve metadata including title, \
                description, and channel ID."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The search query to find YouTube channels"
                    },
                    "max_results": {
                        "type": "integer",
                        "description": "Maximum number of results to return (1-50)",
                        "default": 10
                    },
                    "order": {
                        "type": "string",
                        "enum": ["relevance", "date", "rating", "title", "videoCount", "viewCount"],
                        "default": "relevance"
                    }
                },
                "required": ["query"]
            }),
        },
        Tool {
            name: "get_channel_videos".to_string(),
            description: "List the latest uploads of a YouTube channel by channel ID."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "channel_id": {
                        "type": "string",
                        "description": "The YouTube channel ID (e.g., 'UC...')"
                    },
                    "max_results": {
                        "type": "integer",
                        "description": "Maximum number of uploads to return (1-50)",
                        "default": 10
                    }
                },
                "required": ["channel_id"]
            }),
        },
        Tool {
            name: "get_transcript".to_string(),
            description: "Get the transcript/captions of a YouTube video as plain text."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "video_id": {
                        "type": "string",
                        "description": "The YouTube video ID (e.g., 'dQw4w9WgXcQ' from youtube.com/watch?v=dQw4w9WgXcQ)"
                    }
                },
                "required": ["video_id"]
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tools_present() {
        let names: Vec<String> = get_tools().into_iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "search_videos",
                "search_channels",
                "get_channel_videos",
                "get_transcript"
            ]
        );
    }

    #[test]
    fn test_schemas_declare_required_fields() {
        for tool in get_tools() {
            let required = tool.input_schema["required"].as_array().unwrap();
            assert!(!required.is_empty(), "{} has no required fields", tool.name);
        }
    }
}
