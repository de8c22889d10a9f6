//! YouTube API request/response types.

use serde::{Deserialize, Serialize};

/// Sort order for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchOrder {
    #[default]
    Relevance,
    Date,
    Rating,
    Title,
    VideoCount,
    ViewCount,
}

impl SearchOrder {
    /// Wire value expected by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchOrder::Relevance => "relevance",
            SearchOrder::Date => "date",
            SearchOrder::Rating => "rating",
            SearchOrder::Title => "title",
            SearchOrder::VideoCount => "videoCount",
            SearchOrder::ViewCount => "viewCount",
        }
    }
}

impl std::str::FromStr for SearchOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(SearchOrder::Relevance),
            "date" => Ok(SearchOrder::Date),
            "rating" => Ok(SearchOrder::Rating),
            "title" => Ok(SearchOrder::Title),
            "videoCount" => Ok(SearchOrder::VideoCount),
            "viewCount" => Ok(SearchOrder::ViewCount),
            _ => Err(format!("Unknown search order: {}", s)),
        }
    }
}

/// One video from a search or playlist listing.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoResult {
    pub video_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub published_at: Option<String>,
    pub channel_title: Option<String>,
    pub thumbnail_url: Option<String>,
}

/// One channel from a channel search.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelResult {
    pub channel_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub published_at: Option<String>,
    pub thumbnail_url: Option<String>,
}

// --- Raw API response shapes (deserialization only) ---

#[derive(Debug, Deserialize)]
pub(crate) struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchItem {
    pub id: Option<SearchItemId>,
    pub snippet: Option<Snippet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchItemId {
    pub video_id: Option<String>,
    pub channel_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Snippet {
    pub title: Option<String>,
    pub description: Option<String>,
    pub published_at: Option<String>,
    pub channel_title: Option<String>,
    pub thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Thumbnails {
    pub high: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Thumbnail {
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChannelListResponse {
    #[serde(default)]
    pub items: Vec<ChannelItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChannelItem {
    pub content_details: Option<ChannelContentDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChannelContentDetails {
    pub related_playlists: Option<RelatedPlaylists>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RelatedPlaylists {
    pub uploads: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistItemsResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaylistItem {
    pub snippet: Option<Snippet>,
    pub content_details: Option<PlaylistItemContentDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaylistItemContentDetails {
    pub video_id: Option<String>,
    pub video_published_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_order_wire_values() {
        assert_eq!(SearchOrder::Relevance.as_str(), "relevance");
        assert_eq!(SearchOrder::ViewCount.as_str(), "viewCount");
        assert_eq!(SearchOrder::VideoCount.as_str(), "videoCount");
    }

    #[test]
    fn test_order_round_trip() {
        for s in ["relevance", "date", "rating", "title", "videoCount", "viewCount"] {
            assert_eq!(SearchOrder::from_str(s).unwrap().as_str(), s);
        }
        assert!(SearchOrder::from_str("popularity").is_err());
    }

    #[test]
    fn test_search_response_deserializes() {
        let json = r#"{
            "items": [
                {
                    "id": {"videoId": "abc"},
                    "snippet": {
                        "title": "A video",
                        "description": "desc",
                        "publishedAt": "2024-01-01T00:00:00Z",
                        "channelTitle": "Some Channel",
                        "thumbnails": {"high": {"url": "https://img"}}
                    }
                }
            ]
        }"#;

        let parsed: SearchListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.items.len(), 1);
        let id = parsed.items[0].id.as_ref().unwrap();
        assert_eq!(id.video_id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_missing_items_defaults_to_empty() {
        let parsed: SearchListResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.items.is_empty());
    }
}
