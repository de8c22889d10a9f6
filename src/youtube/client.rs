//! YouTube Data API v3 HTTP client.

use super::types::*;
use crate::error::Result;
use tracing::{debug, warn};

const API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Client for YouTube search and channel endpoints.
pub struct YoutubeClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

/// Parameters for a video search.
#[derive(Debug, Clone, Default)]
pub struct VideoSearch {
    pub query: String,
    pub max_results: u32,
    pub order: SearchOrder,
    pub published_before: Option<String>,
    pub published_after: Option<String>,
}

impl YoutubeClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, API_BASE)
    }

    /// Point the client at a different base URL (used in tests).
    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Search for videos matching a free-text query.
    ///
    /// `max_results` is clamped to the API's 1-50 range and the returned
    /// list never exceeds it. Remote failures degrade to an empty list.
    pub async fn search_videos(&self, search: &VideoSearch) -> Vec<VideoResult> {
        let max_results = clamp_max_results(search.max_results);

        let mut params = vec![
            ("part".to_string(), "snippet".to_string()),
            ("q".to_string(), search.query.clone()),
            ("type".to_string(), "video".to_string()),
            ("maxResults".to_string(), max_results.to_string()),
            ("order".to_string(), search.order.as_str().to_string()),
            ("key".to_string(), self.api_key.clone()),
        ];
        if let Some(before) = &search.published_before {
            params.push(("publishedBefore".to_string(), before.clone()));
        }
        if let Some(after) = &search.published_after {
            params.push(("publishedAfter".to_string(), after.clone()));
        }

        match self.get_search(&params).await {
            Ok(response) => map_video_items(response.items, max_results as usize),
            Err(e) => {
                warn!("Video search failed, returning empty list: {}", e);
                Vec::new()
            }
        }
    }

    /// Search for channels matching a free-text query.
    pub async fn search_channels(
        &self,
        query: &str,
        max_results: u32,
        order: SearchOrder,
    ) -> Vec<ChannelResult> {
        let max_results = clamp_max_results(max_results);

        let params = vec![
            ("part".to_string(), "snippet".to_string()),
            ("q".to_string(), query.to_string()),
            ("type".to_string(), "channel".to_string()),
            ("maxResults".to_string(), max_results.to_string()),
            ("order".to_string(), order.as_str().to_string()),
            ("key".to_string(), self.api_key.clone()),
        ];

        match self.get_search(&params).await {
            Ok(response) => map_channel_items(response.items, max_results as usize),
            Err(e) => {
                warn!("Channel search failed, returning empty list: {}", e);
                Vec::new()
            }
        }
    }

    /// Latest uploads of a channel, via its uploads playlist.
    pub async fn latest_videos(&self, channel_id: &str, max_results: u32) -> Vec<VideoResult> {
        let max_results = clamp_max_results(max_results);

        match self.latest_videos_inner(channel_id, max_results).await {
            Ok(videos) => videos,
            Err(e) => {
                warn!(
                    "Listing uploads for channel {} failed, returning empty list: {}",
                    channel_id, e
                );
                Vec::new()
            }
        }
    }

    async fn latest_videos_inner(
        &self,
        channel_id: &str,
        max_results: u32,
    ) -> Result<Vec<VideoResult>> {
        let channels: ChannelListResponse = self
            .http
            .get(format!("{}/channels", self.base_url))
            .query(&[
                ("part", "contentDetails,snippet"),
                ("id", channel_id),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let uploads_playlist = channels
            .items
            .into_iter()
            .next()
            .and_then(|c| c.content_details)
            .and_then(|d| d.related_playlists)
            .and_then(|p| p.uploads)
            .ok_or_else(|| {
                crate::error::TubescoutError::YoutubeApi(format!(
                    "no uploads playlist for channel: {}",
                    channel_id
                ))
            })?;

        debug!("Uploads playlist for {}: {}", channel_id, uploads_playlist);

        let max_results_str = max_results.to_string();
        let playlist: PlaylistItemsResponse = self
            .http
            .get(format!("{}/playlistItems", self.base_url))
            .query(&[
                ("part", "snippet,contentDetails"),
                ("playlistId", uploads_playlist.as_str()),
                ("maxResults", max_results_str.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(map_playlist_items(playlist.items, max_results as usize))
    }

    async fn get_search(&self, params: &[(String, String)]) -> Result<SearchListResponse> {
        let response = self
            .http
            .get(format!("{}/search", self.base_url))
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response)
    }
}

/// Clamp a requested result count to the API's accepted 1-50 range.
fn clamp_max_results(requested: u32) -> u32 {
    requested.clamp(1, 50)
}

fn map_video_items(items: Vec<SearchItem>, limit: usize) -> Vec<VideoResult> {
    items
        .into_iter()
        .take(limit)
        .map(|item| {
            let snippet = item.snippet;
            VideoResult {
                video_id: item.id.and_then(|id| id.video_id),
                title: snippet.as_ref().and_then(|s| s.title.clone()),
                description: snippet.as_ref().and_then(|s| s.description.clone()),
                published_at: snippet.as_ref().and_then(|s| s.published_at.clone()),
                channel_title: snippet.as_ref().and_then(|s| s.channel_title.clone()),
                thumbnail_url: thumbnail_url(snippet.as_ref()),
            }
        })
        .collect()
}

fn map_channel_items(items: Vec<SearchItem>, limit: usize) -> Vec<ChannelResult> {
    items
        .into_iter()
        .take(limit)
        .map(|item| {
            let snippet = item.snippet;
            ChannelResult {
                channel_id: item.id.and_then(|id| id.channel_id),
                title: snippet.as_ref().and_then(|s| s.title.clone()),
                description: snippet.as_ref().and_then(|s| s.description.clone()),
                published_at: snippet.as_ref().and_then(|s| s.published_at.clone()),
                thumbnail_url: thumbnail_url(snippet.as_ref()),
            }
        })
        .collect()
}

fn map_playlist_items(items: Vec<PlaylistItem>, limit: usize) -> Vec<VideoResult> {
    items
        .into_iter()
        .take(limit)
        .map(|item| {
            let details = item.content_details;
            let snippet = item.snippet;
            VideoResult {
                video_id: details.as_ref().and_then(|d| d.video_id.clone()),
                title: snippet.as_ref().and_then(|s| s.title.clone()),
                description: snippet.as_ref().and_then(|s| s.description.clone()),
                // contentDetails carries the video's own publish time;
                // the snippet only has the playlist-add time
                published_at: details
                    .as_ref()
                    .and_then(|d| d.video_published_at.clone())
                    .or_else(|| snippet.as_ref().and_then(|s| s.published_at.clone())),
                channel_title: snippet.as_ref().and_then(|s| s.channel_title.clone()),
                thumbnail_url: thumbnail_url(snippet.as_ref()),
            }
        })
        .collect()
}

fn thumbnail_url(snippet: Option<&Snippet>) -> Option<String> {
    snippet
        .and_then(|s| s.thumbnails.as_ref())
        .and_then(|t| t.high.as_ref())
        .and_then(|h| h.url.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_item(video_id: &str, title: &str) -> SearchItem {
        serde_json::from_value(serde_json::json!({
            "id": {"videoId": video_id},
            "snippet": {
                "title": title,
                "description": "d",
                "publishedAt": "2024-06-01T00:00:00Z",
                "channelTitle": "chan",
                "thumbnails": {"high": {"url": "https://img"}}
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_clamp_max_results() {
        assert_eq!(clamp_max_results(0), 1);
        assert_eq!(clamp_max_results(10), 10);
        assert_eq!(clamp_max_results(51), 50);
        assert_eq!(clamp_max_results(u32::MAX), 50);
    }

    #[test]
    fn test_map_video_items_respects_limit() {
        let items = vec![
            search_item("a", "one"),
            search_item("b", "two"),
            search_item("c", "three"),
        ];

        let mapped = map_video_items(items, 2);
        assert_eq!(mapped.len(), 2);
        assert_eq!(mapped[0].video_id.as_deref(), Some("a"));
        assert_eq!(mapped[1].video_id.as_deref(), Some("b"));
    }

    #[test]
    fn test_map_video_items_tolerates_missing_fields() {
        let bare: SearchItem = serde_json::from_value(serde_json::json!({})).unwrap();
        let mapped = map_video_items(vec![bare], 10);
        assert_eq!(mapped.len(), 1);
        assert!(mapped[0].video_id.is_none());
        assert!(mapped[0].thumbnail_url.is_none());
    }

    #[test]
    fn test_map_channel_items() {
        let item: SearchItem = serde_json::from_value(serde_json::json!({
            "id": {"channelId": "UC123"},
            "snippet": {"title": "A Channel"}
        }))
        .unwrap();

        let mapped = map_channel_items(vec![item], 5);
        assert_eq!(mapped[0].channel_id.as_deref(), Some("UC123"));
        assert_eq!(mapped[0].title.as_deref(), Some("A Channel"));
    }

    /// Serve a router on an ephemeral local port, returning its base URL.
    async fn spawn_stub(router: axum::Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_search_videos_truncates_over_wire() {
        use axum::{routing::get, Json, Router};

        // Remote reports three items; the caller asked for two
        let router = Router::new().route(
            "/search",
            get(|| async {
                Json(serde_json::json!({
                    "items": [
                        {"id": {"videoId": "a"}, "snippet": {"title": "one"}},
                        {"id": {"videoId": "b"}, "snippet": {"title": "two"}},
                        {"id": {"videoId": "c"}, "snippet": {"title": "three"}}
                    ]
                }))
            }),
        );
        let base = spawn_stub(router).await;

        let client = YoutubeClient::with_base_url("test-key", &base);
        let videos = client
            .search_videos(&VideoSearch {
                query: "anything".to_string(),
                max_results: 2,
                ..Default::default()
            })
            .await;

        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].video_id.as_deref(), Some("a"));
    }

    #[tokio::test]
    async fn test_remote_error_degrades_to_empty_list() {
        use axum::{http::StatusCode, routing::get, Router};

        let router = Router::new().route(
            "/search",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "quota exceeded") }),
        );
        let base = spawn_stub(router).await;

        let client = YoutubeClient::with_base_url("test-key", &base);
        let videos = client
            .search_videos(&VideoSearch {
                query: "anything".to_string(),
                max_results: 5,
                ..Default::default()
            })
            .await;

        assert!(videos.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_remote_degrades_to_empty_list() {
        // Nothing listens on this port
        let client = YoutubeClient::with_base_url("test-key", "http://127.0.0.1:1");
        let channels = client
            .search_channels("anything", 5, SearchOrder::Relevance)
            .await;

        assert!(channels.is_empty());
    }

    #[test]
    fn test_map_playlist_items_prefers_video_publish_time() {
        let item: PlaylistItem = serde_json::from_value(serde_json::json!({
            "snippet": {
                "title": "upload",
                "publishedAt": "2024-02-02T00:00:00Z"
            },
            "contentDetails": {
                "videoId": "vid",
                "videoPublishedAt": "2024-01-01T00:00:00Z"
            }
        }))
        .unwrap();

        let mapped = map_playlist_items(vec![item], 10);
        assert_eq!(mapped[0].video_id.as_deref(), Some("vid"));
        assert_eq!(
            mapped[0].published_at.as_deref(),
            Some("2024-01-01T00:00:00Z")
        );
    }
}
