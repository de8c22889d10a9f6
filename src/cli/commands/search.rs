//! Search command implementations (videos, channels, uploads).

use crate::cli::Output;
use crate::config::Settings;
use crate::youtube::{SearchOrder, VideoResult, VideoSearch, YoutubeClient};
use anyhow::{anyhow, Result};

/// Search YouTube for videos and print the results.
pub async fn run_search(
    query: &str,
    limit: u32,
    order: &str,
    before: Option<String>,
    after: Option<String>,
    settings: Settings,
) -> Result<()> {
    let client = client(&settings)?;
    let order: SearchOrder = order.parse().map_err(|e: String| anyhow!(e))?;

    // The API silently ignores malformed datetimes; reject them up front
    for (flag, value) in [("--before", &before), ("--after", &after)] {
        if let Some(ts) = value {
            chrono::DateTime::parse_from_rfc3339(ts)
                .map_err(|e| anyhow!("Invalid {} datetime '{}': {}", flag, ts, e))?;
        }
    }

    let search = VideoSearch {
        query: query.to_string(),
        max_results: limit,
        order,
        published_before: before,
        published_after: after,
    };

    let videos = client.search_videos(&search).await;

    if videos.is_empty() {
        Output::info("No videos found.");
        return Ok(());
    }

    Output::header(&format!("Videos matching \"{}\"", query));
    print_videos(&videos);
    Ok(())
}

/// Search YouTube for channels and print the results.
pub async fn run_channels(query: &str, limit: u32, settings: Settings) -> Result<()> {
    let client = client(&settings)?;
    let channels = client
        .search_channels(query, limit, SearchOrder::Relevance)
        .await;

    if channels.is_empty() {
        Output::info("No channels found.");
        return Ok(());
    }

    Output::header(&format!("Channels matching \"{}\"", query));
    for (i, channel) in channels.iter().enumerate() {
        Output::video_result(
            i + 1,
            channel.title.as_deref().unwrap_or("(untitled)"),
            channel.channel_id.as_deref().unwrap_or("?"),
            channel.description.as_deref().unwrap_or(""),
            channel.published_at.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

/// List a channel's latest uploads.
pub async fn run_uploads(channel_id: &str, limit: u32, settings: Settings) -> Result<()> {
    let client = client(&settings)?;
    let videos = client.latest_videos(channel_id, limit).await;

    if videos.is_empty() {
        Output::info("No uploads found.");
        return Ok(());
    }

    Output::header(&format!("Latest uploads of {}", channel_id));
    print_videos(&videos);
    Ok(())
}

fn client(settings: &Settings) -> Result<YoutubeClient> {
    let api_key = settings.validate_api_key()?;
    Ok(YoutubeClient::new(api_key))
}

fn print_videos(videos: &[VideoResult]) {
    for (i, video) in videos.iter().enumerate() {
        Output::video_result(
            i + 1,
            video.title.as_deref().unwrap_or("(untitled)"),
            video.video_id.as_deref().unwrap_or("?"),
            video.channel_title.as_deref().unwrap_or("unknown channel"),
            video.published_at.as_deref().unwrap_or(""),
        );
    }
}
