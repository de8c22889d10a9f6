//! Subtitle fetching and parsing.
//!
//! yt-dlp does the network work; this module owns the process invocation,
//! the VTT-to-plain-text transform, and the yt-dlp health probe.

mod fetcher;
mod health;
mod vtt;

pub use fetcher::{video_id_from_input, SubtitleFetcher, YtDlpFetcher};
pub use health::{check_ytdlp, YtDlpStatus};
pub use vtt::parse_vtt;

/// URL of the watch page for a video id.
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}
