//! yt-dlp health probe.
//!
//! Used by the HTTP health endpoint to report whether subtitle extraction
//! is likely to work: checks the cookie file and runs a cheap yt-dlp
//! subtitle listing against a known video.

use crate::subtitles::watch_url;
use serde::Serialize;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::warn;

/// Video used when the caller does not supply one.
const DEFAULT_PROBE_VIDEO: &str = "3RtM5pFLpRE";

/// Outcome of the yt-dlp probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum YtDlpStatus {
    Ok,
    CookieFileNotFound,
    YtDlpError,
    Unknown,
}

impl YtDlpStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, YtDlpStatus::Ok)
    }
}

/// Probe yt-dlp by listing subtitles for a video.
///
/// Never returns an error; every failure mode maps to a status value.
pub async fn check_ytdlp(video_id: Option<&str>, cookie_file: Option<&Path>) -> YtDlpStatus {
    let video_id = video_id.unwrap_or(DEFAULT_PROBE_VIDEO);

    let mut cmd = Command::new("yt-dlp");

    if let Some(cookies) = cookie_file {
        if !cookies.exists() {
            return YtDlpStatus::CookieFileNotFound;
        }
        cmd.arg("--cookies").arg(cookies);
    }

    let result = cmd
        .arg("--list-subs")
        .arg("--ignore-no-formats-error")
        .arg("--no-check-formats")
        .arg(watch_url(video_id))
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .await;

    match result {
        Ok(output) if output.status.success() => YtDlpStatus::Ok,
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("yt-dlp probe failed: {}", stderr.trim());
            YtDlpStatus::YtDlpError
        }
        Err(e) => {
            warn!("yt-dlp probe could not run: {}", e);
            YtDlpStatus::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_cookie_file_reported() {
        let status = check_ytdlp(None, Some(Path::new("/nonexistent/cookies.txt"))).await;
        assert_eq!(status, YtDlpStatus::CookieFileNotFound);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&YtDlpStatus::CookieFileNotFound).unwrap(),
            "\"cookie_file_not_found\""
        );
        assert_eq!(serde_json::to_string(&YtDlpStatus::Ok).unwrap(), "\"ok\"");
    }
}
