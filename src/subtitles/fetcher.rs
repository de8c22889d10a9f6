//! Subtitle download via yt-dlp.
//!
//! The fetcher writes auto-generated captions for a video to a
//! deterministic path under the temp directory. Concurrent fetches for
//! the same video id collide on that path (last writer wins); callers
//! that care must serialize per id.

use crate::error::{Result, TubescoutError};
use crate::subtitles::watch_url;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, instrument};

/// Seam for subtitle extraction, so the transcript service can be tested
/// without yt-dlp installed.
#[async_trait]
pub trait SubtitleFetcher: Send + Sync {
    /// Fetch captions for a video, returning the path of the produced
    /// caption file.
    async fn fetch(&self, video_id: &str) -> Result<PathBuf>;

    /// The deterministic path a fetch for this id will produce.
    fn caption_path(&self, video_id: &str) -> PathBuf;
}

/// Production fetcher shelling out to yt-dlp.
pub struct YtDlpFetcher {
    temp_dir: PathBuf,
    language: String,
    cookie_file: Option<PathBuf>,
}

impl YtDlpFetcher {
    pub fn new(temp_dir: PathBuf, language: &str, cookie_file: Option<PathBuf>) -> Self {
        Self {
            temp_dir,
            language: language.to_string(),
            cookie_file,
        }
    }
}

#[async_trait]
impl SubtitleFetcher for YtDlpFetcher {
    #[instrument(skip(self), fields(video_id = %video_id))]
    async fn fetch(&self, video_id: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.temp_dir)?;

        // yt-dlp appends .<lang>.vtt to the output template itself
        let output_template = self.temp_dir.join(video_id);
        let url = watch_url(video_id);

        debug!("Downloading subtitles for {}", video_id);

        let mut cmd = Command::new("yt-dlp");
        cmd.arg("--write-auto-sub")
            .arg("--sub-lang").arg(&self.language)
            .arg("--skip-download")
            .arg("--sub-format").arg("vtt")
            .arg("--output").arg(&output_template)
            .arg("--quiet")
            .arg("--no-warnings");

        if let Some(cookies) = &self.cookie_file {
            cmd.arg("--cookies").arg(cookies);
        }

        let result = cmd
            .arg(&url)
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await;

        let output = match result {
            Ok(o) => o,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(TubescoutError::ToolNotFound("yt-dlp".into()));
            }
            Err(e) => {
                return Err(TubescoutError::FetchFailed(format!(
                    "yt-dlp execution failed: {e}"
                )));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TubescoutError::FetchFailed(format!(
                "yt-dlp failed: {}",
                stderr.trim()
            )));
        }

        Ok(self.caption_path(video_id))
    }

    fn caption_path(&self, video_id: &str) -> PathBuf {
        self.temp_dir
            .join(format!("{}.{}.vtt", video_id, self.language))
    }
}

/// Lightweight sanity check on a video id before handing it to yt-dlp.
///
/// YouTube ids are 11 chars of [A-Za-z0-9_-]; URLs are also accepted and
/// reduced to the id. Invalid ids beyond this shape are only detected by
/// yt-dlp itself.
pub fn video_id_from_input(input: &str) -> Option<String> {
    use regex::Regex;
    use std::sync::LazyLock;

    static ID_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(
            r"(?x)
            (?:
                (?:https?://)?
                (?:www\.)?
                (?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/|youtube\.com/v/)
                ([a-zA-Z0-9_-]{11})
            )
            |
            ^([a-zA-Z0-9_-]{11})$
        ",
        )
        .unwrap()
    });

    let caps = ID_RE.captures(input.trim())?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
}
