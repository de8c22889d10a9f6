//! Transcript orchestration.
//!
//! Ties the subtitle fetcher and VTT parser together and owns the
//! temporary caption file's lifecycle: the file is deleted on success and
//! on every failure path, and a deletion failure never surfaces.

use crate::config::Settings;
use crate::error::{Result, TubescoutError};
use crate::subtitles::{parse_vtt, SubtitleFetcher, YtDlpFetcher};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Fetches and flattens video transcripts.
pub struct TranscriptService {
    fetcher: Arc<dyn SubtitleFetcher>,
}

impl TranscriptService {
    /// Create a service backed by yt-dlp, configured from settings.
    pub fn new(settings: &Settings) -> Self {
        let fetcher = YtDlpFetcher::new(
            settings.temp_dir(),
            &settings.subtitles.language,
            settings.cookie_file(),
        );
        Self {
            fetcher: Arc::new(fetcher),
        }
    }

    /// Create a service with a custom fetcher (used in tests).
    pub fn with_fetcher(fetcher: Arc<dyn SubtitleFetcher>) -> Self {
        Self { fetcher }
    }

    /// Fetch the transcript of a video as plain text.
    ///
    /// Errors are split into three classes the caller can react to:
    /// `NotFound` (no captions or unresolvable id), `EmptyTranscript`
    /// (captions parsed to nothing), and `FetchFailed` (everything else).
    #[instrument(skip(self), fields(video_id = %video_id))]
    pub async fn get_transcript(&self, video_id: &str) -> Result<String> {
        let caption_path = self.fetcher.caption_path(video_id);

        let result = self.fetch_and_parse(video_id, &caption_path).await;

        // Cleanup runs on success and failure alike; a leftover temp file
        // is worse than a failed delete.
        remove_quietly(&caption_path);

        result.map_err(|e| match e {
            TubescoutError::NotFound(_)
            | TubescoutError::EmptyTranscript(_)
            | TubescoutError::FetchFailed(_)
            | TubescoutError::ToolNotFound(_) => e,
            other => TubescoutError::FetchFailed(other.to_string()),
        })
    }

    async fn fetch_and_parse(&self, video_id: &str, caption_path: &Path) -> Result<String> {
        self.fetcher.fetch(video_id).await?;

        let vtt_content = match tokio::fs::read_to_string(caption_path).await {
            Ok(content) => content,
            Err(_) => {
                // yt-dlp exits zero but writes nothing when the video has
                // no captions
                return Err(TubescoutError::NotFound(format!(
                    "no captions available for video: {}",
                    video_id
                )));
            }
        };

        let plain_text = parse_vtt(&vtt_content);

        if plain_text.is_empty() {
            return Err(TubescoutError::EmptyTranscript(video_id.to_string()));
        }

        Ok(plain_text)
    }
}

/// Best-effort removal of the temp caption file.
fn remove_quietly(path: &Path) {
    if let Err(e) = std::fs::remove_file(path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            debug!("Could not remove temp caption file {:?}: {}", path, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::PathBuf;

    /// Fetcher that writes canned VTT content to the caption path.
    struct FakeFetcher {
        dir: PathBuf,
        content: Option<&'static str>,
        fail_with: Option<fn() -> TubescoutError>,
    }

    impl FakeFetcher {
        fn writing(dir: PathBuf, content: &'static str) -> Self {
            Self {
                dir,
                content: Some(content),
                fail_with: None,
            }
        }

        fn silent(dir: PathBuf) -> Self {
            Self {
                dir,
                content: None,
                fail_with: None,
            }
        }

        fn failing(dir: PathBuf, err: fn() -> TubescoutError) -> Self {
            Self {
                dir,
                content: None,
                fail_with: Some(err),
            }
        }
    }

    #[async_trait]
    impl SubtitleFetcher for FakeFetcher {
        async fn fetch(&self, video_id: &str) -> Result<PathBuf> {
            if let Some(err) = self.fail_with {
                return Err(err());
            }
            let path = self.caption_path(video_id);
            if let Some(content) = self.content {
                tokio::fs::write(&path, content).await?;
            }
            Ok(path)
        }

        fn caption_path(&self, video_id: &str) -> PathBuf {
            self.dir.join(format!("{}.en.vtt", video_id))
        }
    }

    const SAMPLE_VTT: &str =
        "WEBVTT\n\n00:00:01.000 --> 00:00:02.000\nHello\n\n00:00:02.000 --> 00:00:03.000\nHello\n\n00:00:03.000 --> 00:00:04.000\nWorld";

    #[tokio::test]
    async fn test_success_parses_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = Arc::new(FakeFetcher::writing(dir.path().to_path_buf(), SAMPLE_VTT));
        let service = TranscriptService::with_fetcher(fetcher.clone());

        let text = service.get_transcript("abc123def45").await.unwrap();
        assert_eq!(text, "Hello World");

        // Temp file removed on the success path
        assert!(!fetcher.caption_path("abc123def45").exists());
    }

    #[tokio::test]
    async fn test_missing_caption_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = Arc::new(FakeFetcher::silent(dir.path().to_path_buf()));
        let service = TranscriptService::with_fetcher(fetcher);

        let err = service.get_transcript("abc123def45").await.unwrap_err();
        assert!(matches!(err, TubescoutError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_structure_only_track_is_empty_error() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = Arc::new(FakeFetcher::writing(
            dir.path().to_path_buf(),
            "WEBVTT\nKind: captions\n\n00:00:01.000 --> 00:00:02.000\n\n",
        ));
        let service = TranscriptService::with_fetcher(fetcher.clone());

        let err = service.get_transcript("abc123def45").await.unwrap_err();
        assert!(matches!(err, TubescoutError::EmptyTranscript(_)));

        // Temp file removed on the failure path too
        assert!(!fetcher.caption_path("abc123def45").exists());
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = Arc::new(FakeFetcher::failing(dir.path().to_path_buf(), || {
            TubescoutError::FetchFailed("yt-dlp failed: network unreachable".into())
        }));
        let service = TranscriptService::with_fetcher(fetcher);

        let err = service.get_transcript("abc123def45").await.unwrap_err();
        assert!(matches!(err, TubescoutError::FetchFailed(_)));
    }

    #[tokio::test]
    async fn test_unexpected_error_wrapped_as_fetch_failed() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = Arc::new(FakeFetcher::failing(dir.path().to_path_buf(), || {
            TubescoutError::Io(std::io::Error::other("disk on fire"))
        }));
        let service = TranscriptService::with_fetcher(fetcher);

        let err = service.get_transcript("abc123def45").await.unwrap_err();
        match err {
            TubescoutError::FetchFailed(msg) => assert!(msg.contains("disk on fire")),
            other => panic!("expected FetchFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_kinds_are_distinguishable() {
        let not_found = TubescoutError::NotFound("x".into());
        let fetch_failed = TubescoutError::FetchFailed("x".into());
        let empty = TubescoutError::EmptyTranscript("x".into());

        assert_ne!(not_found.kind(), fetch_failed.kind());
        assert_ne!(not_found.kind(), empty.kind());
        assert_ne!(fetch_failed.kind(), empty.kind());
    }
}
