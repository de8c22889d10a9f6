//! Transcript command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::error::TubescoutError;
use crate::subtitles;
use crate::transcript::TranscriptService;
use anyhow::Result;

/// Fetch and print a video transcript.
pub async fn run_transcript(video: &str, settings: Settings) -> Result<()> {
    let Some(video_id) = subtitles::video_id_from_input(video) else {
        return Err(TubescoutError::InvalidInput(format!(
            "not a YouTube video ID or watch URL: {}",
            video
        ))
        .into());
    };

    let service = TranscriptService::new(&settings);

    let spinner = Output::spinner(&format!("Fetching transcript for {}...", video_id));
    let result = service.get_transcript(&video_id).await;
    spinner.finish_and_clear();

    match result {
        Ok(text) => {
            println!("{}", text);
            Ok(())
        }
        Err(e) => {
            Output::error(&e.to_string());
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rejects_malformed_input_before_fetching() {
        let err = run_transcript("not a video", Settings::default())
            .await
            .unwrap_err();

        let err = err.downcast::<TubescoutError>().unwrap();
        assert!(matches!(err, TubescoutError::InvalidInput(_)));
    }
}
