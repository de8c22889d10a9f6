//! Configuration settings for Tubescout.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub youtube: YoutubeSettings,
    pub subtitles: SubtitleSettings,
    pub server: ServerSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Directory for temporary subtitle files.
    pub temp_dir: String,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            temp_dir: std::env::temp_dir().to_string_lossy().into_owned(),
            log_level: "info".to_string(),
        }
    }
}

/// YouTube Data API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct YoutubeSettings {
    /// YouTube Data API v3 key. Overridden by the YOUTUBE_API_KEY
    /// environment variable when set.
    pub api_key: Option<String>,
}

/// Subtitle extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubtitleSettings {
    /// Subtitle language requested from yt-dlp.
    pub language: String,
    /// Optional cookies.txt passed to yt-dlp for authenticated access.
    /// Overridden by the COOKIE_TXT_PATH environment variable when set.
    pub cookie_file: Option<String>,
}

impl Default for SubtitleSettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            cookie_file: None,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to. Overridden by the TUBESCOUT_PORT environment
    /// variable when set.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    ///
    /// Environment variables override file values after loading.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        let mut settings = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Settings::default()
        };

        settings.apply_env_overrides();
        Ok(settings)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("YOUTUBE_API_KEY") {
            if !key.is_empty() {
                self.youtube.api_key = Some(key);
            }
        }
        if let Ok(path) = std::env::var("COOKIE_TXT_PATH") {
            if !path.is_empty() {
                self.subtitles.cookie_file = Some(path);
            }
        }
        if let Ok(port) = std::env::var("TUBESCOUT_PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
    }

    /// Validate settings needed for YouTube API access.
    ///
    /// Returns an error instead of exiting so the entry point decides how
    /// to handle a missing key.
    pub fn validate_api_key(&self) -> crate::error::Result<&str> {
        match self.youtube.api_key.as_deref() {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(crate::error::TubescoutError::Config(
                "YOUTUBE_API_KEY not set. Set it with: export YOUTUBE_API_KEY='...'".to_string(),
            )),
        }
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::TubescoutError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tubescout")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Get the expanded temp directory path.
    pub fn temp_dir(&self) -> PathBuf {
        Self::expand_path(&self.general.temp_dir)
    }

    /// Get the expanded cookie file path, if configured.
    pub fn cookie_file(&self) -> Option<PathBuf> {
        self.subtitles
            .cookie_file
            .as_deref()
            .map(Self::expand_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.subtitles.language, "en");
        assert_eq!(settings.server.port, 3000);
        assert!(settings.youtube.api_key.is_none());
    }

    #[test]
    fn test_validate_api_key_missing() {
        let settings = Settings::default();
        assert!(settings.validate_api_key().is_err());
    }

    #[test]
    fn test_validate_api_key_present() {
        let mut settings = Settings::default();
        settings.youtube.api_key = Some("AIza-test".to_string());
        assert_eq!(settings.validate_api_key().unwrap(), "AIza-test");
    }

    #[test]
    fn test_save_to_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut settings = Settings::default();
        settings.subtitles.language = "fr".to_string();
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(loaded.subtitles.language, "fr");
    }

    #[test]
    fn test_load_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[subtitles]\nlanguage = \"de\"\n\n[server]\nport = 8080\n",
        )
        .unwrap();

        let settings = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(settings.subtitles.language, "de");
        assert_eq!(settings.server.port, 8080);
    }
}
