//! Configuration module for Tubescout.
//!
//! Handles loading and validating application settings.

mod settings;

pub use settings::{GeneralSettings, ServerSettings, Settings, SubtitleSettings, YoutubeSettings};
