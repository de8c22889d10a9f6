//! Config command implementation.

use crate::cli::{ConfigAction, Output};
use crate::config::Settings;
use anyhow::Result;

/// Show, locate, or initialize the configuration.
pub fn run_config(action: &ConfigAction, settings: Settings) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let content = toml::to_string_pretty(&settings)?;
            print!("{}", content);
        }
        ConfigAction::Path => {
            println!("{}", Settings::default_config_path().display());
        }
        ConfigAction::Init => {
            let path = Settings::default_config_path();
            settings.save_to(&path)?;
            Output::success(&format!("Wrote {}", path.display()));
        }
    }
    Ok(())
}
