use crate::errors::AppResult;
use crate::models::AppSettings;
use std::fs;
use std::path::Path;

pub const SETTINGS_FILE: &str = "settings.yaml";

pub fn load_settings(config_dir: &Path) -> AppSettings {
    let path = config_dir.join(SETTINGS_FILE);
    if !path.exists() {
        return AppSettings::default();
    }

    match read_settings(&path) {
        Ok(settings) => settings,
        Err(error) => {
            tracing::warn!(error = %error, path = %path.display(), "unreadable settings file, using defaults");
            AppSettings::default()
        }
    }
}

fn read_settings(path: &Path) -> AppResult<AppSettings> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&raw)?)
}
