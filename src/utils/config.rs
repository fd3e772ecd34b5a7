use std::path::{Path, PathBuf};

use crate::error::{ClientError, ClientResult};
use crate::models::Settings;

const ENV_BACKEND_URL: &str = "JOURNAL_BACKEND_URL";
const ENV_SETTINGS_PATH: &str = "JOURNAL_SETTINGS";
const DEFAULT_SETTINGS_FILE: &str = "journal-settings.json";

pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

pub fn backend_url_from_env() -> Option<String> {
    env_value(ENV_BACKEND_URL)
}

pub fn apply_env_defaults(settings: &mut Settings) {
    if let Some(url) = backend_url_from_env() {
        settings.backend_url = url;
    }
}

fn settings_path() -> Option<PathBuf> {
    if let Some(explicit) = env_value(ENV_SETTINGS_PATH) {
        return Some(PathBuf::from(explicit));
    }
    let local = PathBuf::from(DEFAULT_SETTINGS_FILE);
    local.exists().then_some(local)
}

pub fn read_settings_file(path: &Path) -> ClientResult<Settings> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ClientError::Config(format!("cannot read {}: {}", path.display(), e)))?;
    serde_json::from_str::<Settings>(&content)
        .map_err(|e| ClientError::Config(format!("cannot parse {}: {}", path.display(), e)))
}

/// Defaults, then the settings file if any, then environment overrides.
pub fn load_settings() -> ClientResult<Settings> {
    let mut settings = match settings_path() {
        Some(path) => {
            log::info!("Loading settings from {}", path.display());
            read_settings_file(&path)?
        }
        None => Settings::default(),
    };
    apply_env_defaults(&mut settings);
    Ok(settings)
}
