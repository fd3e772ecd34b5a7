use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
    #[serde(default)]
    pub analysis: AnalysisSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            analysis: AnalysisSettings::default(),
        }
    }
}

fn default_backend_url() -> String {
    "http://localhost:8001".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Quiet period after the last content edit before analysis fires.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Minimum trimmed content length, in characters, worth analyzing.
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_chars: default_min_chars(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    1000
}

fn default_min_chars() -> usize {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_file_keeps_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"analysis":{"debounce_ms":250}}"#).unwrap();
        assert_eq!(settings.backend_url, "http://localhost:8001");
        assert_eq!(settings.analysis.debounce_ms, 250);
        assert_eq!(settings.analysis.min_chars, 20);
    }
}
