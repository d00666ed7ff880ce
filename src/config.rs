use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::translate::debounce::DEFAULT_QUIET_WINDOW;
use crate::translate::mymemory::DEFAULT_ENDPOINT;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub translator: TranslatorConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_quiet_window_ms")]
    pub quiet_window_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_quiet_window_ms() -> u64 {
    DEFAULT_QUIET_WINDOW.as_millis() as u64
}

fn default_api_base_url() -> String {
    "http://localhost:3000".to_string()
}

impl Config {
    /// Load configuration from a YAML or JSON file, by extension.
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            let config: Config = serde_yaml::from_str(&content)?;
            Ok(config)
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            quiet_window_ms: default_quiet_window_ms(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
        }
    }
}
