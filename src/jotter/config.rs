use crate::error::{JotterError, Result};
use crate::store::fs::validate_key;
use crate::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PREVIEW_CHARS: usize = 100;

/// Configuration for jotter, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JotterConfig {
    /// Storage key the note collection is saved under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Number of content characters shown in list previews
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_preview_chars() -> usize {
    DEFAULT_PREVIEW_CHARS
}

impl Default for JotterConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

impl JotterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(JotterError::Io)?;
        let config: JotterConfig =
            serde_json::from_str(&content).map_err(JotterError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(JotterError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(JotterError::Serialization)?;
        fs::write(config_path, content).map_err(JotterError::Io)?;
        Ok(())
    }

    /// Known keys, in display order
    pub fn keys() -> &'static [&'static str] {
        &["storage-key", "preview-chars"]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "preview-chars" => Some(self.preview_chars.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => {
                validate_key(value).map_err(|e| JotterError::Config(e.to_string()))?;
                self.storage_key = value.to_string();
            }
            "preview-chars" => {
                let n: usize = value.trim().parse().map_err(|_| {
                    JotterError::Config(format!("preview-chars must be a number, got '{}'", value))
                })?;
                if n == 0 {
                    return Err(JotterError::Config(
                        "preview-chars must be greater than zero".to_string(),
                    ));
                }
                self.preview_chars = n;
            }
            other => {
                return Err(JotterError::Config(format!("Unknown config key: {}", other)));
            }
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        Self::keys()
            .iter()
            .filter_map(|k| self.get(k).map(|v| (k.to_string(), v)))
            .collect()
    }
}
