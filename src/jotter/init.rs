use crate::api::{JotterApi, JotterPaths};
use crate::config::JotterConfig;
use crate::error::{JotterError, Result};
use crate::store::fs::FileStorage;
use crate::store::NoteStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "JOTTER_HOME";

pub struct JotterContext {
    pub api: JotterApi<FileStorage>,
    pub config: JotterConfig,
}

/// Resolves where notes and config live: an explicit path wins, then
/// `$JOTTER_HOME`, then the platform data directory.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }

    if let Ok(home) = std::env::var(HOME_ENV) {
        if !home.trim().is_empty() {
            return Ok(PathBuf::from(home));
        }
    }

    ProjectDirs::from("com", "jotter", "jotter")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| JotterError::Config("Could not determine data directory".to_string()))
}

pub fn initialize(explicit_dir: Option<&Path>) -> Result<JotterContext> {
    let data_dir = resolve_data_dir(explicit_dir)?;

    let config = JotterConfig::load(&data_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "unreadable config, using defaults");
        JotterConfig::default()
    });
    tracing::debug!(dir = %data_dir.display(), key = %config.storage_key, "opening store");

    let storage = FileStorage::new(data_dir.clone());
    let store = NoteStore::open(storage, config.storage_key.clone())?;
    let api = JotterApi::new(store, JotterPaths { data_dir });

    Ok(JotterContext { api, config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_dir_wins() {
        let dir = TempDir::new().unwrap();
        assert_eq!(resolve_data_dir(Some(dir.path())).unwrap(), dir.path());
    }

    #[test]
    fn initialize_uses_configured_key() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.json"),
            r#"{"storage_key":"work"}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("work.json"),
            r#"[{"id":1,"title":"From work","content":"","tags":[]}]"#,
        )
        .unwrap();

        let ctx = initialize(Some(dir.path())).unwrap();
        assert_eq!(ctx.api.store().key(), "work");
        assert_eq!(ctx.api.store().notes()[0].title, "From work");
    }

    #[test]
    fn broken_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.json"), "nope").unwrap();
        let ctx = initialize(Some(dir.path())).unwrap();
        assert_eq!(ctx.config, JotterConfig::default());
    }
}
