use super::Storage;
use crate::error::{JotterError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// File-backed storage: each key is a `<key>.json` file inside `root`.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of the file holding `key`.
    pub fn key_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(JotterError::Io)?;
        }
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(JotterError::Io(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        self.ensure_dir()?;

        // Write to a sibling temp file and rename so readers never see a partial value
        let tmp_path = self
            .root
            .join(format!(".{}-{}.tmp", key, std::process::id()));
        fs::write(&tmp_path, value).map_err(JotterError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(JotterError::Io(e));
        }
        Ok(())
    }
}

/// Keys whose files the data directory already uses for something else.
pub const RESERVED_KEYS: &[&str] = &["config"];

/// Keys become file names, so they are limited to a safe alphabet.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(JotterError::Storage("Storage key cannot be empty".to_string()));
    }
    if RESERVED_KEYS.contains(&key) {
        return Err(JotterError::Storage(format!(
            "Storage key '{}' is reserved",
            key
        )));
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(JotterError::Storage(format!(
            "Invalid storage key '{}': use letters, digits, '-' or '_'",
            key
        )));
    }
    Ok(())
}
