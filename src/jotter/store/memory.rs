use super::Storage;
use crate::error::{JotterError, Result};
use crate::model::Note;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
    simulate_write_error: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds `key` with a serialized collection.
    pub fn with_notes(mut self, key: &str, notes: &[Note]) -> Self {
        let raw = serde_json::to_string(notes).unwrap_or_else(|_| "[]".to_string());
        self.values.insert(key.to_string(), raw);
        self
    }

    /// Makes every subsequent `set` fail, for exercising error paths.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error {
            return Err(JotterError::Storage("Simulated write error".to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NoteId;

    #[test]
    fn get_returns_what_was_set() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn seeded_notes_are_json() {
        let storage = MemoryStorage::new().with_notes("notes", &[Note::new(NoteId(3), "T", "")]);
        let raw = storage.get("notes").unwrap().unwrap();
        assert!(raw.starts_with(r#"[{"id":3"#));
    }

    #[test]
    fn simulated_write_error_surfaces() {
        let mut storage = MemoryStorage::new();
        storage.set_simulate_write_error(true);
        assert!(matches!(
            storage.set("k", "v"),
            Err(JotterError::Storage(_))
        ));
    }
}
