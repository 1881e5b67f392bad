//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for note operations, whatever UI sits on top.
//!
//! The facade:
//! - **Owns** the one [`NoteStore`] instance for the lifetime of the UI
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`), never strings for display
//!
//! `JotterApi<S: Storage>` is generic over the storage backend:
//! - Production: `JotterApi<FileStorage>`
//! - Testing: `JotterApi<MemoryStorage>`

use crate::commands;
use crate::error::Result;
use crate::filter::NoteFilter;
use crate::model::{NoteDraft, NoteId};
use crate::store::{NoteStore, Storage};

pub struct JotterApi<S: Storage> {
    store: NoteStore<S>,
    paths: commands::JotterPaths,
}

impl<S: Storage> JotterApi<S> {
    pub fn new(store: NoteStore<S>, paths: commands::JotterPaths) -> Self {
        Self { store, paths }
    }

    pub fn save_note(&mut self, draft: NoteDraft) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, draft)
    }

    pub fn list_notes(&self, query: &str, tag: &str) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, &NoteFilter::new(query, tag))
    }

    pub fn view_notes(&self, ids: &[NoteId]) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, ids)
    }

    pub fn delete_notes(&mut self, ids: &[NoteId]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, ids)
    }

    pub fn list_tags(&self) -> Result<commands::CmdResult> {
        commands::tags::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn store(&self) -> &NoteStore<S> {
        &self.store
    }

    /// Mutable access for view controllers that drive the store directly.
    pub fn store_mut(&mut self) -> &mut NoteStore<S> {
        &mut self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, EmptyState, JotterPaths, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Note;
    use crate::store::memory::MemoryStorage;
    use std::path::PathBuf;

    fn api() -> JotterApi<MemoryStorage> {
        let storage = MemoryStorage::new().with_notes(
            "notes",
            &[
                Note::new(NoteId(1), "Groceries", "milk, eggs").with_tags(["home"]),
                Note::new(NoteId(2), "Report", "Q3 numbers").with_tags(["work", "urgent"]),
            ],
        );
        let store = NoteStore::open(storage, "notes").unwrap();
        JotterApi::new(
            store,
            JotterPaths {
                data_dir: PathBuf::from("/nonexistent"),
            },
        )
    }

    #[test]
    fn list_dispatches_query_and_tag() {
        let api = api();
        let result = api.list_notes("eggs", "").unwrap();
        assert_eq!(result.listed_notes[0].id, NoteId(1));
        let result = api.list_notes("", "urgent").unwrap();
        assert_eq!(result.listed_notes[0].id, NoteId(2));
    }

    #[test]
    fn save_and_delete_touch_the_owned_store() {
        let mut api = api();
        api.save_note(NoteDraft::new("Third", "")).unwrap();
        assert_eq!(api.store().len(), 3);

        api.delete_notes(&[NoteId(1)]).unwrap();
        assert!(api.list_notes("", "home").unwrap().listed_notes.is_empty());
    }

    #[test]
    fn view_and_tags_dispatch() {
        let api = api();
        assert_eq!(api.view_notes(&[NoteId(2)]).unwrap().listed_notes.len(), 1);
        assert_eq!(api.list_tags().unwrap().tags, vec!["home", "urgent", "work"]);
    }
}
