//! # Storage Layer
//!
//! Notes live in a key-value storage under a single key. The value is a JSON array
//! of notes, written in full after every mutation:
//!
//! ```text
//! [{"id":1718000000000,"title":"Groceries","content":"milk, eggs","tags":["home"]}]
//! ```
//!
//! Two pieces cooperate here:
//!
//! - [`Storage`]: the raw key-value I/O. [`fs::FileStorage`] keeps one
//!   `<key>.json` file per key in a data directory; [`memory::MemoryStorage`] keeps
//!   values in a map for tests.
//! - [`NoteStore`]: the in-memory collection bound to one key of a storage. It owns
//!   the ordering, id assignment and the derived views (tags, filtering).
//!
//! Reading never fails on bad data: an absent key or an unparsable value is an
//! empty collection. Only genuine I/O failures are reported.

use crate::error::Result;
use crate::filter::NoteFilter;
use crate::model::{Note, NoteDraft, NoteId};
use chrono::Utc;
use std::collections::{BTreeSet, HashSet};

pub mod fs;
pub mod memory;

/// Key the notes are stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "notes";

/// Raw key-value storage.
pub trait Storage {
    /// Read the value stored under `key`. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// What an [`NoteStore::upsert`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created(NoteId),
    Updated(NoteId),
    /// The draft had an empty title; nothing changed.
    Rejected,
}

impl UpsertOutcome {
    pub fn id(&self) -> Option<NoteId> {
        match self {
            UpsertOutcome::Created(id) | UpsertOutcome::Updated(id) => Some(*id),
            UpsertOutcome::Rejected => None,
        }
    }
}

/// The ordered note collection, bound to a storage key.
pub struct NoteStore<S: Storage> {
    storage: S,
    key: String,
    notes: Vec<Note>,
}

impl<S: Storage> NoteStore<S> {
    /// Binds to `key` in `storage` and loads whatever is persisted there.
    pub fn open(storage: S, key: impl Into<String>) -> Result<Self> {
        let mut store = Self {
            storage,
            key: key.into(),
            notes: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// Replaces the in-memory collection with the persisted one.
    pub fn load(&mut self) -> Result<()> {
        self.notes = match self.storage.get(&self.key)? {
            Some(raw) => decode_notes(&raw, &self.key),
            None => {
                tracing::debug!(key = %self.key, "no persisted notes, starting empty");
                Vec::new()
            }
        };
        Ok(())
    }

    /// Writes the full collection under the store key. Mutations undo their
    /// in-memory change when this fails.
    pub fn save(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.notes)?;
        self.storage.set(&self.key, &raw)?;
        tracing::debug!(key = %self.key, count = self.notes.len(), "saved notes");
        Ok(())
    }

    /// Creates or replaces a note from a draft, then saves.
    ///
    /// Drafts without an id get a fresh one and are appended. Drafts with an id
    /// replace the note carrying that id in place; if no note carries it, the draft
    /// is appended under that id.
    pub fn upsert(&mut self, draft: NoteDraft) -> Result<UpsertOutcome> {
        if !draft.has_title() {
            tracing::debug!("rejected note with empty title");
            return Ok(UpsertOutcome::Rejected);
        }

        let (outcome, undo) = match draft.id {
            None => {
                let id = self.next_id();
                self.notes.push(draft.into_note(id));
                (UpsertOutcome::Created(id), Undo::Pop)
            }
            Some(id) => match self.notes.iter().position(|n| n.id == id) {
                Some(pos) => {
                    let previous = std::mem::replace(&mut self.notes[pos], draft.into_note(id));
                    (UpsertOutcome::Updated(id), Undo::Restore(pos, previous))
                }
                None => {
                    tracing::debug!(%id, "no note with this id, appending");
                    self.notes.push(draft.into_note(id));
                    (UpsertOutcome::Created(id), Undo::Pop)
                }
            },
        };

        if let Err(e) = self.save() {
            match undo {
                Undo::Pop => {
                    self.notes.pop();
                }
                Undo::Restore(pos, previous) => self.notes[pos] = previous,
            }
            return Err(e);
        }
        Ok(outcome)
    }

    /// Deletes the note with `id`. Unknown ids are a no-op and trigger no write.
    pub fn remove(&mut self, id: NoteId) -> Result<Option<Note>> {
        let Some(pos) = self.notes.iter().position(|n| n.id == id) else {
            return Ok(None);
        };
        let removed = self.notes.remove(pos);
        if let Err(e) = self.save() {
            self.notes.insert(pos, removed);
            return Err(e);
        }
        Ok(Some(removed))
    }

    /// Every tag used by any note, deduplicated and sorted.
    pub fn list_tags(&self) -> Vec<String> {
        self.notes
            .iter()
            .flat_map(|n| n.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Notes matching `query` and `tag`, in collection order. Empty arguments match all.
    pub fn filter(&self, query: &str, tag: &str) -> Vec<&Note> {
        NoteFilter::new(query, tag).apply(&self.notes)
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Current time in milliseconds, bumped past the largest id in use. Once the
    /// id space is exhausted at the top, the lowest free id is reused.
    fn next_id(&self) -> NoteId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        match self.notes.iter().map(|n| n.id.0).max() {
            Some(max) if now <= max => match max.checked_add(1) {
                Some(next) => NoteId(next),
                None => self.lowest_free_id(),
            },
            _ => NoteId(now),
        }
    }

    fn lowest_free_id(&self) -> NoteId {
        let used: HashSet<u64> = self.notes.iter().map(|n| n.id.0).collect();
        // at most len ids are taken, so one of 0..=len is free
        (0..=used.len() as u64)
            .find(|candidate| !used.contains(candidate))
            .map(NoteId)
            .unwrap_or(NoteId(0))
    }
}

/// How to take back an in-memory mutation whose write failed.
enum Undo {
    Pop,
    Restore(usize, Note),
}

/// Parses a persisted collection, falling back to empty on malformed data.
fn decode_notes(raw: &str, key: &str) -> Vec<Note> {
    let notes: Vec<Note> = match serde_json::from_str(raw) {
        Ok(notes) => notes,
        Err(e) => {
            tracing::warn!(%key, error = %e, "persisted notes are malformed, starting empty");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    notes
        .into_iter()
        .filter(|note| {
            let fresh = seen.insert(note.id);
            if !fresh {
                tracing::warn!(%key, id = %note.id, "dropping note with duplicate id");
            }
            fresh
        })
        .collect()
}
