//! # View Controller
//!
//! A [`Session`] is the UI-independent state behind the two screens:
//!
//! ```text
//!            new_note / edit_note
//!   ┌──────┐ ───────────────────▶ ┌────────┐
//!   │ List │                      │ Editor │
//!   └──────┘ ◀─────────────────── └────────┘
//!              back / save (ok)
//! ```
//!
//! The list side keeps the search query and the selected tag chip; both survive a
//! trip through the editor. The editor side keeps a [`NoteDraft`] and the raw text
//! of the tag field, which is only parsed into the draft's tag set on
//! [`Session::commit_tag_input`] (or on save).
//!
//! The session never owns the store. Operations that read or write notes borrow
//! the one [`NoteStore`] the UI holds.

use crate::commands::{self, CmdResult, EmptyState};
use crate::error::Result;
use crate::model::{Note, NoteDraft, NoteId};
use crate::store::{NoteStore, Storage};
use crate::tags::{join_tags, parse_tag_input};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    pub draft: NoteDraft,
    pub tag_input: String,
    /// Set when the tag field was typed into since it last matched the draft.
    tag_input_dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    List,
    Editor(EditorState),
}

/// A tag chip in the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChip {
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct Session {
    view: View,
    query: String,
    selected_tag: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            view: View::List,
            query: String::new(),
            selected_tag: String::new(),
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.view, View::Editor(_))
    }

    pub fn editor(&self) -> Option<&EditorState> {
        match &self.view {
            View::Editor(state) => Some(state),
            View::List => None,
        }
    }

    fn editor_mut(&mut self) -> Option<&mut EditorState> {
        match &mut self.view {
            View::Editor(state) => Some(state),
            View::List => None,
        }
    }

    // --- List view ---

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn selected_tag(&self) -> &str {
        &self.selected_tag
    }

    /// Selects `tag`, or clears the selection when `tag` is already selected.
    pub fn select_tag(&mut self, tag: &str) {
        if self.selected_tag == tag {
            self.selected_tag.clear();
        } else {
            self.selected_tag = tag.to_string();
        }
    }

    pub fn clear_tag(&mut self) {
        self.selected_tag.clear();
    }

    pub fn visible_notes<'a, S: Storage>(&self, store: &'a NoteStore<S>) -> Vec<&'a Note> {
        store.filter(&self.query, &self.selected_tag)
    }

    pub fn tag_chips<S: Storage>(&self, store: &NoteStore<S>) -> Vec<TagChip> {
        store
            .list_tags()
            .into_iter()
            .map(|name| TagChip {
                active: name == self.selected_tag,
                name,
            })
            .collect()
    }

    pub fn empty_state<S: Storage>(&self, store: &NoteStore<S>) -> Option<EmptyState> {
        commands::list::empty_state(store, self.visible_notes(store).len())
    }

    // --- Transitions ---

    /// Opens the editor on a blank note.
    pub fn new_note(&mut self) {
        self.view = View::Editor(EditorState::default());
    }

    /// Opens the editor on a copy of the stored note. Returns false (and stays on
    /// the current view) when no note has `id`.
    pub fn edit_note<S: Storage>(&mut self, store: &NoteStore<S>, id: NoteId) -> bool {
        let Some(note) = store.get(id) else {
            return false;
        };
        self.view = View::Editor(EditorState {
            draft: NoteDraft::from(note),
            tag_input: join_tags(&note.tags),
            tag_input_dirty: false,
        });
        true
    }

    /// Leaves the editor without saving.
    pub fn back(&mut self) {
        self.view = View::List;
    }

    /// Saves the draft. A draft with a blank title is rejected and the editor stays
    /// open; any other outcome returns to the list. Pending tag field input is
    /// committed first; an untouched tag field leaves the stored tags as they are.
    pub fn save<S: Storage>(&mut self, store: &mut NoteStore<S>) -> Result<CmdResult> {
        if self.editor().is_some_and(|state| state.tag_input_dirty) {
            self.commit_tag_input();
        }
        let Some(state) = self.editor() else {
            return Ok(CmdResult::default());
        };

        let result = commands::save::run(store, state.draft.clone())?;
        if !result.affected_notes.is_empty() {
            self.view = View::List;
        }
        Ok(result)
    }

    // --- Editor fields ---

    pub fn set_title(&mut self, title: impl Into<String>) {
        if let Some(state) = self.editor_mut() {
            state.draft.title = title.into();
        }
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        if let Some(state) = self.editor_mut() {
            state.draft.content = content.into();
        }
    }

    pub fn set_tag_input(&mut self, input: impl Into<String>) {
        if let Some(state) = self.editor_mut() {
            state.tag_input = input.into();
            state.tag_input_dirty = true;
        }
    }

    /// Parses the tag field into the draft's tag set.
    pub fn commit_tag_input(&mut self) {
        if let Some(state) = self.editor_mut() {
            state.draft.tags = parse_tag_input(&state.tag_input);
            state.tag_input_dirty = false;
        }
    }

    /// Drops `tag` from the draft and rewrites the tag field from what remains.
    pub fn remove_tag(&mut self, tag: &str) {
        if let Some(state) = self.editor_mut() {
            state.draft.tags.remove(tag);
            state.tag_input = join_tags(&state.draft.tags);
            state.tag_input_dirty = false;
        }
    }
}
