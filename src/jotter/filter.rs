//! # Note Filtering
//!
//! The list view narrows the collection with two independent predicates:
//!
//! - a free-text **query**, matched case-insensitively as a substring of the title,
//!   the content or any tag
//! - a **tag**, matched exactly (case-sensitive) against the note's tag set
//!
//! An empty query or an empty tag matches everything. The two predicates are ANDed
//! and the result keeps the collection order.

use crate::model::Note;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    pub query: String,
    pub tag: String,
}

impl NoteFilter {
    pub fn new(query: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            tag: tag.into(),
        }
    }

    pub fn matches(&self, note: &Note) -> bool {
        self.matches_query(note) && self.matches_tag(note)
    }

    pub fn apply<'a>(&self, notes: &'a [Note]) -> Vec<&'a Note> {
        notes.iter().filter(|note| self.matches(note)).collect()
    }

    fn matches_query(&self, note: &Note) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        note.title.to_lowercase().contains(&needle)
            || note.content.to_lowercase().contains(&needle)
            || note.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }

    fn matches_tag(&self, note: &Note) -> bool {
        self.tag.is_empty() || note.has_tag(&self.tag)
    }
}
