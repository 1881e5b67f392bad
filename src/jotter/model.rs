use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a note. Serialized as a plain JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub u64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(NoteId)
    }
}

/// A stored note.
///
/// The field layout is the persisted layout: `{"id", "title", "content", "tags"}`.
/// Tags are a set, so duplicates cannot exist and iteration is always sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub tags: BTreeSet<String>,
}

impl Note {
    pub fn new(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// A note as it is being edited: `id` is `None` until the note is first saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub id: Option<NoteId>,
    pub title: String,
    pub content: String,
    pub tags: BTreeSet<String>,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_id(mut self, id: NoteId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// A draft is only persisted when its title has visible characters.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn into_note(self, id: NoteId) -> Note {
        Note {
            id,
            title: self.title,
            content: self.content,
            tags: self.tags,
        }
    }
}

impl From<&Note> for NoteDraft {
    fn from(note: &Note) -> Self {
        Self {
            id: Some(note.id),
            title: note.title.clone(),
            content: note.content.clone(),
            tags: note.tags.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_serializes_to_flat_layout() {
        let note = Note::new(NoteId(1), "Groceries", "milk, eggs").with_tags(["home"]);
        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"title":"Groceries","content":"milk, eggs","tags":["home"]}"#
        );
    }

    #[test]
    fn duplicate_tags_collapse_on_load() {
        let json = r#"{"id":7,"title":"T","content":"","tags":["b","a","b"]}"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.tags.iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn whitespace_title_is_not_a_title() {
        assert!(!NoteDraft::new("   \t", "body").has_title());
        assert!(NoteDraft::new(" x ", "").has_title());
    }

    #[test]
    fn note_id_parses_from_cli_text() {
        assert_eq!("42".parse::<NoteId>().unwrap(), NoteId(42));
        assert!("abc".parse::<NoteId>().is_err());
    }
}
