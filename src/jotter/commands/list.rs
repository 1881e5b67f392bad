use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::NoteFilter;
use crate::store::{NoteStore, Storage};

/// Why a list came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The store holds no notes at all.
    NoNotes,
    /// Notes exist but none match the current filter.
    NoMatches,
}

pub fn empty_state<S: Storage>(store: &NoteStore<S>, visible: usize) -> Option<EmptyState> {
    if visible > 0 {
        None
    } else if store.is_empty() {
        Some(EmptyState::NoNotes)
    } else {
        Some(EmptyState::NoMatches)
    }
}

/// Lists notes matching `filter`, along with every tag for the tag chips.
pub fn run<S: Storage>(store: &NoteStore<S>, filter: &NoteFilter) -> Result<CmdResult> {
    let listed: Vec<_> = filter.apply(store.notes()).into_iter().cloned().collect();

    let mut result = CmdResult::default().with_tags(store.list_tags());
    result.empty_state = empty_state(store, listed.len());
    Ok(result.with_listed_notes(listed))
}
