use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{NoteStore, Storage};

/// Lists every tag in use, sorted.
pub fn run<S: Storage>(store: &NoteStore<S>) -> Result<CmdResult> {
    let tags = store.list_tags();
    let mut result = CmdResult::default();

    if tags.is_empty() {
        result.add_message(CmdMessage::info("No tags in use"));
    }

    Ok(result.with_tags(tags))
}
