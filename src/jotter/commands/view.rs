use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::{NoteStore, Storage};

pub fn run<S: Storage>(store: &NoteStore<S>, ids: &[NoteId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        match store.get(*id) {
            Some(note) => result.listed_notes.push(note.clone()),
            None => result.add_message(CmdMessage::warning(format!("Note {} not found", id))),
        }
    }

    Ok(result)
}
