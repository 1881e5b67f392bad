use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::{NoteStore, Storage};

pub fn run<S: Storage>(store: &mut NoteStore<S>, ids: &[NoteId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        match store.remove(*id)? {
            Some(note) => {
                result.add_message(CmdMessage::success(format!(
                    "Note deleted ({}): {}",
                    note.id, note.title
                )));
                result.affected_notes.push(note);
            }
            None => {
                result.add_message(CmdMessage::info(format!("Note {} not found", id)));
            }
        }
    }

    Ok(result)
}
