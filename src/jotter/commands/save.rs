use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteDraft;
use crate::store::{NoteStore, Storage, UpsertOutcome};

pub fn run<S: Storage>(store: &mut NoteStore<S>, draft: NoteDraft) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let (verb, id) = match store.upsert(draft)? {
        UpsertOutcome::Created(id) => ("created", id),
        UpsertOutcome::Updated(id) => ("updated", id),
        UpsertOutcome::Rejected => {
            result.add_message(CmdMessage::warning("Title cannot be empty, note not saved"));
            return Ok(result);
        }
    };

    if let Some(note) = store.get(id) {
        let message = CmdMessage::success(format!("Note {} ({}): {}", verb, note.id, note.title));
        result = result.with_affected_notes(vec![note.clone()]);
        result.add_message(message);
    }

    Ok(result)
}
