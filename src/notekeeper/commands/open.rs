use crate::commands::CmdResult;
use crate::error::{NotekeeperError, Result};
use crate::notes::find_note;
use crate::store::NoteStore;

/// Loads an existing note (active or trashed) into the draft and shows the
/// editor.
pub fn run(store: &mut NoteStore, id: &str) -> Result<CmdResult> {
    let state = store.state();
    let note = find_note(&state.user_notes, id)
        .or_else(|| find_note(&state.trashed_notes, id))
        .cloned()
        .ok_or_else(|| NotekeeperError::not_found(id, "any collection"))?;

    store.load_draft_from_note(&note)?;
    store.set_note_new(false)?;
    store.set_note_empty(note.is_blank())?;
    store.set_dialog_visible(true)?;

    Ok(CmdResult::default().with_affected_notes(vec![note]))
}
