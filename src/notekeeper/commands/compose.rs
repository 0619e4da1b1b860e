use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::NoteStore;

/// Opens the editor on a blank, never-saved note.
pub fn run(store: &mut NoteStore) -> Result<CmdResult> {
    store.reset_draft()?;
    store.set_note_new(true)?;
    store.set_note_empty(true)?;
    store.set_dialog_visible(true)?;
    Ok(CmdResult::default())
}
