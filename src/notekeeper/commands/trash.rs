use crate::commands::{label, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Destination;
use crate::store::NoteStore;

/// Sends the note being edited to the trash. A never-saved draft is committed
/// straight into the trash; an existing note is saved first, then moved.
pub fn run(store: &mut NoteStore) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.draft().is_note_new {
        store.commit_note(Destination::Trash)?;
        store.reset_draft()?;
    } else {
        store.save_draft_over_existing_note()?;
        store.trash_existing_note()?;
    }

    let trashed = store.state().trashed_notes[0].clone();

    store.reset_draft()?;
    store.set_dialog_visible(false)?;

    result.add_message(CmdMessage::success(format!(
        "Note moved to trash: {}",
        label(&trashed.title)
    )));
    Ok(result.with_affected_notes(vec![trashed]))
}
