use crate::commands::{label, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Destination, Page};
use crate::notes::find_note;
use crate::store::NoteStore;

/// Closes the editor. Outside the trash page a non-empty draft is saved
/// (created or updated) and an existing note edited down to nothing is
/// discarded; a new empty draft leaves no trace. Notes opened from the trash
/// are never written back.
pub fn run(store: &mut NoteStore, page: &Page) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !page.is_trash() {
        let draft = store.draft();
        let (is_empty, is_new) = (draft.is_note_empty, draft.is_note_new);

        if !is_empty {
            let id = if is_new {
                store.commit_note(Destination::Create)?
            } else {
                store.save_draft_over_existing_note()?;
                store.draft().note_id.clone()
            };
            store.recompute_favourites()?;

            if let Some(note) = find_note(&store.state().user_notes, &id).cloned() {
                let verb = if is_new { "created" } else { "saved" };
                result.add_message(CmdMessage::success(format!(
                    "Note {}: {}",
                    verb,
                    label(&note.title)
                )));
                result.affected_notes.push(note);
            }
        } else if !is_new {
            store.remove_empty_note()?;
            store.recompute_favourites()?;
            result.add_message(CmdMessage::info("Empty note discarded."));
        }
    } else {
        result.add_message(CmdMessage::warning(
            "Closed a trashed note. Trashed notes are read-only.",
        ));
    }

    store.reset_draft()?;
    store.set_dialog_visible(false)?;
    Ok(result)
}
