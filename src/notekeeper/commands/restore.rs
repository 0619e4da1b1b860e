use crate::commands::{label, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::NoteStore;

pub fn run(store: &mut NoteStore) -> Result<CmdResult> {
    store.restore_trashed_note()?;
    let restored = store.state().user_notes[0].clone();

    store.reset_draft()?;
    store.set_dialog_visible(false)?;
    store.recompute_favourites()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note restored: {}",
        label(&restored.title)
    )));
    Ok(result.with_affected_notes(vec![restored]))
}
