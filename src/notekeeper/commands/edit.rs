use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::DraftField;
use crate::store::NoteStore;

/// Sets one draft field and keeps the emptiness flag in step with the draft.
pub fn run(store: &mut NoteStore, field: DraftField, value: impl Into<String>) -> Result<CmdResult> {
    store.set_draft_field(field, value)?;
    if matches!(field, DraftField::Title | DraftField::Text) {
        let empty = !store.draft().has_content();
        if empty != store.draft().is_note_empty {
            store.set_note_empty(empty)?;
        }
    }
    Ok(CmdResult::default())
}

pub fn toggle_favourite(store: &mut NoteStore) -> Result<CmdResult> {
    store.toggle_draft_favourite()?;
    Ok(CmdResult::default())
}
