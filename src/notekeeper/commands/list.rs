use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoteListing {
    #[default]
    Active,
    Favourites,
    Trashed,
}

pub fn run(state: &NoteState, listing: NoteListing) -> Result<CmdResult> {
    let notes = match listing {
        NoteListing::Active => &state.user_notes,
        NoteListing::Favourites => &state.favourite_notes,
        NoteListing::Trashed => &state.trashed_notes,
    };

    let mut result = CmdResult::default().with_listed_notes(notes.clone());
    if notes.is_empty() {
        let what = match listing {
            NoteListing::Active => "No notes yet.",
            NoteListing::Favourites => "No favourite notes.",
            NoteListing::Trashed => "Trash is empty.",
        };
        result.add_message(CmdMessage::info(what));
    }
    Ok(result)
}
