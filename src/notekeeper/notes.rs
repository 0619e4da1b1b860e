//! Lookup helpers over note collections.

use crate::model::{Note, NoteState, Page};

/// Finds the note with `id`. Callers that expect the note to exist turn
/// `None` into [`NotekeeperError::NoteNotFound`](crate::error::NotekeeperError).
pub fn find_note<'a>(notes: &'a [Note], id: &str) -> Option<&'a Note> {
    notes.iter().find(|note| note.id == id)
}

pub fn find_note_mut<'a>(notes: &'a mut [Note], id: &str) -> Option<&'a mut Note> {
    notes.iter_mut().find(|note| note.id == id)
}

/// Returns a copy of `notes` without the note matching `id`.
pub fn filter_notes(notes: &[Note], id: &str) -> Vec<Note> {
    notes.iter().filter(|note| note.id != id).cloned().collect()
}

pub fn favourites_of(notes: &[Note]) -> Vec<Note> {
    notes.iter().filter(|note| note.favourite).cloned().collect()
}

/// The page the open note belongs to. A draft whose note sits in the trash
/// was opened from the trash page; anything else counts as home.
pub fn draft_page(state: &NoteState) -> Page {
    if find_note(&state.trashed_notes, &state.draft.note_id).is_some() {
        Page::Trash
    } else {
        Page::Home
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Draft, Note};

    fn note(id: &str, favourite: bool) -> Note {
        let mut note = Note::from_draft(&Draft::default());
        note.id = id.to_string();
        note.favourite = favourite;
        note
    }

    #[test]
    fn finds_by_id() {
        let notes = vec![note("a", false), note("b", false)];
        assert_eq!(find_note(&notes, "b").map(|n| n.id.as_str()), Some("b"));
        assert!(find_note(&notes, "c").is_none());
    }

    #[test]
    fn filter_removes_only_matching_note() {
        let notes = vec![note("a", false), note("b", false), note("c", false)];
        let ids: Vec<_> = filter_notes(&notes, "b").into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn filter_with_absent_id_is_unchanged_copy() {
        let notes = vec![note("a", false)];
        assert_eq!(filter_notes(&notes, "zzz"), notes);
    }

    #[test]
    fn favourites_keep_order() {
        let notes = vec![note("a", true), note("b", false), note("c", true)];
        let ids: Vec<_> = favourites_of(&notes).into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn draft_page_follows_the_open_note() {
        let mut state = NoteState {
            user_notes: vec![note("a", false)],
            trashed_notes: vec![note("t", false)],
            ..NoteState::default()
        };
        assert_eq!(draft_page(&state), Page::Home);

        state.draft.note_id = "a".into();
        assert_eq!(draft_page(&state), Page::Home);

        state.draft.note_id = "t".into();
        assert_eq!(draft_page(&state), Page::Trash);
    }
}
