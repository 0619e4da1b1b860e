use super::{Transition, TransitionListener};
use crate::error::{NotekeeperError, Result};
use crate::model::{
    Destination, Draft, DraftField, Note, NoteState, TrashScope, TRASHED_NOTES, USER_NOTES,
};
use crate::notes::{favourites_of, filter_notes, find_note, find_note_mut};
use chrono::Utc;

/// Owner of the note collections and the draft.
///
/// Every public `&mut self` method is a transition: it applies its change in
/// full (or fails before touching anything) and then notifies listeners.
#[derive(Default)]
pub struct NoteStore {
    state: NoteState,
    listeners: Vec<Box<dyn TransitionListener>>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: NoteState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
        }
    }

    pub fn subscribe<L>(&mut self, listener: L)
    where
        L: TransitionListener + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn state(&self) -> &NoteState {
        &self.state
    }

    pub fn draft(&self) -> &Draft {
        &self.state.draft
    }

    fn commit(&mut self, transition: Transition) -> Result<()> {
        log::debug!("transition {}", transition);
        for listener in self.listeners.iter_mut() {
            listener.after_transition(&transition, &self.state)?;
        }
        Ok(())
    }

    // --- Draft ---

    pub fn set_draft_field(&mut self, field: DraftField, value: impl Into<String>) -> Result<()> {
        let draft = &mut self.state.draft;
        let slot = match field {
            DraftField::Title => &mut draft.note_title,
            DraftField::Text => &mut draft.note_text,
            DraftField::Theme => &mut draft.note_theme,
            DraftField::Font => &mut draft.note_font,
            DraftField::Preset => &mut draft.note_preset,
        };
        *slot = value.into();
        self.commit(Transition::SetDraftField(field))
    }

    pub fn toggle_draft_favourite(&mut self) -> Result<()> {
        self.state.draft.note_is_favourite = !self.state.draft.note_is_favourite;
        self.commit(Transition::ToggleDraftFavourite)
    }

    pub fn set_dialog_visible(&mut self, visible: bool) -> Result<()> {
        self.state.draft.is_note_dialog_visible = visible;
        self.commit(Transition::SetDialogVisible(visible))
    }

    pub fn set_note_empty(&mut self, empty: bool) -> Result<()> {
        self.state.draft.is_note_empty = empty;
        self.commit(Transition::SetNoteEmpty(empty))
    }

    pub fn set_note_new(&mut self, new: bool) -> Result<()> {
        self.state.draft.is_note_new = new;
        self.commit(Transition::SetNoteNew(new))
    }

    /// Copies a note's persisted fields into the draft, leaving the UI flags alone.
    pub fn load_draft_from_note(&mut self, note: &Note) -> Result<()> {
        let draft = &mut self.state.draft;
        draft.note_id = note.id.clone();
        draft.note_title = note.title.clone();
        draft.note_text = note.text.clone();
        draft.note_theme = note.theme.clone();
        draft.note_preset = note.preset.clone();
        draft.note_font = note.font.clone();
        draft.note_is_favourite = note.favourite;
        self.commit(Transition::LoadDraftFromNote)
    }

    /// Restores the draft's note fields to defaults. Dialog and emptiness flags
    /// are owned by the UI and survive a reset.
    pub fn reset_draft(&mut self) -> Result<()> {
        let defaults = Draft::default();
        let draft = &mut self.state.draft;
        draft.note_id = defaults.note_id;
        draft.note_title = defaults.note_title;
        draft.note_text = defaults.note_text;
        draft.note_theme = defaults.note_theme;
        draft.note_font = defaults.note_font;
        draft.note_preset = defaults.note_preset;
        draft.note_is_favourite = defaults.note_is_favourite;
        self.commit(Transition::ResetDraft)
    }

    // --- Collections ---

    /// Builds a new note from the draft and prepends it to the destination
    /// collection. Returns the new note's id.
    pub fn commit_note(&mut self, destination: Destination) -> Result<String> {
        let note = Note::from_draft(&self.state.draft);
        let id = note.id.clone();
        match destination {
            Destination::Create => self.state.user_notes.insert(0, note),
            Destination::Trash => self.state.trashed_notes.insert(0, note),
        }
        self.commit(Transition::CommitNote(destination))?;
        Ok(id)
    }

    pub fn save_draft_over_existing_note(&mut self) -> Result<()> {
        let draft = &self.state.draft;
        let note = find_note_mut(&mut self.state.user_notes, &draft.note_id)
            .ok_or_else(|| NotekeeperError::not_found(&draft.note_id, USER_NOTES))?;

        note.title = draft.note_title.trim().to_string();
        note.text = draft.note_text.clone();
        note.preset = draft.note_preset.clone();
        note.theme = draft.note_theme.clone();
        note.font = draft.note_font.clone();
        note.favourite = draft.note_is_favourite;
        // Never move backwards, even if the wall clock does.
        note.update_date = Utc::now().max(note.update_date);

        self.commit(Transition::SaveDraftOverExistingNote)
    }

    pub fn trash_existing_note(&mut self) -> Result<()> {
        let id = self.state.draft.note_id.clone();
        let note = find_note(&self.state.user_notes, &id)
            .cloned()
            .ok_or_else(|| NotekeeperError::not_found(&id, USER_NOTES))?;

        self.state.trashed_notes.insert(0, note);
        self.state.user_notes = filter_notes(&self.state.user_notes, &id);
        self.state.favourite_notes = favourites_of(&self.state.user_notes);
        self.commit(Transition::TrashExistingNote)
    }

    /// Moves the draft's note back to the active collection. Favourites are
    /// left stale; callers follow up with `recompute_favourites`.
    pub fn restore_trashed_note(&mut self) -> Result<()> {
        let id = self.state.draft.note_id.clone();
        let note = find_note(&self.state.trashed_notes, &id)
            .cloned()
            .ok_or_else(|| NotekeeperError::not_found(&id, TRASHED_NOTES))?;

        self.state.user_notes.insert(0, note);
        self.state.trashed_notes = filter_notes(&self.state.trashed_notes, &id);
        self.commit(Transition::RestoreTrashedNote)
    }

    pub fn remove_empty_note(&mut self) -> Result<()> {
        self.state.user_notes = filter_notes(&self.state.user_notes, &self.state.draft.note_id);
        self.commit(Transition::RemoveEmptyNote)
    }

    pub fn purge_trash(&mut self, scope: TrashScope) -> Result<()> {
        match scope {
            TrashScope::One => {
                self.state.trashed_notes =
                    filter_notes(&self.state.trashed_notes, &self.state.draft.note_id);
            }
            TrashScope::All => self.state.trashed_notes.clear(),
        }
        self.commit(Transition::PurgeTrash(scope))
    }

    pub fn recompute_favourites(&mut self) -> Result<()> {
        self.state.favourite_notes = favourites_of(&self.state.user_notes);
        self.commit(Transition::RecomputeFavourites)
    }

    /// Replaces the whole state with a previously persisted snapshot.
    pub fn hydrate_from_snapshot(&mut self, snapshot: NoteState) -> Result<()> {
        self.state = snapshot;
        self.commit(Transition::HydrateFromSnapshot)
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Builds a store pre-populated with notes whose ids are predictable
    /// (`note-id-1`, `note-id-2`, ...).
    #[derive(Default)]
    pub struct StoreFixture {
        pub state: NoteState,
        next_id: usize,
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self::default()
        }

        fn make_note(&mut self, title: &str, favourite: bool) -> Note {
            self.next_id += 1;
            let draft = Draft {
                note_title: title.to_string(),
                note_text: format!("Content for {}", title),
                note_is_favourite: favourite,
                ..Draft::default()
            };
            let mut note = Note::from_draft(&draft);
            note.id = format!("note-id-{}", self.next_id);
            note
        }

        /// Appends, so notes added first end up first (newest-first order).
        pub fn with_note(mut self, title: &str) -> Self {
            let note = self.make_note(title, false);
            self.state.user_notes.push(note);
            self
        }

        pub fn with_favourite_note(mut self, title: &str) -> Self {
            let note = self.make_note(title, true);
            self.state.user_notes.push(note);
            self.state.favourite_notes = favourites_of(&self.state.user_notes);
            self
        }

        pub fn with_trashed_note(mut self, title: &str) -> Self {
            let note = self.make_note(title, false);
            self.state.trashed_notes.push(note);
            self
        }

        pub fn build(self) -> NoteStore {
            NoteStore::with_state(self.state)
        }
    }
}
