//! # Store Layer
//!
//! The [`NoteStore`] owns the whole application state: the three note
//! collections and the draft being edited. State only changes through the
//! store's named transitions, each of which is synchronous and all-or-nothing.
//!
//! ## Post-commit listeners
//!
//! After a transition has been applied, the store hands the completed
//! [`Transition`] and the new state to every registered
//! [`TransitionListener`]. Persistence is just one such listener
//! ([`persist::SnapshotPersister`]), which keeps the durable slot at most one
//! transition behind memory.
//!
//! ## Backends
//!
//! Snapshots are written through the [`backend::SlotBackend`] trait:
//!
//! - [`fs_backend::FsBackend`]: production, one JSON file per slot
//! - [`mem_backend::MemBackend`]: in-memory, for tests
//!
//! ```text
//! <data dir>/
//! ├── store.json      # Snapshot of the full state
//! └── config.json     # Configuration
//! ```

use crate::error::Result;
use crate::model::{Destination, DraftField, NoteState, TrashScope};
use std::fmt;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod note_store;
pub mod persist;

pub use note_store::NoteStore;

/// A completed state transition, as seen by listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    SetDraftField(DraftField),
    ToggleDraftFavourite,
    SetDialogVisible(bool),
    SetNoteEmpty(bool),
    SetNoteNew(bool),
    CommitNote(Destination),
    LoadDraftFromNote,
    SaveDraftOverExistingNote,
    ResetDraft,
    TrashExistingNote,
    RestoreTrashedNote,
    RemoveEmptyNote,
    PurgeTrash(TrashScope),
    RecomputeFavourites,
    HydrateFromSnapshot,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::SetDraftField(field) => write!(f, "setDraftField({})", field),
            Transition::ToggleDraftFavourite => f.write_str("toggleDraftFavourite"),
            Transition::SetDialogVisible(v) => write!(f, "setDialogVisible({})", v),
            Transition::SetNoteEmpty(v) => write!(f, "setNoteEmpty({})", v),
            Transition::SetNoteNew(v) => write!(f, "setNoteNew({})", v),
            Transition::CommitNote(dest) => write!(f, "commitNote({})", dest),
            Transition::LoadDraftFromNote => f.write_str("loadDraftFromNote"),
            Transition::SaveDraftOverExistingNote => f.write_str("saveDraftOverExistingNote"),
            Transition::ResetDraft => f.write_str("resetDraft"),
            Transition::TrashExistingNote => f.write_str("trashExistingNote"),
            Transition::RestoreTrashedNote => f.write_str("restoreTrashedNote"),
            Transition::RemoveEmptyNote => f.write_str("removeEmptyNote"),
            Transition::PurgeTrash(scope) => write!(f, "purgeTrash({})", scope),
            Transition::RecomputeFavourites => f.write_str("recomputeFavourites"),
            Transition::HydrateFromSnapshot => f.write_str("hydrateFromSnapshot"),
        }
    }
}

/// Observer invoked after every completed transition.
pub trait TransitionListener {
    fn after_transition(&mut self, transition: &Transition, state: &NoteState) -> Result<()>;
}

impl<F> TransitionListener for F
where
    F: FnMut(&Transition, &NoteState) -> Result<()>,
{
    fn after_transition(&mut self, transition: &Transition, state: &NoteState) -> Result<()> {
        self(transition, state)
    }
}
