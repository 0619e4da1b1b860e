//! # API Facade
//!
//! The API layer is a **thin facade** over the intents in `commands/`. It is
//! the single entry point for UI clients: it owns the [`NoteStore`] for the
//! lifetime of the application, wires the snapshot persister into it, and
//! exposes the dispatch surface (intents and field edits) and the read surface
//! (collections and draft).
//!
//! ## Lifecycle
//!
//! [`NotesApi::open`] is called once at startup. It subscribes the persister
//! and, if the durable slot already holds a snapshot, hydrates the store from
//! it before anything else can happen. From then on every transition is
//! written through to the slot.
//!
//! ## Generic Over SlotBackend
//!
//! - Production: `NotesApi<FsBackend>`
//! - Testing: `NotesApi<MemBackend>`

use crate::commands;
use crate::config::NotekeeperConfig;
use crate::error::Result;
use crate::model::{Draft, DraftField, Note, NoteState, Page, TrashScope};
use crate::notes::draft_page;
use crate::store::backend::SlotBackend;
use crate::store::persist::SnapshotPersister;
use crate::store::NoteStore;
use std::path::{Path, PathBuf};

pub struct NotesApi<B: SlotBackend> {
    store: NoteStore,
    backend: B,
    slot: String,
}

impl<B: SlotBackend + Clone + 'static> NotesApi<B> {
    pub fn open(backend: B, config: &NotekeeperConfig) -> Result<Self> {
        let slot_path = backend.slot_path(&config.slot);
        let persister = SnapshotPersister::new(backend.clone(), config.slot.clone())
            .with_pretty(config.pretty);
        let snapshot = persister.load();

        let mut store = NoteStore::new();
        store.subscribe(persister);
        if let Some(snapshot) = snapshot {
            log::info!(
                "restoring {} notes ({} trashed) from {}",
                snapshot.user_notes.len(),
                snapshot.trashed_notes.len(),
                slot_path.display()
            );
            store.hydrate_from_snapshot(snapshot)?;
        }

        Ok(Self {
            store,
            backend,
            slot: config.slot.clone(),
        })
    }

    // --- Intents ---

    pub fn move_to_trash(&mut self) -> Result<CmdResult> {
        commands::trash::run(&mut self.store)
    }

    pub fn restore_from_trash(&mut self) -> Result<CmdResult> {
        commands::restore::run(&mut self.store)
    }

    pub fn exit_note(&mut self, page: &Page) -> Result<CmdResult> {
        commands::exit::run(&mut self.store, page)
    }

    pub fn empty_trash(&mut self, scope: TrashScope) -> Result<CmdResult> {
        commands::empty_trash::run(&mut self.store, scope)
    }

    pub fn compose(&mut self) -> Result<CmdResult> {
        commands::compose::run(&mut self.store)
    }

    pub fn open_note(&mut self, id: &str) -> Result<CmdResult> {
        commands::open::run(&mut self.store, id)
    }

    // --- Direct field edits ---

    pub fn edit(&mut self, field: DraftField, value: impl Into<String>) -> Result<CmdResult> {
        commands::edit::run(&mut self.store, field, value)
    }

    pub fn toggle_favourite(&mut self) -> Result<CmdResult> {
        commands::edit::toggle_favourite(&mut self.store)
    }

    pub fn set_dialog_visible(&mut self, visible: bool) -> Result<CmdResult> {
        self.store.set_dialog_visible(visible)?;
        Ok(CmdResult::default())
    }

    // --- Reads ---

    pub fn list(&self, listing: commands::list::NoteListing) -> Result<CmdResult> {
        commands::list::run(self.store.state(), listing)
    }

    pub fn state(&self) -> &NoteState {
        self.store.state()
    }

    pub fn draft(&self) -> &Draft {
        self.store.draft()
    }

    pub fn user_notes(&self) -> &[Note] {
        &self.store.state().user_notes
    }

    pub fn favourite_notes(&self) -> &[Note] {
        &self.store.state().favourite_notes
    }

    pub fn trashed_notes(&self) -> &[Note] {
        &self.store.state().trashed_notes
    }

    /// The page the open note was opened from, for clients that do not
    /// track navigation themselves.
    pub fn current_page(&self) -> Page {
        draft_page(self.store.state())
    }

    pub fn slot_path(&self) -> PathBuf {
        self.backend.slot_path(&self.slot)
    }

    pub fn config(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::NoteListing;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
