//! # Notekeeper Architecture
//!
//! Notekeeper is a **UI-agnostic state container** for a note-taking app. It
//! owns the active, favourite and trashed notes plus the single draft being
//! edited, and keeps all of it in a durable slot so that it survives restarts.
//! The terminal client in `main.rs` is just one UI dispatching into it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store, hydrates it at startup                   │
//! │  - Dispatch surface (intents, field edits) + read surface   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Intent Layer (commands/*.rs)                               │
//! │  - Ordered sequences of store transitions                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store Layer (store/)                                       │
//! │  - NoteStore: the only place state changes                  │
//! │  - Post-commit listeners; SnapshotPersister writes the slot │
//! │  - SlotBackend: FsBackend (production), MemBackend (tests)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//!
//! - A note id lives in at most one of `user_notes` and `trashed_notes`.
//! - `favourite_notes` is derived from `user_notes` and only ever recomputed.
//! - Ending an editing session (save, trash, discard) resets the draft.
//! - Lookups that must succeed fail fast with
//!   [`NoteNotFound`](error::NotekeeperError::NoteNotFound) and leave state
//!   untouched.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Intents and their results
//! - [`store`]: The note store, transitions, persistence and slot backends
//! - [`model`]: Core data types (`Note`, `Draft`, `NoteState`, tags)
//! - [`notes`]: Lookup helpers over note collections
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod notes;
pub mod store;
