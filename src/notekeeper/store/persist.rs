use super::backend::SlotBackend;
use super::{Transition, TransitionListener};
use crate::error::{NotekeeperError, Result};
use crate::model::NoteState;

pub const DEFAULT_SLOT: &str = "store";

/// Writes the full state to a named slot after every transition, and reads it
/// back once at startup.
pub struct SnapshotPersister<B: SlotBackend> {
    backend: B,
    slot: String,
    pretty: bool,
}

impl<B: SlotBackend> SnapshotPersister<B> {
    pub fn new(backend: B, slot: impl Into<String>) -> Self {
        Self {
            backend,
            slot: slot.into(),
            pretty: false,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Returns the persisted state, if any. A slot that cannot be read or
    /// parsed counts as "no prior state".
    pub fn load(&self) -> Option<NoteState> {
        let raw = match self.backend.read_slot(&self.slot) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("could not read slot {:?}, starting fresh: {}", self.slot, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(state) => Some(state),
            Err(e) => {
                log::warn!(
                    "slot {:?} holds an unreadable snapshot, starting fresh: {}",
                    self.slot,
                    e
                );
                None
            }
        }
    }

    pub fn save(&self, state: &NoteState) -> Result<()> {
        let contents = if self.pretty {
            serde_json::to_string_pretty(state)
        } else {
            serde_json::to_string(state)
        }
        .map_err(NotekeeperError::Serialization)?;
        self.backend.write_slot(&self.slot, &contents)
    }
}

impl<B: SlotBackend> TransitionListener for SnapshotPersister<B> {
    fn after_transition(&mut self, transition: &Transition, state: &NoteState) -> Result<()> {
        log::trace!("persisting snapshot after {}", transition);
        self.save(state)
    }
}
