use super::backend::SlotBackend;
use crate::error::{NotekeeperError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

/// In-memory slot backend for testing.
///
/// Clones share the same slots, so a test can keep a handle to inspect what
/// the store persisted after handing the backend over. `Rc`/`RefCell` because
/// the store is single-threaded.
#[derive(Clone, Default)]
pub struct MemBackend {
    slots: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<Cell<usize>>,
    simulate_write_error: Rc<Cell<bool>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful writes across all slots.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl SlotBackend for MemBackend {
    fn read_slot(&self, name: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(name).cloned())
    }

    fn write_slot(&self, name: &str, contents: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(NotekeeperError::Store("Simulated write error".to_string()));
        }
        self.slots
            .borrow_mut()
            .insert(name.to_string(), contents.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn clear_slot(&self, name: &str) -> Result<()> {
        self.slots.borrow_mut().remove(name);
        Ok(())
    }

    fn slot_path(&self, name: &str) -> PathBuf {
        PathBuf::from(format!("memory://{}", name))
    }
}
