use crate::error::Result;
use std::path::PathBuf;

/// Raw key-value slot I/O.
/// This trait handles "where the bytes go" (filesystem vs memory),
/// while `SnapshotPersister` handles what goes into a slot and when.
pub trait SlotBackend {
    /// Read the raw contents of a slot.
    /// Returns Ok(None) if the slot has never been written.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_slot(&self, name: &str) -> Result<Option<String>>;

    /// Overwrite a slot with new contents.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_slot(&self, name: &str, contents: &str) -> Result<()>;

    /// Remove a slot. Removing a slot that does not exist is not an error.
    fn clear_slot(&self, name: &str) -> Result<()>;

    /// Location of the slot. For FsBackend, this is the real path.
    /// For MemBackend, a virtual path.
    fn slot_path(&self, name: &str) -> PathBuf;
}
