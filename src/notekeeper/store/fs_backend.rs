use super::backend::SlotBackend;
use crate::error::{NotekeeperError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use uuid::Uuid;

const SLOT_EXT: &str = ".json";

/// Stores each slot as `<root>/<name>.json`.
#[derive(Debug, Clone)]
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NotekeeperError::Io)?;
        }
        Ok(())
    }
}

impl SlotBackend for FsBackend {
    fn read_slot(&self, name: &str) -> Result<Option<String>> {
        let path = self.slot_path(name);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(NotekeeperError::Io(e)),
        }
    }

    fn write_slot(&self, name: &str, contents: &str) -> Result<()> {
        self.ensure_dir()?;
        let path = self.slot_path(name);

        let tmp_file = self.root.join(format!(".{}-{}.tmp", name, Uuid::new_v4()));
        fs::write(&tmp_file, contents).map_err(NotekeeperError::Io)?;
        fs::rename(&tmp_file, &path).map_err(NotekeeperError::Io)?;

        Ok(())
    }

    fn clear_slot(&self, name: &str) -> Result<()> {
        match fs::remove_file(self.slot_path(name)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(NotekeeperError::Io(e)),
        }
    }

    fn slot_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}{}", name, SLOT_EXT))
    }
}
