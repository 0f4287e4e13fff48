//! Core SlotStore implementation

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while saving a slot
///
/// Loading never errors: a missing or undecodable slot falls back to the
/// type's default value.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Directory-backed store of named JSON slots
///
/// Each slot lives in its own file (`<dir>/<slot>.json`). Writes are full
/// re-encodes through a temp file and rename; there is no dirty-check and
/// no partial update. Slot values are small and writes are human-driven,
/// so the simplicity wins over efficiency here.
#[derive(Debug, Clone)]
pub struct SlotStore {
    dir: PathBuf,
}

impl SlotStore {
    /// Open a store rooted at the given directory, creating it if missing
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        debug!(?dir, "SlotStore::open: called");
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Root directory of this store
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of a slot's backing file
    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{}.json", slot))
    }

    /// Load a slot, falling back to the default value
    ///
    /// A missing file is the normal first-run case. A file that exists but
    /// fails to decode is discarded in favor of the default; the old bytes
    /// stay on disk until the next save, and the failure is logged.
    pub fn load<T: DeserializeOwned + Default>(&self, slot: &str) -> T {
        let path = self.slot_path(slot);
        debug!(%slot, ?path, "SlotStore::load: called");

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(%slot, "SlotStore::load: slot not found, using default");
                return T::default();
            }
            Err(e) => {
                warn!(%slot, error = %e, "SlotStore::load: read failed, using default");
                return T::default();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(e) => {
                warn!(%slot, error = %e, "SlotStore::load: decode failed, discarding stored value");
                T::default()
            }
        }
    }

    /// Save a slot, replacing any previous value
    ///
    /// Writes to a sibling temp file first and renames into place so a
    /// crash mid-write cannot leave a truncated slot behind.
    pub fn save<T: Serialize>(&self, slot: &str, value: &T) -> Result<(), StoreError> {
        let path = self.slot_path(slot);
        debug!(%slot, ?path, "SlotStore::save: called");

        let bytes = serde_json::to_vec_pretty(value)?;
        let tmp = self.dir.join(format!("{}.json.tmp", slot));
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &path)?;

        debug!(%slot, len = bytes.len(), "SlotStore::save: wrote slot");
        Ok(())
    }
}
