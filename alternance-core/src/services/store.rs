// src/services/store.rs
//
// File-backed record store. The whole collection lives in one JSON array and
// is replaced wholesale on every save; there are no secondary indices, all
// lookups upstream are linear scans by id.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::RegistryError;
use crate::records::ContractRecord;

#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    // Serializes the write-and-rename step only; loads read unsynchronized
    // (accepted staleness window for a single-operator tool).
    write_lock: Mutex<()>,
}

impl RecordStore {
    /// Bind the store to its canonical file, creating the parent directory.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RegistryError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Load the full collection. Fails open: a missing, unreadable or corrupt
    /// file yields an empty collection, never an error.
    pub fn load(&self) -> Vec<ContractRecord> {
        match fs::read(&self.path) {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }

    /// Atomically replace the persisted collection: serialize to a sibling
    /// temp file, fsync, then rename over the canonical path. A crash
    /// mid-write leaves the previously committed state intact. Write failures
    /// surface to the caller.
    pub fn save(&self, records: &[ContractRecord]) -> Result<(), RegistryError> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let bytes = serde_json::to_vec_pretty(records)?;
        let tmp = self.tmp_path();
        {
            let mut f = fs::File::create(&tmp)?;
            f.write_all(&bytes)?;
            f.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut os = self.path.as_os_str().to_os_string();
        os.push(".tmp");
        PathBuf::from(os)
    }
}
