//! JSON file implementation of the profile store
//!
//! The whole collection lives in one JSON array. The file is the source of
//! truth: every insert takes an exclusive lock on a sibling `.lock` file,
//! re-reads the document, checks for conflicts against what is on disk and
//! rewrites it through a temporary sibling and a rename. Several handles or
//! processes can share one store without losing or duplicating profiles,
//! and a crash leaves either the old or the new document on disk.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, info};

use super::InMemoryProfileStore;
use crate::error::{PersistenceError, UegenResult};
use crate::model::{DeviceProfile, Supi};
use crate::ports::ProfileStore;

/// Default file name used by the CLI
pub const DEFAULT_STORE_FILE: &str = "ue_profiles.json";

#[derive(Debug, Clone)]
pub struct FileProfileStore {
    path: PathBuf,
    lock_path: PathBuf,
    tmp_path: PathBuf,
}

impl FileProfileStore {
    /// Open the store at `path`; a missing file is an empty store
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Backend` if the file exists but cannot be
    /// read or is not a valid profile document.
    pub fn open(path: impl Into<PathBuf>) -> UegenResult<Self> {
        let path = path.into();
        let store = Self {
            lock_path: sibling(&path, ".lock"),
            tmp_path: sibling(&path, ".tmp"),
            path,
        };

        let current = store.load()?;
        info!(
            "Opened profile store {} with {} profiles",
            store.path.display(),
            current.len()
        );
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document as it is on disk right now
    fn load(&self) -> Result<InMemoryProfileStore, PersistenceError> {
        let profiles: Vec<DeviceProfile> = match fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str(&text).map_err(|e| PersistenceError::Backend {
                reason: format!("{} is not a valid profile store: {}", self.path.display(), e),
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(backend_io(&self.path, e)),
        };

        InMemoryProfileStore::from_profiles(profiles).map_err(|e| PersistenceError::Backend {
            reason: format!("{} is inconsistent: {}", self.path.display(), e),
        })
    }

    /// Exclusive lock held until the returned file is dropped
    fn lock(&self) -> Result<File, PersistenceError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| backend_io(parent, e))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(&self.lock_path)
            .map_err(|e| backend_io(&self.lock_path, e))?;
        file.lock_exclusive()
            .map_err(|e| backend_io(&self.lock_path, e))?;
        Ok(file)
    }

    fn write(&self, store: &InMemoryProfileStore) -> Result<(), PersistenceError> {
        let profiles: Vec<&DeviceProfile> = store.profiles().collect();
        let text = serde_json::to_string_pretty(&profiles).map_err(|e| {
            PersistenceError::Backend {
                reason: format!("failed to encode profiles: {}", e),
            }
        })?;

        fs::write(&self.tmp_path, text).map_err(|e| backend_io(&self.tmp_path, e))?;
        fs::rename(&self.tmp_path, &self.path).map_err(|e| backend_io(&self.path, e))?;
        debug!("Wrote {} profiles to {}", store.len(), self.path.display());
        Ok(())
    }
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from(DEFAULT_STORE_FILE));
    name.push(suffix);
    path.with_file_name(name)
}

fn backend_io(path: &Path, err: std::io::Error) -> PersistenceError {
    PersistenceError::Backend {
        reason: format!("{}: {}", path.display(), err),
    }
}

impl ProfileStore for FileProfileStore {
    fn insert_many(&mut self, profiles: &[DeviceProfile]) -> UegenResult<usize> {
        if profiles.is_empty() {
            return Ok(0);
        }

        let _lock = self.lock()?;
        let mut current = self.load()?;
        let inserted = current.insert_many(profiles)?;
        self.write(&current)?;
        Ok(inserted)
    }

    fn find(&self, supi: &Supi) -> UegenResult<DeviceProfile> {
        self.load()?.find(supi)
    }

    fn supis(&self) -> UegenResult<Vec<Supi>> {
        self.load()?.supis()
    }
}
