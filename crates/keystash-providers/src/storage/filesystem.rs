//! Filesystem storage provider implementation
//!
//! Stores each key as its own file under a base directory. File names are
//! the hex encoding of the key, so any key maps to a portable file name.
//!
//! Writes land in a temporary file first and are renamed into place, so a
//! reader never observes a partially written entry. On unix, entries are
//! readable only by their owner.

use crate::constants::{
    FILESYSTEM_ENTRY_EXTENSION, FILESYSTEM_ENTRY_MODE, FILESYSTEM_MAX_KEY_BYTES,
    FILESYSTEM_TEMP_EXTENSION,
};
use keystash_application::registry::{
    STORAGE_PROVIDERS, StorageProviderConfig, StorageProviderEntry,
};
use keystash_domain::error::{Error, Result};
use keystash_domain::ports::SecureStorageProvider;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Filesystem storage provider
#[derive(Debug, Clone)]
pub struct FilesystemStorageProvider {
    base_path: PathBuf,
}

impl FilesystemStorageProvider {
    /// Create a provider rooted at `base_path`, creating the directory if needed
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path).map_err(|e| {
            Error::io_with_source(
                format!("Failed to create storage directory {}", base_path.display()),
                e,
            )
        })?;
        Ok(Self { base_path })
    }

    /// Directory holding the entries
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of the file backing `key`
    fn entry_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() {
            return Err(Error::invalid_argument("Storage key must not be empty"));
        }
        if key.len() > FILESYSTEM_MAX_KEY_BYTES {
            return Err(Error::invalid_argument(format!(
                "Storage key is {} bytes, the filesystem provider accepts at most {}",
                key.len(),
                FILESYSTEM_MAX_KEY_BYTES
            )));
        }
        Ok(self
            .base_path
            .join(format!("{}.{}", hex::encode(key), FILESYSTEM_ENTRY_EXTENSION)))
    }

    fn try_put(&self, key: &str, data: &[u8]) -> Result<()> {
        let path = self.entry_path(key)?;
        let temp_path = self.base_path.join(format!(
            "{}.{}",
            uuid::Uuid::new_v4(),
            FILESYSTEM_TEMP_EXTENSION
        ));

        let written = write_private(&temp_path, data).and_then(|()| {
            fs::rename(&temp_path, &path).map_err(|e| {
                Error::io_with_source(format!("Failed to move entry into {}", path.display()), e)
            })
        });

        if written.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        written
    }

    fn try_get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.entry_path(key)?;
        match fs::read(&path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::io_with_source(
                format!("Failed to read {}", path.display()),
                e,
            )),
        }
    }

    fn try_delete(&self, key: &str) -> Result<()> {
        let path = self.entry_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::io_with_source(
                format!("Failed to remove {}", path.display()),
                e,
            )),
        }
    }
}

fn write_private(path: &Path, data: &[u8]) -> Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILESYSTEM_ENTRY_MODE);
    }
    #[cfg(not(unix))]
    let _ = FILESYSTEM_ENTRY_MODE;

    let mut file = options
        .open(path)
        .map_err(|e| Error::io_with_source(format!("Failed to create {}", path.display()), e))?;
    file.write_all(data)?;
    file.sync_all()?;
    Ok(())
}

impl SecureStorageProvider for FilesystemStorageProvider {
    fn put(&self, key: &str, data: &[u8]) -> bool {
        match self.try_put(key, data) {
            Ok(()) => {
                debug!(key = %key, bytes = data.len(), "Stored entry on disk");
                true
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Filesystem put failed");
                false
            }
        }
    }

    fn get(&self, key: &str) -> Option<Vec<u8>> {
        match self.try_get(key) {
            Ok(data) => data,
            Err(e) => {
                warn!(key = %key, error = %e, "Filesystem get failed");
                None
            }
        }
    }

    fn delete(&self, key: &str) -> bool {
        match self.try_delete(key) {
            Ok(()) => true,
            Err(e) => {
                warn!(key = %key, error = %e, "Filesystem delete failed");
                false
            }
        }
    }

    fn provider_name(&self) -> &str {
        "filesystem"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(STORAGE_PROVIDERS)]
static FILESYSTEM_PROVIDER: StorageProviderEntry = StorageProviderEntry {
    name: "filesystem",
    description: "Filesystem storage provider (one private file per key)",
    factory: |config: &StorageProviderConfig| {
        let base = config
            .path
            .clone()
            .ok_or_else(|| "Filesystem storage requires a path".to_string())?;
        let base = match &config.namespace {
            Some(namespace) => base.join(namespace),
            None => base,
        };
        let provider = FilesystemStorageProvider::new(base).map_err(|e| e.to_string())?;
        Ok(Arc::new(provider))
    },
};
