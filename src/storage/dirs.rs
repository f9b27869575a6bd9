//! Directory management
//!
//! Creates and removes sub-directories under the storage root.

use log::{error, info};
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

use crate::error::StoreError;
use crate::storage::resolver::resolve_directory;

/// Directory manager over a fixed storage root.
pub struct DirectoryManager {
    root: PathBuf,
}

impl DirectoryManager {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a directory and any missing ancestors. Idempotent.
    pub async fn create(&self, name: &str) -> Result<(), StoreError> {
        let path = resolve_directory(&self.root, name)?;

        fs::create_dir_all(&path).await.map_err(|e| {
            error!("Failed to create directory {}: {}", path.display(), e);
            StoreError::Io(e)
        })?;

        info!("Created directory {}", path.display());
        Ok(())
    }

    /// Recursively remove a directory and its contents. Removing a missing
    /// directory is not an error.
    pub async fn remove(&self, name: &str) -> Result<(), StoreError> {
        let path = resolve_directory(&self.root, name)?;

        match fs::remove_dir_all(&path).await {
            Ok(()) => {
                info!("Removed directory {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                error!("Failed to remove directory {}: {}", path.display(), e);
                Err(StoreError::Io(e))
            }
        }
    }
}
