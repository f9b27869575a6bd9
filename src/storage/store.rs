//! Document operations
//!
//! Read, write, append, delete, and rename documents resolved against the
//! storage root, translating content through the document codec.

use log::{error, info};
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

use crate::codec::DocumentCodec;
use crate::error::StoreError;
use crate::storage::resolver::resolve_document;

/// Document store over a fixed storage root.
///
/// Operations are not coordinated between concurrent callers; overlapping
/// mutations on the same name are last-writer-wins.
pub struct DocumentStore {
    root: PathBuf,
    codec: Box<dyn DocumentCodec>,
}

impl DocumentStore {
    pub fn new(root: PathBuf, codec: Box<dyn DocumentCodec>) -> Self {
        Self { root, codec }
    }

    /// Read a document and return its decoded text content.
    pub async fn read(&self, name: &str) -> Result<String, StoreError> {
        let path = resolve_document(&self.root, name)?;

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound(name.to_string()));
            }
            Err(e) => {
                error!("Failed to read {}: {}", path.display(), e);
                return Err(StoreError::Io(e));
            }
        };

        let text = self.codec.decode(&bytes)?;
        info!("Read document {} ({} bytes)", path.display(), bytes.len());
        Ok(text)
    }

    /// Encode `content` as a fresh document and write it to the resolved
    /// path, overwriting any existing file.
    pub async fn write(&self, name: &str, content: &str) -> Result<(), StoreError> {
        let path = resolve_document(&self.root, name)?;
        let bytes = self.codec.encode(content)?;

        fs::write(&path, &bytes).await.map_err(|e| {
            error!("Failed to write {}: {}", path.display(), e);
            StoreError::Io(e)
        })?;

        info!("Wrote document {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    /// Append `content` to an existing document.
    ///
    /// Not an incremental append: the file is read, decoded, concatenated
    /// with a line-break separator, re-encoded as a new document, and
    /// overwritten. Formatting in the original document is not preserved.
    pub async fn append(&self, name: &str, content: &str) -> Result<(), StoreError> {
        let existing = self.read(name).await?;
        let combined = format!("{}\n{}", existing, content);
        self.write(name, &combined).await
    }

    /// Delete a document. Deleting a missing document reports not-found.
    pub async fn delete(&self, name: &str) -> Result<(), StoreError> {
        let path = resolve_document(&self.root, name)?;

        match fs::remove_file(&path).await {
            Ok(()) => {
                info!("Deleted document {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StoreError::NotFound(name.to_string()))
            }
            Err(e) => {
                error!("Failed to delete {}: {}", path.display(), e);
                Err(StoreError::Io(e))
            }
        }
    }

    /// Rename a document.
    ///
    /// Both names must carry the document extension; the new name is checked
    /// before any filesystem access. The old file must exist.
    pub async fn rename(&self, old_name: &str, new_name: &str) -> Result<(), StoreError> {
        let new_path = resolve_document(&self.root, new_name)?;
        let old_path = resolve_document(&self.root, old_name)?;

        if !fs::try_exists(&old_path).await.map_err(StoreError::Io)? {
            return Err(StoreError::NotFound(old_name.to_string()));
        }

        fs::rename(&old_path, &new_path).await.map_err(|e| {
            error!(
                "Failed to rename {} to {}: {}",
                old_path.display(),
                new_path.display(),
                e
            );
            StoreError::Io(e)
        })?;

        info!(
            "Renamed document {} to {}",
            old_path.display(),
            new_path.display()
        );
        Ok(())
    }
}
