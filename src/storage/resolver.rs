//! Name resolution and validation
//!
//! Maps user-supplied names to confined locations under the storage root.

use std::path::{Component, Path, PathBuf};

use crate::error::StoreError;

/// Extension recognized for document targets
pub const DOC_EXTENSION: &str = ".docx";

/// Resolve a document name to a path under the storage root.
///
/// The name must end with the recognized document extension. Any directory
/// components in the supplied name are stripped before joining, so the result
/// always lies directly under the root.
pub fn resolve_document(root: &Path, name: &str) -> Result<PathBuf, StoreError> {
    if !name.ends_with(DOC_EXTENSION) {
        return Err(StoreError::InvalidName(format!(
            "invalid file type, only {} files are allowed",
            DOC_EXTENSION
        )));
    }

    let file_name = Path::new(name)
        .file_name()
        .ok_or_else(|| StoreError::InvalidName(format!("invalid file name: {}", name)))?;

    Ok(root.join(file_name))
}

/// Resolve a directory name to a path under the storage root.
///
/// Nested relative paths are allowed; empty names, absolute paths, and any
/// parent-directory component are rejected.
pub fn resolve_directory(root: &Path, name: &str) -> Result<PathBuf, StoreError> {
    if name.is_empty() {
        return Err(StoreError::InvalidName("directory name is required".into()));
    }

    let relative = Path::new(name);
    if relative.is_absolute() {
        return Err(StoreError::InvalidName(format!(
            "absolute path not allowed: {}",
            name
        )));
    }

    let mut has_normal = false;
    for component in relative.components() {
        match component {
            Component::Normal(_) => has_normal = true,
            Component::CurDir => {}
            _ => {
                return Err(StoreError::InvalidName(format!(
                    "path escapes storage root: {}",
                    name
                )));
            }
        }
    }

    // Names like "." resolve to the root itself, not a nested directory
    if !has_normal {
        return Err(StoreError::InvalidName(format!(
            "directory name does not name a sub-directory: {}",
            name
        )));
    }

    Ok(root.join(relative))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_document_valid() {
        let root = Path::new("/srv/storage");
        let path = resolve_document(root, "notes.docx").unwrap();
        assert_eq!(path, root.join("notes.docx"));
    }

    #[test]
    fn test_resolve_document_wrong_extension() {
        let root = Path::new("/srv/storage");
        assert!(matches!(
            resolve_document(root, "notes.txt"),
            Err(StoreError::InvalidName(_))
        ));
        assert!(matches!(
            resolve_document(root, "notes"),
            Err(StoreError::InvalidName(_))
        ));
        assert!(matches!(
            resolve_document(root, ""),
            Err(StoreError::InvalidName(_))
        ));
    }

    #[test]
    fn test_resolve_document_strips_directories() {
        let root = Path::new("/srv/storage");
        assert_eq!(
            resolve_document(root, "../../etc/passwd.docx").unwrap(),
            root.join("passwd.docx")
        );
        assert_eq!(
            resolve_document(root, "/tmp/evil.docx").unwrap(),
            root.join("evil.docx")
        );
        assert_eq!(
            resolve_document(root, "nested/dir/file.docx").unwrap(),
            root.join("file.docx")
        );
    }

    #[test]
    fn test_resolve_directory_valid() {
        let root = Path::new("/srv/storage");
        assert_eq!(
            resolve_directory(root, "reports").unwrap(),
            root.join("reports")
        );
        assert_eq!(
            resolve_directory(root, "reports/2024/q3").unwrap(),
            root.join("reports/2024/q3")
        );
    }

    #[test]
    fn test_resolve_directory_rejects_empty() {
        let root = Path::new("/srv/storage");
        assert!(matches!(
            resolve_directory(root, ""),
            Err(StoreError::InvalidName(_))
        ));
    }

    #[test]
    fn test_resolve_directory_rejects_root_itself() {
        let root = Path::new("/srv/storage");
        assert!(matches!(
            resolve_directory(root, "."),
            Err(StoreError::InvalidName(_))
        ));
        assert!(matches!(
            resolve_directory(root, "./"),
            Err(StoreError::InvalidName(_))
        ));
        assert!(matches!(
            resolve_directory(root, "././."),
            Err(StoreError::InvalidName(_))
        ));
        // Still fine when the name merely starts with a CurDir component
        assert_eq!(
            resolve_directory(root, "./reports").unwrap(),
            root.join("./reports")
        );
    }

    #[test]
    fn test_resolve_directory_rejects_traversal() {
        let root = Path::new("/srv/storage");
        assert!(matches!(
            resolve_directory(root, ".."),
            Err(StoreError::InvalidName(_))
        ));
        assert!(matches!(
            resolve_directory(root, "reports/../.."),
            Err(StoreError::InvalidName(_))
        ));
        assert!(matches!(
            resolve_directory(root, "/etc"),
            Err(StoreError::InvalidName(_))
        ));
    }
}
