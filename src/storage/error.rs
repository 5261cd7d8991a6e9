//! Storage-specific error types.

use std::path::PathBuf;

/// Errors that can occur while reading or writing local key-value storage.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Failed to read a stored entry
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a stored entry
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to remove a stored entry
    #[error("Failed to remove {path}: {source}")]
    RemoveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create the storage directory
    #[error("Failed to create storage directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to encode a value for storage
    #[error("Failed to encode stored value: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_with_path() {
        let error = StorageError::WriteFailed {
            path: PathBuf::from("/tmp/storage/draft.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("/tmp/storage/draft.json"));
        assert!(error_str.contains("denied"));
    }
}
