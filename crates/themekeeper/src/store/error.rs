//! Storage errors.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when the backing store cannot be read or written.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access store '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("store '{}' is not a JSON object of strings: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The host refused access, e.g. storage disabled in the browser.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_includes_path() {
        let err = StoreError::Io {
            path: PathBuf::from("/tmp/prefs.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/prefs.json"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_unavailable_display() {
        let err = StoreError::Unavailable("localStorage is null".to_string());
        assert_eq!(err.to_string(), "storage unavailable: localStorage is null");
    }
}
