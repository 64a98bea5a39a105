//! Error types for loading denylists and manifests.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop a denylist load or a manifest scan.
///
/// None of these abort the process: [`crate::audit::audit`] turns them
/// into a message on the report.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Could not find vulnerable packages file: {}", path.display())]
    DenylistNotFound { path: PathBuf },

    #[error("Could not read vulnerable packages file {}: {source}", path.display())]
    DenylistUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not find file: {}", path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("Could not read file {}: {source}", path.display())]
    ManifestUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file '{}' is not valid JSON: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages_name_the_path() {
        let err = ScanError::DenylistNotFound {
            path: PathBuf::from("bad.txt"),
        };
        assert_eq!(
            err.to_string(),
            "Could not find vulnerable packages file: bad.txt"
        );

        let err = ScanError::ManifestNotFound {
            path: PathBuf::from("sbom.json"),
        };
        assert_eq!(err.to_string(), "Could not find file: sbom.json");
    }

    #[test]
    fn test_parse_error_message() {
        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = ScanError::ManifestParse {
            path: PathBuf::from("lock.json"),
            source,
        };
        assert!(err.to_string().starts_with("file 'lock.json' is not valid JSON"));
    }
}
