//! Error types for dataset loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a roll dataset.
///
/// Data-quality problems inside a record (stringified numbers, malformed
/// ages) are absorbed by the model's coercion and never surface here; only
/// I/O and structural parse failures are errors. An empty dataset is valid.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Dataset file not found.
    #[error("dataset file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read dataset {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a JSON dataset.
    #[error("failed to parse JSON dataset {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to parse a CSV dataset.
    #[error("failed to parse CSV dataset {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The file extension maps to no known loader.
    #[error("unsupported dataset format: {path} (expected .json or .csv)")]
    UnsupportedFormat { path: PathBuf },
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_path() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/roll.json"),
        };
        assert_eq!(err.to_string(), "dataset file not found: /data/roll.json");
    }

    #[test]
    fn unsupported_format_names_expected_extensions() {
        let err = IngestError::UnsupportedFormat {
            path: PathBuf::from("roll.xlsx"),
        };
        assert!(err.to_string().contains(".json or .csv"));
    }
}
