use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for sort operations
pub type Result<T> = std::result::Result<T, SortError>;

/// Error type for sort operations.
///
/// All variants are fatal - the sort never retries and never produces partial
/// results on purpose. Temporary run files created before a failure are removed
/// on a best effort basis when the merge phase has already started.
#[derive(Error, Debug)]
pub enum SortError {
    /// The key column matched zero header fields, or more than one
    #[error("key column '{column}' matched {count} fields in header {header:?}")]
    Schema {
        /// The requested key column name
        column: String,
        /// Number of header fields equal to the key column name
        count: usize,
        /// The header fields as read from the input
        header: Vec<String>,
    },

    /// Failed to read or parse records, including records whose field count
    /// disagrees with the rest of the file
    #[error("read '{path}': {source}")]
    Read {
        /// Path of the file being read
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to serialize records
    #[error("write '{path}': {source}")]
    Write {
        /// Path of the file being written
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to create, persist, flush or delete a file
    #[error("{action} '{path}': {source}")]
    Resource {
        /// The attempted action
        action: &'static str,
        /// Path of the affected file or directory
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SortError {
    pub(crate) fn read(path: &Path, source: csv::Error) -> SortError {
        SortError::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: csv::Error) -> SortError {
        SortError::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn resource(action: &'static str, path: &Path, source: std::io::Error) -> SortError {
        SortError::Resource {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}
