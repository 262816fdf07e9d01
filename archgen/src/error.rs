//! Error types and error handling

use std::path::PathBuf;

use thiserror::Error;

use crate::materialize::PLACEHOLDER_FILE;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal scaffolding error
///
/// Every variant terminates the command with a failure status. Per-folder
/// problems are reported through [`FolderError`] instead and never abort a
/// batch.
#[derive(Debug, Error)]
pub enum Error {
    /// A required option was missing or empty
    #[error("missing required option: {0}")]
    Usage(&'static str),

    /// Architecture type is not in the catalog
    #[error("Unsupported architecture type: {name} (available: {available})")]
    UnsupportedPattern {
        /// Name supplied by the caller
        name: String,
        /// Comma-separated list of supported names
        available: String,
    },

    /// Language is not in the catalog
    #[error("Unsupported language: {name} (available: {available})")]
    UnsupportedLanguage {
        /// Name supplied by the caller
        name: String,
        /// Comma-separated list of supported names
        available: String,
    },

    /// The project root could not be created
    #[error("Error creating root folder {}: {source}", path.display())]
    RootCreation {
        /// Root directory
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The language README could not be written
    #[error("Error writing {}: {source}", path.display())]
    ReadmeWrite {
        /// README location
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

/// Failure to materialize a single folder
#[derive(Debug, Error)]
pub enum FolderError {
    /// Catalog path is absolute or climbs out of the project root
    #[error("Refusing folder {0}: path escapes the project root")]
    EscapesRoot(String),

    /// Directory chain could not be created
    #[error("Error creating folder {}: {source}", path.display())]
    CreateFolder {
        /// Folder that failed
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Placeholder file could not be written
    #[error("Error creating {file} in {}: {source}", path.display(), file = PLACEHOLDER_FILE)]
    Placeholder {
        /// Folder the placeholder belongs to
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether the usage text should accompany this error
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}
