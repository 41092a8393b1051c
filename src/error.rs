//! Error types for Holdr
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;
use crate::domain::services::ParseError;

/// Result type alias for Holdr operations
pub type HoldrResult<T> = Result<T, HoldrError>;

/// Main error type for Holdr operations
#[derive(Error, Debug)]
pub enum HoldrError {
    /// A layout file is not well-formed XML
    #[error("failed to parse layout {file}: {source}")]
    Parse {
        file: PathBuf,
        #[source]
        source: ParseError,
    },

    /// A layout file could not be read
    #[error("failed to read layout {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// A directory exists but could not be listed
    #[error("failed to list directory {path}: {source}")]
    DirectoryListing {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// An output directory could not be created
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// A generated holder could not be written (or pruned)
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Invalid configuration file or value
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// No base package configured
    #[error("no base package configured - set `package` in holdr.toml, HOLDR_PACKAGE or --package")]
    MissingPackage,

    /// File watcher failure
    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
