//! Error types for Quickbeam operations

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for Quickbeam operations
#[derive(Error, Debug)]
pub enum QuickbeamError {
    /// Failure to read a file from disk
    #[error("failed to read {path:?}: {source}")]
    Io {
        /// Path of the file that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failure to write an output file
    #[error("failed to write {path:?}: {source}")]
    Write {
        /// Path of the file that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A path that is not a Rust source file was handed to the cache
    #[error("not a Rust source file: {path:?}")]
    NotSourceFile {
        /// The rejected path
        path: PathBuf,
    },

    /// A file could not be parsed as Rust source
    #[error("failed to parse {path:?}: {message}")]
    Parse {
        /// Path of the file that failed to parse
        path: PathBuf,
        /// Parser error message
        message: String,
    },

    /// A requested code segment falls outside the file
    #[error("segment at offset {offset} (len {len}) is out of {path:?} ({file_len} bytes)")]
    OutOfRange {
        /// Path of the file the segment was requested from
        path: PathBuf,
        /// Requested start offset in bytes
        offset: usize,
        /// Requested segment length in bytes
        len: usize,
        /// Total length of the file in bytes
        file_len: usize,
    },

    /// Failure to serialize a report or AST dump
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for Quickbeam operations
pub type Result<T> = std::result::Result<T, QuickbeamError>;
