//! Typed errors for the IO seams of the engine.
//!
//! The analysis itself (key parsing, matching, diffing) cannot fail. These
//! errors come from reading and parsing source files and resource files,
//! and are collected as warnings rather than aborting a run.

use thiserror::Error;

/// Failure to scan one source file.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read source file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

impl ScanError {
    pub fn path(&self) -> &str {
        match self {
            ScanError::Read { path, .. } | ScanError::Parse { path, .. } => path,
        }
    }
}

/// Failure to load one translation resource file or pattern.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("Invalid translation file pattern \"{pattern}\": {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to read translation file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse translation file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
