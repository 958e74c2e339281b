//! Error taxonomy for the upload pipeline.
//!
//! [`ReaderError`] is fatal to a run. [`MappingError`] and [`RequestError`]
//! are row-local: the orchestrator records them against the row and moves on.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load the source spreadsheet.
#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("Excel file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read sheet '{sheet}' from {}: {reason}", .path.display())]
    Read {
        path: PathBuf,
        sheet: String,
        reason: String,
    },
}

/// A row that cannot be turned into an artist record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("Required 'author' field not found in row. Available columns: {columns:?}")]
    MissingAuthor { columns: Vec<String> },

    #[error("'Author ID' value {value:?} is not an integer")]
    InvalidAuthorId { value: String },
}

/// Failure talking to the artist API.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("{method} {url} failed: {source}")]
    Transport {
        method: String,
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("{status} returned by {method} {url}: {body}")]
    Status {
        method: String,
        url: String,
        status: u16,
        body: String,
    },

    #[error("could not decode response from {url}: {reason}")]
    Decode { url: String, reason: String },
}
