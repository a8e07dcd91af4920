//! Error types for the student tracker
//!
//! One enum per concern:
//! - `ValidationError`: a field typed at the prompt was rejected
//! - `StoreError`: the data file could not be read, parsed or written
//! - `ManagerError`: a roster operation failed
//! - `CliError`: the interactive session could not continue

use std::io;
use std::path::PathBuf;

use crate::record::StudentId;

/// Rejected field input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name cannot be empty.")]
    EmptyName,

    #[error("Please enter both a first and a last name.")]
    IncompleteName,

    #[error("Gender must be 'Male' or 'Female'.")]
    InvalidGender,

    #[error("Score must be a whole number.")]
    NotANumber,

    #[error("Score must be between {min} and {max}.")]
    OutOfRange { min: u8, max: u8 },

    #[error("This field is required.")]
    Required,
}

/// Data file failures
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed student file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("student file {path} holds invalid ID {id}")]
    InvalidId { path: PathBuf, id: StudentId },

    #[error("failed to encode students: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Roster operation failures
#[derive(Debug, thiserror::Error)]
pub enum ManagerError {
    #[error("student with ID {0} not found")]
    NotFound(StudentId),

    #[error("no student IDs left to assign")]
    IdsExhausted,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Interactive session failures
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("input closed before the prompt was answered")]
    InputClosed,

    #[error(transparent)]
    Store(#[from] StoreError),
}
