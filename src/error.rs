//! Error types for prisma-casefix

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during a recase run
#[derive(Error, Debug)]
pub enum CasefixError {
    #[error("Failed to read schema file: {path}")]
    SchemaReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read SQL file: {path}")]
    SqlFileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write SQL file: {path}")]
    SqlFileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to traverse migrations directory")]
    WalkError {
        #[source]
        source: walkdir::Error,
    },
}

impl From<walkdir::Error> for CasefixError {
    fn from(err: walkdir::Error) -> Self {
        CasefixError::WalkError { source: err }
    }
}
