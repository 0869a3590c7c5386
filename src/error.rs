use serde::Serialize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrganizeError {
    #[error("Not a valid directory: {}", .0.display())]
    InvalidRoot(PathBuf),

    #[error("Error creating folder {}: {source}", path.display())]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error moving {} to {}: {source}", source_path.display(), destination.display())]
    MoveFailed {
        source_path: PathBuf,
        destination: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl OrganizeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrganizeError::InvalidRoot(_) => ErrorKind::InvalidRoot,
            OrganizeError::DirectoryCreateFailed { .. } => ErrorKind::DirectoryCreateFailed,
            OrganizeError::MoveFailed { .. } => ErrorKind::MoveFailed,
        }
    }
}

/// Error categories, for counting and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidRoot,
    DirectoryCreateFailed,
    MoveFailed,
}

impl ErrorKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ErrorKind::InvalidRoot => "Invalid root",
            ErrorKind::DirectoryCreateFailed => "Create folder",
            ErrorKind::MoveFailed => "Move",
        }
    }
}
