use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while loading a text file
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path could not be opened for reading
    #[error("Failed to open file: {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file opened but yielded no bytes (raw strategy only)
    #[error("File is empty: {}", .path.display())]
    Empty { path: PathBuf },

    /// The file opened but reading it failed part way through
    #[error("Failed to read file: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Path the failed load was attempted against
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Open { path, .. } | LoadError::Empty { path } | LoadError::Read { path, .. } => {
                path
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
