//! Error kinds for a run. Every kind is fatal: the first one observed stops the run.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunError {
    /// Bad arguments or settings, or a missing destination directory. Raised before any work.
    #[error("configuration error: {0}")]
    Config(String),

    /// The source directory could not be read or one of its entries could not be stat-ed.
    #[error("list {}: {source}", .path.display())]
    Enumeration {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Open/read/create/write failure while processing one file. `op` names the operation.
    #[error("{op} {}: {source}", .path.display())]
    FileIo {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A pipeline thread panicked instead of returning.
    #[error("{0} thread panicked")]
    WorkerPanicked(&'static str),
}

impl RunError {
    pub fn enumeration(path: &Path, source: io::Error) -> Self {
        RunError::Enumeration {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn file_io(op: &'static str, path: &Path, source: io::Error) -> Self {
        RunError::FileIo {
            op,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Short name of the error kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RunError::Config(_) => "config",
            RunError::Enumeration { .. } => "enumeration",
            RunError::FileIo { .. } => "file-io",
            RunError::WorkerPanicked(_) => "panic",
        }
    }
}
