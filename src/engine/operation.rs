//! Per-file operations run by the workers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::types::{DigestAlgo, FileResult, Mode, RunOpts};

use super::hashing::{copy_and_hash, hash_file};

/// Unit of work applied to one filename. Shared by every worker in the pool.
pub trait FileOperation: Send + Sync {
    /// Short name for logs.
    fn label(&self) -> &'static str;

    /// Process `name` (relative to the source directory) into a result line.
    fn apply(&self, name: &Path) -> crate::Result<FileResult>;
}

/// Hash-only: `<name>: <digest>`.
pub struct HashOp {
    src_dir: PathBuf,
    algo: DigestAlgo,
}

impl HashOp {
    pub fn new(src_dir: impl Into<PathBuf>, algo: DigestAlgo) -> Self {
        Self {
            src_dir: src_dir.into(),
            algo,
        }
    }
}

impl FileOperation for HashOp {
    fn label(&self) -> &'static str {
        "hash"
    }

    fn apply(&self, name: &Path) -> crate::Result<FileResult> {
        let digest = hash_file(&self.src_dir.join(name), self.algo)?;
        Ok(FileResult::Hashed {
            name: name.to_path_buf(),
            digest,
        })
    }
}

/// Copy-and-hash: `<name> <bytes> <digest>`.
pub struct CopyHashOp {
    src_dir: PathBuf,
    dest_dir: PathBuf,
    algo: DigestAlgo,
}

impl CopyHashOp {
    pub fn new(src_dir: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>, algo: DigestAlgo) -> Self {
        Self {
            src_dir: src_dir.into(),
            dest_dir: dest_dir.into(),
            algo,
        }
    }
}

impl FileOperation for CopyHashOp {
    fn label(&self) -> &'static str {
        "copy-and-hash"
    }

    fn apply(&self, name: &Path) -> crate::Result<FileResult> {
        let (bytes, digest) = copy_and_hash(
            &self.src_dir.join(name),
            &self.dest_dir.join(name),
            self.algo,
        )?;
        Ok(FileResult::Copied {
            name: name.to_path_buf(),
            bytes,
            digest,
        })
    }
}

/// Build the operation selected by `opts.mode`.
pub fn operation_for(opts: &RunOpts) -> Arc<dyn FileOperation> {
    match &opts.mode {
        Mode::Hash => Arc::new(HashOp::new(&opts.src, opts.algo)),
        Mode::CopyAndHash { dest } => Arc::new(CopyHashOp::new(&opts.src, dest, opts.algo)),
    }
}
