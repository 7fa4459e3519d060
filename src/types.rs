//! Public and internal types for the fanhash API and pipeline.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::utils::config::DEFAULT_WORKERS;

/// Digest applied to each file's byte stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgo {
    /// SHA-1, 40 hex characters.
    #[default]
    Sha1,
    /// BLAKE3, 64 hex characters.
    Blake3,
}

impl fmt::Display for DigestAlgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestAlgo::Sha1 => f.write_str("sha1"),
            DigestAlgo::Blake3 => f.write_str("blake3"),
        }
    }
}

/// Which per-file operation a run applies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Read each file and report its digest.
    Hash,
    /// Stream each file into `dest` (which must already exist) while hashing it.
    CopyAndHash { dest: PathBuf },
}

/// Options for [`run`](crate::run) and [`collect`](crate::collect).
#[derive(Clone, Debug)]
pub struct RunOpts {
    /// Directory whose top-level regular files are processed.
    pub src: PathBuf,
    pub mode: Mode,
    /// Requested worker count. Clamped to `1..=MAX_WORKERS` when the pool is built.
    pub workers: usize,
    pub algo: DigestAlgo,
}

impl RunOpts {
    /// Hash-only run over `src` with default workers and SHA-1.
    pub fn hash(src: impl Into<PathBuf>) -> Self {
        Self {
            src: src.into(),
            mode: Mode::Hash,
            workers: DEFAULT_WORKERS,
            algo: DigestAlgo::default(),
        }
    }

    /// Copy-and-hash run from `src` into the existing directory `dest`.
    pub fn copy(src: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        Self {
            mode: Mode::CopyAndHash { dest: dest.into() },
            ..Self::hash(src)
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_algo(mut self, algo: DigestAlgo) -> Self {
        self.algo = algo;
        self
    }
}

/// One processed file. `Display` renders the output line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileResult {
    /// Rendered as `<name>: <digest>`.
    Hashed { name: PathBuf, digest: String },
    /// Rendered as `<name> <bytes> <digest>`.
    Copied {
        name: PathBuf,
        bytes: u64,
        digest: String,
    },
}

impl FileResult {
    pub fn name(&self) -> &Path {
        match self {
            FileResult::Hashed { name, .. } | FileResult::Copied { name, .. } => name,
        }
    }

    pub fn digest(&self) -> &str {
        match self {
            FileResult::Hashed { digest, .. } | FileResult::Copied { digest, .. } => digest,
        }
    }

    /// Bytes written to the destination; `None` for hash-only results.
    pub fn bytes(&self) -> Option<u64> {
        match self {
            FileResult::Hashed { .. } => None,
            FileResult::Copied { bytes, .. } => Some(*bytes),
        }
    }
}

impl fmt::Display for FileResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileResult::Hashed { name, digest } => write!(f, "{}: {}", name.display(), digest),
            FileResult::Copied {
                name,
                bytes,
                digest,
            } => write!(f, "{} {} {}", name.display(), bytes, digest),
        }
    }
}

/// Totals for a completed run, returned by [`ResultStream::finish`](crate::ResultStream::finish).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Filenames handed to workers by the feeder.
    pub dispatched: usize,
    /// Results received by the caller.
    pub produced: usize,
    /// Sum of byte counts over received copy results.
    pub bytes_copied: u64,
}
