//! Fanhash: hash, or copy and hash, the top-level files of a directory with a bounded worker pool.
//!
//! A feeder thread hands filenames one at a time to a fixed set of workers over a rendezvous
//! channel; workers push results onto a channel sized to the pool, which the caller drains.

pub mod engine;
pub mod error;
pub mod pipeline;
pub mod run;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use error::RunError;
pub use run::{ResultStream, collect, run};
pub use types::*;

/// Result alias used by public fanhash API
pub type Result<T> = std::result::Result<T, RunError>;
