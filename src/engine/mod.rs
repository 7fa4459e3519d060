//! Engine module: per-file operations, listing, and the CLI front end

pub mod arg_parser;
pub mod cli;
pub mod hashing;
pub mod operation;
pub mod tools;

// Re-export commonly used functions
pub use arg_parser::Cli;
pub use cli::handle_run;
pub use hashing::{FileDigest, TeeSide, TeeWriter, copy_and_hash, hash_file, stream_into};
pub use operation::{CopyHashOp, FileOperation, HashOp, operation_for};
pub use tools::{available_cpus, ensure_dir_exists, list_regular_files};
