use clap::Parser;
use std::path::PathBuf;

use crate::types::DigestAlgo;

/// Hash, or copy and hash, the top-level files of a directory.
#[derive(Clone, Debug, Parser)]
#[command(name = "fanhash")]
#[command(
    about = "Hash the regular files at the top of SRC; with DEST, copy them there while hashing."
)]
pub struct Cli {
    /// Source directory. Only its top-level regular files are processed.
    #[arg(value_name = "SRC")]
    pub src: PathBuf,

    /// Destination directory (must exist). When given, files are copied and hashed.
    #[arg(value_name = "DEST")]
    pub dest: Option<PathBuf>,

    /// Number of workers. Default 10; values above 30 are clamped to 30.
    #[arg(long, short = 'w')]
    pub workers: Option<usize>,

    /// Digest algorithm.
    #[arg(long, short = 'a', value_enum)]
    pub algo: Option<DigestAlgo>,

    /// Verbose output.
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,

    /// Settings file. Default: `.fanhash.toml` in SRC, if present.
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,
}

