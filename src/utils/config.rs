//! Application configuration constants.
//! Worker limits and I/O sizes in one place.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    config_filename: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                config_filename: format!(".{pkg}.toml"),
            }
        })
    }

    /// Settings file looked up in the source directory when `--config` is not given.
    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }
}

// ---- Worker threads ----

/// Hard upper bound on pool size. Larger requests are clamped, not rejected.
pub const MAX_WORKERS: usize = 30;

/// Pool size when neither the CLI nor the settings file names one.
pub const DEFAULT_WORKERS: usize = 10;

// ---- Hashing ----

/// Streaming I/O sizes.
pub struct HashingConsts;

impl HashingConsts {
    /// Bytes read per iteration of the copy/hash loop (128 KB). One buffer per busy worker.
    pub const READ_CHUNK_SIZE: usize = 128 * 1024;
}
