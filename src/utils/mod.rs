pub mod config;
pub mod fanhash_toml;
pub mod logger;

pub use config::*;
pub use fanhash_toml::{apply_file_to_opts, load_dir_fanhash_toml, load_fanhash_toml};
pub use logger::{logger_builder, setup_logging};
