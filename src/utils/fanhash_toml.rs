//! Load `.fanhash.toml` settings (CLI only). The lib takes everything through `RunOpts`.

use serde::Deserialize;
use std::path::Path;

use crate::error::RunError;
use crate::types::{DigestAlgo, RunOpts};
use crate::utils::config::PackagePaths;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FanhashToml {
    #[serde(default)]
    pub settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsSection {
    pub workers: Option<usize>,
    pub algo: Option<DigestAlgo>,
    pub verbose: Option<bool>,
}

fn parse(path: &Path, text: &str) -> crate::Result<FanhashToml> {
    toml::from_str(text).map_err(|e| RunError::Config(format!("{}: {}", path.display(), e)))
}

/// Load an explicitly named settings file. Missing or malformed is an error.
pub fn load_fanhash_toml(path: &Path) -> crate::Result<FanhashToml> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| RunError::Config(format!("{}: {}", path.display(), e)))?;
    parse(path, &text)
}

/// Load `.fanhash.toml` from `dir` if present. Absent file is `Ok(None)`; malformed is an error.
pub fn load_dir_fanhash_toml(dir: &Path) -> crate::Result<Option<FanhashToml>> {
    let path = dir.join(PackagePaths::get().config_filename());
    if !path.is_file() {
        return Ok(None);
    }
    load_fanhash_toml(&path).map(Some)
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($section:expr, $opts:expr, $field:ident) => {
        if let Some(v) = $section.$field {
            $opts.$field = v;
        }
    };
}

/// Apply file settings to opts (only fields present in the file). Call before applying CLI values.
pub fn apply_file_to_opts(file: &FanhashToml, opts: &mut RunOpts) {
    let settings = &file.settings;
    apply_file_opt!(settings, opts, workers);
    apply_file_opt!(settings, opts, algo);
}
