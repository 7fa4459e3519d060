//! CLI command handler: hash by default; copy-and-hash when DEST is given.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{self, Write};

use crate::engine::arg_parser::Cli;
use crate::engine::tools::available_cpus;
use crate::utils::fanhash_toml::FanhashToml;
use crate::utils::{apply_file_to_opts, load_dir_fanhash_toml, load_fanhash_toml, setup_logging};
use crate::{RunOpts, run};

/// Read the settings file: `--config` when given (must exist), else `.fanhash.toml` in SRC if present.
fn load_settings(cli: &Cli) -> Result<Option<FanhashToml>> {
    match &cli.config {
        Some(path) => Ok(Some(load_fanhash_toml(path).context("load settings file")?)),
        None => load_dir_fanhash_toml(&cli.src).context("load settings file"),
    }
}

/// Defaults, then file settings, then CLI flags. Returns the run options and the verbose flag.
pub fn setup_opts(cli: &Cli, file: Option<&FanhashToml>) -> (RunOpts, bool) {
    let mut opts = match &cli.dest {
        Some(dest) => RunOpts::copy(&cli.src, dest),
        None => RunOpts::hash(&cli.src),
    };
    let mut verbose = false;
    if let Some(file) = file {
        apply_file_to_opts(file, &mut opts);
        verbose = file.settings.verbose.unwrap_or(verbose);
    }
    if let Some(workers) = cli.workers {
        opts.workers = workers;
    }
    if let Some(algo) = cli.algo {
        opts.algo = algo;
    }
    (opts, cli.verbose.unwrap_or(verbose))
}

/// Run one pass over SRC and print each result line to stdout as it arrives.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let settings = load_settings(cli)?;
    let (opts, verbose) = setup_opts(cli, settings.as_ref());
    setup_logging(verbose);

    info!("CPUs available: {}", available_cpus());
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        opts
    );

    let mut stream = run(&opts)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for result in stream.by_ref() {
        writeln!(out, "{result}").context("write result line")?;
    }
    out.flush().context("flush stdout")?;

    let summary = stream.finish()?;
    debug!(
        "{} files dispatched, {} results, {} bytes copied",
        summary.dispatched, summary.produced, summary.bytes_copied
    );
    Ok(())
}
