//! Fanhash CLI: hash the files at the top of SRC, or copy them into DEST while hashing.

use anyhow::Result;
use clap::Parser;
use fanhash::engine::arg_parser::Cli;
use fanhash::engine::handle_run;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
