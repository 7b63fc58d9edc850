//! fakeproc - CLI

use anyhow::{Context, Result};
use clap::Parser;
use fakeproc::util::logger;
use fakeproc::VERSION;

/// A fake process that burns CPU in fixed bursts so a profiler has something to sample
#[derive(Parser, Debug)]
#[command(name = "fakeproc")]
#[command(version = VERSION)]
#[command(about = "Synthetic CPU workload for profiler demos", long_about = None)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    logger::init_cli();

    fakeproc::run().context("Failed to run workload")?;
    Ok(())
}
