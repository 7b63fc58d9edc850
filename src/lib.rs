//! fakeproc
//!
//! A deliberately boring process: print a banner, then five times over burn
//! CPU in a ten-billion-increment busy loop, print `Done`, and sleep five
//! seconds. It exists so a sampling profiler attached from outside sees
//! sustained, easy-to-find CPU activity separated by idle windows.
//!
//! # Example
//!
//! ```no_run
//! fn main() -> fakeproc::Result<()> {
//!     fakeproc::run()
//! }
//! ```

#![warn(rust_2018_idioms)]

pub mod runner;
pub mod spin;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};

use std::io;

use tracing::debug;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Binary name
pub const NAME: &str = "fakeproc";

/// Run the canonical workload against stdout.
///
/// Blocks for the whole sequence: roughly 25 seconds of sleep plus whatever
/// the busy-wait costs on the host CPU.
pub fn run() -> Result<()> {
    debug!("starting canonical workload");
    let runner = runner::Runner::new();
    let mut out = io::stdout().lock();
    runner.run(&mut out)?;
    debug!("workload complete");
    Ok(())
}
