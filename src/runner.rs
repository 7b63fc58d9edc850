//! The workload sequence.
//!
//! One banner line, then a fixed number of iterations of
//! `Looping...` / busy-wait / `Done` / sleep. The sequence is the whole
//! observable contract of the binary: the lines on stdout, in order, and
//! real CPU burn between the marker and completion lines.

use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use crate::spin::spin;

/// Banner printed once at startup
pub const STARTUP_MSG: &str = "Starting our fake process...";

/// Marker printed at the top of each iteration
pub const LOOP_MSG: &str = "Looping...";

/// Completion line printed after each busy-wait
pub const DONE_MSG: &str = "Done";

/// Canonical iteration count
pub const ITERATIONS: u32 = 5;

/// Canonical busy-wait bound. Preserved literally rather than calibrated:
/// wall-clock cost is meant to vary with the host CPU.
pub const SPIN_TARGET: u64 = 10_000_000_000;

/// Canonical pause between iterations
pub const PAUSE: Duration = Duration::from_secs(5);

/// The fixed workload: iteration count, busy-wait bound, inter-iteration
/// pause.
///
/// [`Runner::new`] is the canonical workload and the only one the binary
/// runs. The fields are parameters so tests can drive a scaled-down sequence
/// in-process, not a user-facing configuration surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Runner {
    iterations: u32,
    spin_target: u64,
    pause: Duration,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

impl Runner {
    /// The canonical workload: 5 iterations, 10^10 increments, 5 s pause.
    pub fn new() -> Self {
        Self {
            iterations: ITERATIONS,
            spin_target: SPIN_TARGET,
            pause: PAUSE,
        }
    }

    /// A workload with explicit bounds, for tests and benchmarks.
    pub fn with(
        iterations: u32,
        spin_target: u64,
        pause: Duration,
    ) -> Self {
        Self {
            iterations,
            spin_target,
            pause,
        }
    }

    /// Run the full sequence, writing the contract lines to `out`.
    ///
    /// Flushes after every line so an external reader (or an attached
    /// profiler's operator watching a pipe) sees each line before the
    /// busy-wait or sleep that follows it.
    pub fn run<W: Write>(
        &self,
        out: &mut W,
    ) -> Result<()> {
        writeln!(out, "{STARTUP_MSG}").context("Failed to write startup message")?;
        out.flush().context("Failed to flush stdout")?;

        for i in 0..self.iterations {
            debug!("iteration {}/{}", i + 1, self.iterations);

            writeln!(out, "{LOOP_MSG}").context("Failed to write loop marker")?;
            out.flush().context("Failed to flush stdout")?;

            let count = spin(self.spin_target);
            debug!("busy-wait finished at {count}");

            writeln!(out, "{DONE_MSG}").context("Failed to write completion line")?;
            out.flush().context("Failed to flush stdout")?;

            // The original sleeps after every iteration, the last included.
            if !self.pause.is_zero() {
                thread::sleep(self.pause);
            }
        }

        Ok(())
    }
}
