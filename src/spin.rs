//! Busy-wait kernel.
//!
//! A counting loop whose only job is to consume CPU time that a sampling
//! profiler can see. Each increment goes through an optimization barrier,
//! otherwise the whole loop folds to a constant at `opt-level = 3` and the
//! process has nothing for the profiler to sample.

/// Count from zero up to `target`, one increment at a time.
///
/// The loop body does nothing besides the counter update. Returns the final
/// count, which always equals `target`.
pub fn spin(target: u64) -> u64 {
    let mut count = 0u64;
    for _ in 0..target {
        count = pessimize::hide(count + 1);
    }
    count
}
