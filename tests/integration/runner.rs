use std::time::{Duration, Instant};

use fakeproc::runner::{Runner, DONE_MSG, ITERATIONS, LOOP_MSG, PAUSE, SPIN_TARGET, STARTUP_MSG};

fn run_to_string(runner: &Runner) -> String {
    let mut out = Vec::new();
    runner.run(&mut out).expect("runner failed");
    String::from_utf8(out).expect("runner wrote invalid utf-8")
}

#[test]
fn test_output_sequence() {
    // Scaled-down workload: same shape, tiny spin, no pause.
    let runner = Runner::with(5, 10_000, Duration::ZERO);
    let output = run_to_string(&runner);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 11, "expected 11 lines, got: {lines:?}");
    assert_eq!(lines[0], STARTUP_MSG);
    for block in lines[1..].chunks(2) {
        assert_eq!(block, [LOOP_MSG, DONE_MSG]);
    }
    assert_eq!(lines.last(), Some(&DONE_MSG));
}

#[test]
fn test_zero_iterations_prints_only_banner() {
    let runner = Runner::with(0, 10_000, Duration::ZERO);
    let output = run_to_string(&runner);
    assert_eq!(output, format!("{STARTUP_MSG}\n"));
}

#[test]
fn test_zero_spin_still_prints_done() {
    let runner = Runner::with(1, 0, Duration::ZERO);
    let output = run_to_string(&runner);
    assert_eq!(output, format!("{STARTUP_MSG}\n{LOOP_MSG}\n{DONE_MSG}\n"));
}

#[test]
fn test_pause_is_real_wall_clock_delay() {
    let pause = Duration::from_millis(50);
    let runner = Runner::with(3, 0, pause);

    let start = Instant::now();
    let _ = run_to_string(&runner);
    let elapsed = start.elapsed();

    // The pause runs after every iteration, the last included.
    assert!(
        elapsed >= pause * 3,
        "expected at least {:?} of sleep, finished in {:?}",
        pause * 3,
        elapsed
    );
}

#[test]
fn test_repeated_runs_are_identical() {
    let runner = Runner::with(4, 5_000, Duration::ZERO);
    let first = run_to_string(&runner);
    let second = run_to_string(&runner);
    assert_eq!(first, second);
}

#[test]
fn test_canonical_workload_constants() {
    assert_eq!(ITERATIONS, 5);
    assert_eq!(SPIN_TARGET, 10_000_000_000);
    assert_eq!(PAUSE, Duration::from_secs(5));
    assert_eq!(Runner::new(), Runner::with(ITERATIONS, SPIN_TARGET, PAUSE));
    assert_eq!(Runner::default(), Runner::new());
}
