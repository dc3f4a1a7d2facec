//! Integration Test: Event Loop Discipline
//!
//! **Policy**: The terminal crate waits only on terminal events or the
//! engine's next deadline (`sleep_until`). It never sleeps a fixed amount
//! and never does blocking file I/O; data is loaded before the runtime
//! starts.

use architectural_enforcement::{assert_clean, scan, Rule};

#[test]
fn test_no_sleep_in_terminal_crate() {
    let violations = scan(
        "tui/src",
        &[Rule {
            name: "Sleep call",
            patterns: &["thread::sleep", "time::sleep(", "::sleep(", ".sleep("],
        }],
    );

    assert_clean(
        "Sleep calls found in the terminal crate! Wait on events or deadlines instead.",
        &violations,
    );
}

#[test]
fn test_no_blocking_file_io_in_terminal_crate() {
    let violations = scan(
        "tui/src",
        &[Rule {
            name: "Blocking file I/O",
            patterns: &["std::fs", "File::open", "read_to_string("],
        }],
    );

    assert_clean("Blocking file I/O found in the terminal crate!", &violations);
}

#[test]
fn test_no_polling_intervals() {
    let violations = scan(
        "tui/src",
        &[Rule {
            name: "Fixed-rate polling",
            patterns: &["time::interval(", "event::poll("],
        }],
    );

    assert_clean("Fixed-rate polling found in the terminal crate!", &violations);
}
