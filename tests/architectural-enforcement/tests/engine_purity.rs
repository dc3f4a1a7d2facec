//! Integration Test: Engine Purity
//!
//! **Policy**: The animation engine is a pure state machine. It never
//! touches files, sockets, processes, threads or a real clock; time only
//! arrives through the `Scheduler` it is handed.

use architectural_enforcement::{assert_clean, rust_files, scan, Rule};

const ENGINE_RULES: &[Rule] = &[
    Rule {
        name: "File I/O in engine",
        patterns: &["std::fs", "File::"],
    },
    Rule {
        name: "Network or process access in engine",
        patterns: &["std::net", "std::process"],
    },
    Rule {
        name: "Thread or wall clock in engine",
        patterns: &["std::thread", "Instant::now", "SystemTime"],
    },
    Rule {
        name: "Runtime dependency in engine",
        patterns: &["tokio", "crossterm", "ratatui"],
    },
];

#[test]
fn test_engine_has_no_side_effects() {
    let violations = scan("core/src/animation", ENGINE_RULES);
    assert_clean("Side effects found in the animation engine!", &violations);
}

#[test]
fn test_core_has_no_terminal_dependency() {
    let violations = scan(
        "core/src",
        &[Rule {
            name: "Terminal dependency in core",
            patterns: &["crossterm", "ratatui"],
        }],
    );
    assert_clean("Core crate depends on a terminal library!", &violations);
}

#[test]
fn test_engine_sources_are_scanned() {
    let files = rust_files("core/src/animation");
    assert!(
        files.iter().any(|p| p.ends_with("engine.rs")),
        "scan found no engine sources: {files:?}"
    );
}
