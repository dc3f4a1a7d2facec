//! Architectural Enforcement Integration Tests
//!
//! This package scans the workspace sources and enforces:
//! - The animation engine stays free of I/O, threads and wall clocks
//! - The terminal loop never sleeps to wait for work
//! - No blocking file I/O inside the async terminal crate
//!
//! The helpers below are shared by the test files under `tests/`.

use std::fs;
use std::path::{Path, PathBuf};

/// One offending source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: PathBuf,
    pub line: usize,
    pub text: String,
    pub rule: &'static str,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} - {}: {}",
            self.path.display(),
            self.line,
            self.rule,
            self.text
        )
    }
}

/// A forbidden pattern and the rule name reported for it
pub struct Rule {
    pub name: &'static str,
    pub patterns: &'static [&'static str],
}

/// Workspace root (two levels above this package)
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

/// All `.rs` files below `dir` (relative to the workspace root)
pub fn rust_files(dir: &str) -> Vec<PathBuf> {
    let root = workspace_root().join(dir);
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}

/// Production lines of a file: comments stripped, `#[cfg(test)]` module
/// and everything after it dropped
pub fn production_lines(content: &str) -> Vec<(usize, &str)> {
    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| line.trim() != "#[cfg(test)]")
        .map(|(idx, line)| (idx + 1, line.split("//").next().unwrap_or(line)))
        .collect()
}

/// Check every production line below `dir` against `rules`
pub fn scan(dir: &str, rules: &[Rule]) -> Vec<Violation> {
    let mut violations = Vec::new();

    for path in rust_files(dir) {
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(_) => continue,
        };

        for (line_number, code) in production_lines(&content) {
            for rule in rules {
                if rule.patterns.iter().any(|p| code.contains(p)) {
                    violations.push(Violation {
                        path: path.clone(),
                        line: line_number,
                        text: code.trim().to_string(),
                        rule: rule.name,
                    });
                }
            }
        }
    }

    violations
}

/// Panic with a readable report if anything was found
pub fn assert_clean(what: &str, violations: &[Violation]) {
    if violations.is_empty() {
        return;
    }

    eprintln!("\n❌ {what}\n");
    for violation in violations {
        eprintln!("  ❌ {violation}");
    }
    panic!(
        "\nFound {} violation(s) in production code.\nFix these before merging!",
        violations.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_lines_skip_comments_and_tests() {
        let src = "use a; // std::fs\n/// std::net\nfn f() {}\n#[cfg(test)]\nmod tests { std::fs }\n";
        let lines = production_lines(src);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], (1, "use a; "));
        assert_eq!(lines[1], (2, ""));
    }

    #[test]
    fn test_workspace_root_has_members() {
        let root = workspace_root();
        assert!(root.join("core").join("src").is_dir());
        assert!(root.join("tui").join("src").is_dir());
    }
}
