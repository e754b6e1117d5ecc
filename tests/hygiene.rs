//! Hygiene: enforces coding standards at test time.
//!
//! These tests scan the client source tree for antipatterns that violate
//! project standards. Each has a budget (ideally zero). If you must add one,
//! you have to fix an existing one first; the budget never grows.
//!
//! Layering rules are checked here too: HTTP lives only in `net::client`, and
//! every sibling test module a source file declares must exist.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::{Path, PathBuf};

/// Pattern → allowed occurrences across production sources.
const BUDGETS: &[(&str, usize)] = &[
    // Panics: these abort the WASM module.
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    // Silent loss. The `let _ =` budget is the off-browser stubs binding
    // their unused parameters.
    ("let _ =", 8),
    (".ok()", 0),
    // Style / structure.
    ("#[allow(dead_code)]", 0),
    ("println!(", 0),
];

/// Modules allowed to touch the HTTP stack directly.
const HTTP_MODULES: &[&str] = &["net/client.rs"];

struct SourceFile {
    path: PathBuf,
    content: String,
}

impl SourceFile {
    fn rel(&self) -> String {
        self.path
            .strip_prefix("src")
            .unwrap_or(&self.path)
            .to_string_lossy()
            .replace('\\', "/")
    }
}

/// Collect production `.rs` files from `src/`, excluding test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            if path.to_string_lossy().ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.rel(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.rel() == "lib.rs"), "run from the crate root");
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, max) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *max {
            failures.push(format!("{pattern} budget exceeded: found {count}, max {max}.\n{}", format_hits(&found)));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn http_stays_in_net_client() {
    let files = source_files();
    let offenders: Vec<(String, usize)> = hits(&files, "gloo_net")
        .into_iter()
        .filter(|(path, _)| !HTTP_MODULES.contains(&path.as_str()))
        .collect();
    assert!(
        offenders.is_empty(),
        "gloo_net used outside net::client:\n{}",
        format_hits(&offenders)
    );
}

#[test]
fn declared_test_modules_exist() {
    let files = source_files();
    let mut missing = Vec::new();
    for file in &files {
        let dir = file.path.parent().unwrap_or(Path::new("src"));
        for line in file.content.lines() {
            let Some(rest) = line.trim().strip_prefix("#[path = \"") else {
                continue;
            };
            let Some(name) = rest.strip_suffix("\"]") else {
                continue;
            };
            if !dir.join(name).is_file() {
                missing.push(format!("  {} -> {name}", file.rel()));
            }
        }
    }
    assert!(missing.is_empty(), "missing test modules:\n{}", missing.join("\n"));
}
