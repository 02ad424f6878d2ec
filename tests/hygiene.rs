//! Hygiene: source-level rules for `src/`, checked at test time.
//!
//! Browser code has no good place to surface a panic, so production sources
//! carry a zero budget for anything that can abort or silently drop an error.
//! Test files (`*_test.rs`) are exempt.

use std::fs;
use std::path::{Path, PathBuf};

struct SourceFile {
    path: String,
    content: String,
}

fn production_sources() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    let mut paths: Vec<PathBuf> = entries.flatten().map(|e| e.path()).collect();
    paths.sort();
    for path in paths {
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|f| (f.path.clone(), f.content.lines().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, n)| *n > 0)
        .collect()
}

fn assert_absent(pattern: &str, why: &str) {
    let files = production_sources();
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    let found = hits(&files, pattern);
    let listing = found
        .iter()
        .map(|(path, n)| format!("  {path}: {n}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(found.is_empty(), "`{pattern}` is not allowed in production code ({why}):\n{listing}");
}

#[test]
fn no_unwrap() {
    assert_absent(".unwrap()", "panics in the browser");
}

#[test]
fn no_expect() {
    assert_absent(".expect(", "panics in the browser");
}

#[test]
fn no_panic() {
    assert_absent("panic!(", "aborts the page script");
}

#[test]
fn no_unreachable() {
    assert_absent("unreachable!(", "aborts the page script");
}

#[test]
fn no_todo_or_unimplemented() {
    assert_absent("todo!(", "unfinished code");
    assert_absent("unimplemented!(", "unfinished code");
}

#[test]
fn no_silent_discard() {
    assert_absent("let _ =", "log or propagate instead");
}

#[test]
fn no_dot_ok() {
    assert_absent(".ok()", "drops the error value");
}

#[test]
fn no_allow_dead_code() {
    assert_absent("#[allow(dead_code)]", "delete unused code");
}

#[test]
fn every_test_file_is_wired_in() {
    let Ok(entries) = fs::read_dir("src") else {
        return;
    };
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().to_string();
        let Some(module) = name.strip_suffix("_test.rs") else {
            continue;
        };
        let parent = format!("src/{module}.rs");
        let content = fs::read_to_string(&parent).unwrap_or_default();
        assert!(
            content.contains(&format!("#[path = \"{name}\"]")),
            "{name} exists but {parent} does not include it"
        );
    }
}
