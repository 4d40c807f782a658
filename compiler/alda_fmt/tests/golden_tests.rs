//! Golden tests for the Alda formatter.
//!
//! Each `tests/fmt/<name>.json` file holds a serialized score tree; formatting
//! it must reproduce `tests/fmt/<name>.alda` byte for byte.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::fs;
use std::path::{Path, PathBuf};

use alda_fmt::{format_to_string, FormatConfig};
use alda_ir::Node;

/// Get the path to the tests/fmt directory.
fn golden_tests_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fmt")
}

/// Find all tree fixtures in a directory.
fn find_tree_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .map(|entry| entry.path())
                .filter(|path| path.extension().is_some_and(|e| e == "json"))
                .collect()
        })
        .unwrap_or_default();
    files.sort();
    files
}

/// Run a single golden test file.
fn run_golden_test(path: &Path) -> Result<(), String> {
    let json = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let tree: Node = serde_json::from_str(&json)
        .map_err(|e| format!("Invalid tree in {}: {e}", path.display()))?;

    let expected_path = path.with_extension("alda");
    let expected = fs::read_to_string(&expected_path)
        .map_err(|e| format!("Failed to read {}: {e}", expected_path.display()))?;

    let formatted = format_to_string(&tree, &FormatConfig::default())
        .map_err(|e| format!("Failed to format {}: {e}", path.display()))?;

    if formatted != expected {
        return Err(format!(
            "Formatting mismatch for {}:\n\n--- Expected ---\n{expected}\n--- Got ---\n{formatted}\n",
            path.display(),
        ));
    }
    Ok(())
}

#[test]
fn golden_tests_fmt() {
    let files = find_tree_files(&golden_tests_dir());
    assert!(!files.is_empty(), "no golden fixtures found");

    let failures: Vec<String> = files
        .iter()
        .filter_map(|path| run_golden_test(path).err())
        .collect();

    assert!(
        failures.is_empty(),
        "{} golden test(s) failed:\n\n{}",
        failures.len(),
        failures.join("\n")
    );
}

#[test]
fn golden_output_is_stable_across_runs() {
    for path in find_tree_files(&golden_tests_dir()) {
        let tree: Node = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let first = format_to_string(&tree, &FormatConfig::default()).unwrap();
        let second = format_to_string(&tree, &FormatConfig::default()).unwrap();
        pretty_assertions::assert_eq!(first, second, "{}", path.display());
    }
}
