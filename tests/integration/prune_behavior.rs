//! Integration tests for directory pruning semantics.

use hashwalk::scan::{LineReporter, PruneSet, ScanOptions, Scanner};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn run_scan(root: &Path, options: ScanOptions) -> String {
    let scanner = Scanner::with_options(root.to_path_buf(), options);
    let mut reporter = LineReporter::new(Vec::new());
    scanner.run(&mut reporter).unwrap();
    String::from_utf8(reporter.into_inner()).unwrap()
}

/// Base-name matching prunes a directory at any depth, not just at the root.
#[test]
fn test_prune_matches_basename_at_any_depth() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir_all(root.join("src").join("test").join("deep")).unwrap();
    fs::write(root.join("src").join("main.rs"), "fn main() {}").unwrap();
    fs::write(root.join("src").join("test").join("direct.txt"), "x").unwrap();
    fs::write(
        root.join("src").join("test").join("deep").join("nested.txt"),
        "y",
    )
    .unwrap();

    let output = run_scan(root, ScanOptions::default());

    assert_eq!(output.lines().count(), 1);
    assert!(output.contains("main.rs"));
    assert!(!output.contains("direct.txt"));
    assert!(!output.contains("nested.txt"));
}

/// Adding a prune name that matches no directory leaves output unchanged.
#[test]
fn test_prune_of_absent_name_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::write(root.join("a.txt"), "a").unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub").join("b.txt"), "b").unwrap();

    let baseline = run_scan(root, ScanOptions::default());

    let mut prune = PruneSet::with_defaults();
    prune.extend(["no_such_directory_anywhere"]);
    let widened = run_scan(
        root,
        ScanOptions {
            prune,
            ..ScanOptions::default()
        },
    );

    assert_eq!(baseline, widened);
}

/// Extra prune names from options are honored alongside the built-ins.
#[test]
fn test_custom_prune_name() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::write(root.join("kept.txt"), "kept").unwrap();
    fs::create_dir(root.join("vendor")).unwrap();
    fs::write(root.join("vendor").join("dep.txt"), "dep").unwrap();

    let mut prune = PruneSet::with_defaults();
    prune.extend(["vendor"]);
    let output = run_scan(
        root,
        ScanOptions {
            prune,
            ..ScanOptions::default()
        },
    );

    assert_eq!(output.lines().count(), 1);
    assert!(output.contains("kept.txt"));
    assert!(!output.contains("dep.txt"));
}

/// An empty prune set descends everywhere, including directories the
/// built-ins would skip.
#[test]
fn test_empty_prune_set_descends_everywhere() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir(root.join("test")).unwrap();
    fs::write(root.join("test").join("c.txt"), "c").unwrap();

    let output = run_scan(
        root,
        ScanOptions {
            prune: PruneSet::empty(),
            ..ScanOptions::default()
        },
    );

    assert_eq!(output.lines().count(), 1);
    assert!(output.contains("c.txt"));
}

/// A root whose own base name is in the prune set produces no output,
/// matching skip-at-visit semantics.
#[test]
fn test_root_itself_can_be_pruned() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("test");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("inside.txt"), "inside").unwrap();

    let output = run_scan(&root, ScanOptions::default());

    assert!(output.is_empty());
}

/// Pruning is silent: skipped subtrees do not count as errors.
#[test]
fn test_pruned_subtree_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::write(root.join("a.txt"), "a").unwrap();
    fs::create_dir(root.join("log")).unwrap();
    fs::write(root.join("log").join("noise.txt"), "noise").unwrap();

    let scanner = Scanner::with_options(root.to_path_buf(), ScanOptions::default());
    let mut reporter = LineReporter::new(Vec::new());
    let summary = scanner.run(&mut reporter).unwrap();

    assert_eq!(summary.files_hashed, 1);
    assert_eq!(summary.entries_skipped, 0);
}
