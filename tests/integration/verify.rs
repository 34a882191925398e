//! Verifying a tree against a previously written manifest

use super::test_utils::{reference_tree, write_file};
use repohash::config::ScanConfig;
use repohash::{Manifest, ManifestDiff, Scanner};
use std::fs;

#[test]
fn test_untouched_tree_verifies_clean() {
    let temp_dir = reference_tree();
    let scanner = Scanner::new(temp_dir.path(), ScanConfig::default()).unwrap();
    let written = scanner.generate().unwrap();

    let expected = Manifest::load(&written.output).unwrap();
    let actual = scanner.scan().unwrap().manifest;
    assert!(ManifestDiff::between(&expected, &actual).is_clean());
}

#[test]
fn test_drift_is_reported() {
    let temp_dir = reference_tree();
    let root = temp_dir.path();
    let scanner = Scanner::new(root, ScanConfig::default()).unwrap();
    let written = scanner.generate().unwrap();

    write_file(root, "a/one.txt", b"tampered");
    fs::remove_file(root.join("a/b/two.txt")).unwrap();
    write_file(root, "c/three.txt", b"new");
    // Excluded paths never count as drift
    write_file(root, ".git/new-object", b"blob");

    let expected = Manifest::load(&written.output).unwrap();
    let actual = scanner.scan().unwrap().manifest;
    let diff = ManifestDiff::between(&expected, &actual);

    assert_eq!(diff.added, vec!["c/three.txt".to_string()]);
    assert_eq!(diff.removed, vec!["a/b/two.txt".to_string()]);
    assert_eq!(diff.modified.len(), 1);
    assert_eq!(diff.modified[0].relative_path, "a/one.txt");
}

#[test]
fn test_unreadable_file_is_skipped_not_drift() {
    let temp_dir = reference_tree();
    let root = temp_dir.path();
    write_file(root, "flaky.txt", b"here for now");

    let scanner = Scanner::new(root, ScanConfig::default()).unwrap();
    let written = scanner.generate().unwrap();
    let expected = Manifest::load(&written.output).unwrap();
    assert!(expected.get("flaky.txt").is_some());

    let walker = scanner.walker();
    let entries: Vec<_> = walker.entries().collect();
    fs::remove_file(root.join("flaky.txt")).unwrap();

    let report = scanner.verify_entries(&expected, entries).unwrap();
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].relative_path, "flaky.txt");
    assert!(report.diff.removed.is_empty());
    assert!(report.diff.modified.is_empty());
    assert!(report.is_clean());
}

#[test]
fn test_verify_reports_real_drift_next_to_skips() {
    let temp_dir = reference_tree();
    let root = temp_dir.path();
    write_file(root, "flaky.txt", b"here for now");

    let scanner = Scanner::new(root, ScanConfig::default()).unwrap();
    let expected = scanner.generate().unwrap().scan.manifest;

    write_file(root, "a/one.txt", b"tampered");
    let walker = scanner.walker();
    let entries: Vec<_> = walker.entries().collect();
    fs::remove_file(root.join("flaky.txt")).unwrap();

    let report = scanner.verify_entries(&expected, entries).unwrap();
    assert!(!report.is_clean());
    assert_eq!(report.diff.change_count(), 1);
    assert_eq!(report.diff.modified[0].relative_path, "a/one.txt");
    assert_eq!(report.skipped[0].relative_path, "flaky.txt");
}
