//! End-to-end manifest generation over the reference tree

use super::test_utils::{reference_tree, sha256_hex};
use repohash::config::ScanConfig;
use repohash::{Manifest, Scanner};
use std::fs;

#[test]
fn test_reference_scenario() {
    let temp_dir = reference_tree();
    let root = temp_dir.path();

    let report = Scanner::new(root, ScanConfig::default())
        .unwrap()
        .generate()
        .unwrap();

    let manifest = Manifest::load(&root.join("hashes.json")).unwrap();
    assert_eq!(manifest, report.scan.manifest);
    assert_eq!(manifest.len(), 2);

    let records = manifest.records();
    assert_eq!(records[0].relative_path, "a/b/two.txt");
    assert_eq!(records[0].name, "two.txt");
    assert_eq!(records[0].hash, sha256_hex(b"world"));

    assert_eq!(records[1].relative_path, "a/one.txt");
    assert_eq!(records[1].name, "one.txt");
    assert_eq!(records[1].hash, sha256_hex(b"hello"));
}

#[test]
fn test_manifest_bytes_exact() {
    let temp_dir = reference_tree();
    let root = temp_dir.path();

    Scanner::new(root, ScanConfig::default())
        .unwrap()
        .generate()
        .unwrap();

    let expected = format!(
        "[\n  {{\n    \"Name\": \"two.txt\",\n    \"SHA256\": \"{}\",\n    \"RelativePath\": \"a/b/two.txt\"\n  }},\n  {{\n    \"Name\": \"one.txt\",\n    \"SHA256\": \"{}\",\n    \"RelativePath\": \"a/one.txt\"\n  }}\n]",
        sha256_hex(b"world"),
        sha256_hex(b"hello")
    );
    assert_eq!(fs::read_to_string(root.join("hashes.json")).unwrap(), expected);
}

#[test]
fn test_empty_tree_writes_empty_array() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    let report = Scanner::new(temp_dir.path(), ScanConfig::default())
        .unwrap()
        .generate()
        .unwrap();

    assert!(report.scan.manifest.is_empty());
    assert_eq!(fs::read_to_string(&report.output).unwrap(), "[]");
}

#[test]
fn test_hashes_are_lowercase_hex() {
    let temp_dir = reference_tree();
    let report = Scanner::new(temp_dir.path(), ScanConfig::default())
        .unwrap()
        .scan()
        .unwrap();

    for record in report.manifest.records() {
        assert_eq!(record.hash.len(), 64);
        assert!(record
            .hash
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}

#[test]
fn test_non_ascii_names_written_literally() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let root = temp_dir.path();
    super::test_utils::write_file(root, "données/résumé.txt", "contenu".as_bytes());

    let report = Scanner::new(root, ScanConfig::default())
        .unwrap()
        .generate()
        .unwrap();

    let json = fs::read_to_string(&report.output).unwrap();
    assert!(json.contains("\"RelativePath\": \"données/résumé.txt\""));
    assert!(json.contains("\"Name\": \"résumé.txt\""));
}

#[cfg(unix)]
#[test]
fn test_backslash_name_collision_keeps_both_records() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let root = temp_dir.path();
    super::test_utils::write_file(root, "a/b", b"nested");
    fs::write(root.join("a\\b"), b"backslash").unwrap();

    let report = Scanner::new(root, ScanConfig::default())
        .unwrap()
        .scan()
        .unwrap();

    assert_eq!(report.manifest.len(), 2);
    assert_eq!(report.manifest.duplicate_paths(), vec!["a/b"]);
    assert!(report.skipped.is_empty());
}
