//! Determinism of manifests across runs and creation order

use super::test_utils::write_file;
use repohash::config::ScanConfig;
use repohash::Scanner;
use std::fs;
use tempfile::TempDir;

const FILES: &[(&str, &str)] = &[
    ("z_file.txt", "z"),
    ("a_file.txt", "a"),
    ("m/inner.txt", "m"),
    ("m.txt", "dot"),
    ("N/upper.txt", "upper"),
    ("m-dash/x.txt", "dash"),
];

/// Same filesystem produces byte-identical manifests
#[test]
fn test_two_runs_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    for (path, content) in FILES {
        write_file(root, path, content.as_bytes());
    }

    let scanner = Scanner::new(root, ScanConfig::default()).unwrap();
    let first = fs::read(scanner.generate().unwrap().output).unwrap();
    let second = fs::read(scanner.generate().unwrap().output).unwrap();

    assert_eq!(first, second);
}

/// Trees built in different orders produce the same manifest
#[test]
fn test_creation_order_irrelevant() {
    let forward = TempDir::new().unwrap();
    for (path, content) in FILES {
        write_file(forward.path(), path, content.as_bytes());
    }

    let backward = TempDir::new().unwrap();
    for (path, content) in FILES.iter().rev() {
        write_file(backward.path(), path, content.as_bytes());
    }

    let a = Scanner::new(forward.path(), ScanConfig::default())
        .unwrap()
        .generate()
        .unwrap();
    let b = Scanner::new(backward.path(), ScanConfig::default())
        .unwrap()
        .generate()
        .unwrap();

    assert_eq!(fs::read(a.output).unwrap(), fs::read(b.output).unwrap());
}

/// Output order is strictly ascending byte-wise, with forward slashes only
#[test]
fn test_sorted_and_slash_normalized() {
    let temp_dir = TempDir::new().unwrap();
    for (path, content) in FILES {
        write_file(temp_dir.path(), path, content.as_bytes());
    }

    let report = Scanner::new(temp_dir.path(), ScanConfig::default())
        .unwrap()
        .scan()
        .unwrap();
    let paths: Vec<&str> = report
        .manifest
        .records()
        .iter()
        .map(|r| r.relative_path.as_str())
        .collect();

    assert_eq!(
        paths,
        vec![
            "N/upper.txt",
            "a_file.txt",
            "m-dash/x.txt",
            "m.txt",
            "m/inner.txt",
            "z_file.txt",
        ]
    );
    for pair in paths.windows(2) {
        assert!(pair[0].as_bytes() < pair[1].as_bytes());
    }
    assert!(paths.iter().all(|p| !p.contains('\\')));
}

/// Content changes show up in the manifest
#[test]
fn test_content_change_changes_hash() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "file.txt", b"content1");

    let scanner = Scanner::new(temp_dir.path(), ScanConfig::default()).unwrap();
    let before = scanner.scan().unwrap().manifest;

    write_file(temp_dir.path(), "file.txt", b"content2");
    let after = scanner.scan().unwrap().manifest;

    assert_ne!(before.records()[0].hash, after.records()[0].hash);
    assert_eq!(before.records()[0].relative_path, after.records()[0].relative_path);
}
