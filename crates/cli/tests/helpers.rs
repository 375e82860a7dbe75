use std::fs;

use fatar::collect_archive_paths;
use tempfile::tempdir;

#[test]
fn collect_archive_paths_finds_nested_archives_sorted() {
    let tmp = tempdir().expect("tempdir");
    let nested = tmp.path().join("thirdparty").join("zlib");
    fs::create_dir_all(&nested).expect("create nested");
    fs::write(tmp.path().join("libz.a"), b"").expect("write");
    fs::write(nested.join("libdeflate.a"), b"").expect("write");
    fs::write(tmp.path().join("notes.txt"), b"").expect("write");

    let found = collect_archive_paths(tmp.path()).expect("collect");
    assert_eq!(found.len(), 2);
    assert!(found[0] < found[1], "paths should be sorted");
    assert!(found.iter().all(|p| p.extension().and_then(|e| e.to_str()) == Some("a")));
}

#[test]
fn collect_archive_paths_ignores_other_extensions() {
    let tmp = tempdir().expect("tempdir");
    fs::write(tmp.path().join("lib.so"), b"").expect("write");
    fs::write(tmp.path().join("archive.tar"), b"").expect("write");

    let found = collect_archive_paths(tmp.path()).expect("collect");
    assert!(found.is_empty());
}

#[test]
fn collect_archive_paths_errors_on_missing_dir() {
    let tmp = tempdir().expect("tempdir");
    let missing = tmp.path().join("no_such_dir");
    let err = collect_archive_paths(&missing).expect_err("should fail");
    assert!(err.to_string().contains("Failed to read directory"));
}

#[test]
fn collect_archive_paths_on_empty_dir_is_empty() {
    let tmp = tempdir().expect("tempdir");
    let found = collect_archive_paths(tmp.path()).expect("collect");
    assert!(found.is_empty());
}
