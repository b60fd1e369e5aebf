// Local state scanner against a tempdir in various states of completeness.

#[allow(dead_code)]
mod common;

use std::collections::HashSet;
use std::path::Path;

use common::card;
use svgdb_mirror::store::filename::{image_path, sidecar_path};
use svgdb_mirror::store::scan::scan;
use svgdb_mirror::store::sidecar::write_sidecar;
use svgdb_mirror::sync::IoPool;
use svgdb_mirror::variant::{expand, CardVariant};

fn persist_complete(variant: &CardVariant, dir: &Path) {
    let image = image_path(variant, dir);
    write_sidecar(&sidecar_path(&image), variant).unwrap();
    std::fs::write(&image, b"not a real png").unwrap();
}

#[tokio::test]
async fn test_scan_returns_complete_records_only() {
    let dir = tempfile::tempdir().unwrap();
    let variants = expand(&card(7), &HashSet::new());

    // Complete: sidecar + image.
    persist_complete(&variants[0], dir.path());

    // Sidecar without a companion image — incomplete, must not block a redownload.
    let orphan_image = image_path(&variants[1], dir.path());
    write_sidecar(&sidecar_path(&orphan_image), &variants[1]).unwrap();

    // Image without a sidecar — ignored.
    std::fs::write(dir.path().join("stray.png"), b"x").unwrap();

    let records = scan(dir.path(), &IoPool::new(4)).await.unwrap();
    assert_eq!(records, vec![variants[0].clone()]);
}

#[tokio::test]
async fn test_corrupt_sidecar_is_skipped_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let variants = expand(&card(7), &HashSet::new());
    persist_complete(&variants[0], dir.path());

    // Corrupt sidecar with an existing companion image.
    std::fs::write(dir.path().join("bad.png"), b"x").unwrap();
    std::fs::write(dir.path().join("bad.png.json"), b"{ not json").unwrap();

    let records = scan(dir.path(), &IoPool::new(4)).await.unwrap();
    assert_eq!(records, vec![variants[0].clone()]);
}

#[tokio::test]
async fn test_scan_of_missing_directory_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("never-created");
    let records = scan(&missing, &IoPool::new(4)).await.unwrap();
    assert!(records.is_empty());
}
