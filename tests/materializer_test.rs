use std::cell::Cell;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clean_folder::error::Error;
use clean_folder::materializer::{materialize, materialize_with, DirCreator, FileSystem};
use clean_folder::structure::PROJECT_STRUCTURE;
use tempfile::TempDir;
use walkdir::WalkDir;

/// All entries below `root`, relative to it.
fn entries(root: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| entry.unwrap().path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

/// Creates directories for real but refuses the `fail_on`-th call.
struct FailingCreator {
    calls: Cell<usize>,
    fail_on: usize,
}

impl DirCreator for FailingCreator {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let call = self.calls.get() + 1;
        self.calls.set(call);
        if call == self.fail_on {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        FileSystem.create_dir_all(path)
    }
}

#[test_log::test]
fn test_creates_exactly_the_template() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    materialize(root, PROJECT_STRUCTURE).unwrap();

    let expected: BTreeSet<PathBuf> = [
        "00 Proj",
        "01 Video",
        "01 Video/K 1",
        "01 Video/K 2",
        "01 Video/K 3",
        "01 Video/Audio",
        "02 Additional",
        "03 Music",
        "04 SFX",
        "05 Export",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();

    let created = entries(root);
    assert_eq!(created, expected);
    assert!(created.iter().all(|p| root.join(p).is_dir()));
}

#[test]
fn test_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    materialize(root, PROJECT_STRUCTURE).unwrap();
    let first = entries(root);

    materialize(root, PROJECT_STRUCTURE).unwrap();
    assert_eq!(entries(root), first);
}

#[test]
fn test_keeps_unrelated_entries() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir(root.join("Foo")).unwrap();
    fs::write(root.join("Foo").join("notes.txt"), "keep me").unwrap();

    materialize(root, PROJECT_STRUCTURE).unwrap();

    assert!(root.join("Foo").is_dir());
    assert_eq!(fs::read_to_string(root.join("Foo").join("notes.txt")).unwrap(), "keep me");
}

#[test]
fn test_creates_missing_root() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("a").join("b");

    materialize(&root, PROJECT_STRUCTURE).unwrap();

    assert!(root.join("01 Video").join("Audio").is_dir());
}

#[test_log::test]
fn test_partial_failure_is_not_rolled_back() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let creator = FailingCreator { calls: Cell::new(0), fail_on: 3 };

    let err = materialize_with(&creator, root, PROJECT_STRUCTURE).unwrap_err();

    match err {
        Error::PermissionDenied { path, .. } => assert_eq!(path, root.join("01 Video").join("K 1")),
        other => panic!("Expected PermissionDenied, got {:?}", other),
    }
    let expected: BTreeSet<PathBuf> = ["00 Proj", "01 Video"].iter().map(PathBuf::from).collect();
    assert_eq!(entries(root), expected);
}

#[test]
fn test_file_in_the_way() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("00 Proj"), "not a folder").unwrap();

    let err = materialize(root, PROJECT_STRUCTURE).unwrap_err();

    assert!(matches!(err, Error::InvalidPath { .. }), "{:?}", err);
    assert!(root.join("00 Proj").is_file());
}
