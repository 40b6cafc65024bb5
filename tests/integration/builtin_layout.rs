//! The built-in DonLocal layout materializes exactly as declared

use donlocal_scaffold::manifest::{Manifest, PlannedKind};
use donlocal_scaffold::scaffold;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::integration::test_utils::{file_len, rel, tree_snapshot};

#[test]
fn test_builtin_tree_matches_manifest() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("src").join("app");
    let manifest = Manifest::builtin();

    let report = scaffold::run(&base, &manifest).unwrap();
    assert_eq!(report.directories.len(), 19);
    assert_eq!(report.file_count(), 61);

    for entry in manifest.entries() {
        let folder = entry.folder(&base);
        assert!(folder.is_dir(), "missing directory {:?}", folder);
        let on_disk: BTreeSet<String> = std::fs::read_dir(&folder)
            .unwrap()
            .map(|e| e.unwrap())
            .filter(|e| e.file_type().unwrap().is_file())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();
        let declared: BTreeSet<String> = entry.files().iter().cloned().collect();
        assert_eq!(on_disk, declared, "files of {:?}", folder);
        for name in entry.files() {
            assert_eq!(file_len(&folder.join(name)), 0);
        }
    }

    for name in manifest.root_files() {
        assert_eq!(file_len(&base.join(name)), 0);
    }
}

#[test]
fn test_builtin_creates_nothing_undeclared() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("app");
    let manifest = Manifest::builtin();
    scaffold::run(&base, &manifest).unwrap();

    let (dirs, files) = tree_snapshot(&base);

    let planned = manifest.planned_paths(&base);
    let expected_files: BTreeSet<PathBuf> = planned
        .iter()
        .filter(|p| p.kind != PlannedKind::Directory)
        .map(|p| p.path.strip_prefix(&base).unwrap().to_path_buf())
        .collect();
    assert_eq!(files, expected_files);

    // intermediate parents such as `core/components` are implied
    let mut expected_dirs = BTreeSet::new();
    for p in planned.iter().filter(|p| p.kind == PlannedKind::Directory) {
        let mut current = p.path.strip_prefix(&base).unwrap().to_path_buf();
        loop {
            expected_dirs.insert(current.clone());
            if !current.pop() || current.as_os_str().is_empty() {
                break;
            }
        }
    }
    assert_eq!(dirs, expected_dirs);
    assert!(dirs.contains(&rel("features/resources")));
    assert!(files.contains(&rel("shared/pipes/filter.pipe.ts")));
    assert!(files.contains(&rel("app.module.ts")));
}
