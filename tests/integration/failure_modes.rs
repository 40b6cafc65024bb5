//! First filesystem failure aborts the run without rollback

use donlocal_scaffold::manifest::{Manifest, ManifestEntry};
use donlocal_scaffold::scaffold::{ScaffoldEvent, Scaffolder};
use donlocal_scaffold::ScaffoldError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_base_dir_occupied_by_file() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("src");
    fs::write(&base, "").unwrap();
    let manifest = Manifest::builtin();
    let mut created = 0usize;

    let err = Scaffolder::new(&manifest)
        .with_observer(|event: &ScaffoldEvent| {
            if !matches!(event, ScaffoldEvent::Started(_)) {
                created += 1;
            }
        })
        .run(&base.join("app"))
        .unwrap_err();

    assert!(matches!(err, ScaffoldError::CreateDirectory { .. }));
    assert_eq!(created, 0);
    assert!(base.is_file());
}

#[test]
fn test_directory_blocked_by_file_mid_run() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("out");
    fs::create_dir_all(&base).unwrap();
    // `b` must become a directory but a file holds the name
    fs::write(base.join("b"), "").unwrap();
    let manifest = Manifest::new(
        vec![
            ManifestEntry::new("a", ["one.txt"]),
            ManifestEntry::new("b/c", ["two.txt"]),
            ManifestEntry::new("d", ["three.txt"]),
        ],
        ["root.txt"],
    );

    let err = scaffold_err(&base, &manifest);

    assert!(err.is_filesystem_failure());
    assert!(base.join("a").join("one.txt").is_file());
    assert!(!base.join("d").exists());
    assert!(!base.join("root.txt").exists());
}

#[test]
fn test_root_file_blocked_by_directory() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("out");
    fs::create_dir_all(base.join("y.txt")).unwrap();
    let manifest = Manifest::new(vec![ManifestEntry::new("a", ["x.txt"])], ["y.txt", "z.txt"]);

    let err = scaffold_err(&base, &manifest);

    assert!(matches!(err, ScaffoldError::CreateFile { ref path, .. } if path == &base.join("y.txt")));
    assert!(base.join("a").join("x.txt").is_file());
    assert!(!base.join("z.txt").exists());
}

fn scaffold_err(base: &std::path::Path, manifest: &Manifest) -> ScaffoldError {
    donlocal_scaffold::scaffold::run(base, manifest).unwrap_err()
}
