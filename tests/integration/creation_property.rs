//! Property: every planned file exists and is empty after a run

use donlocal_scaffold::manifest::{Manifest, ManifestEntry, PlannedKind};
use donlocal_scaffold::scaffold;
use proptest::prelude::*;
use std::collections::BTreeMap;
use tempfile::TempDir;

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,7}"
}

fn file_name() -> impl Strategy<Value = String> {
    ("[a-z][a-z0-9-]{0,7}", prop::sample::select(vec!["ts", "html", "scss"]))
        .prop_map(|(stem, ext)| format!("{}.{}", stem, ext))
}

fn manifest() -> impl Strategy<Value = Manifest> {
    let entry = (
        prop::collection::vec(segment(), 1..4),
        prop::collection::vec(file_name(), 0..4),
    );
    (
        prop::collection::vec(entry, 0..6),
        prop::collection::vec(file_name(), 0..4),
    )
        .prop_map(|(entries, root_files)| {
            // directory paths are unique keys
            let mut unique = BTreeMap::new();
            for (segments, files) in entries {
                unique.entry(segments.join("/")).or_insert(files);
            }
            let entries = unique
                .into_iter()
                .map(|(path, files)| ManifestEntry::new(&path, files))
                .collect();
            Manifest::new(entries, root_files)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_planned_files_exist_and_are_empty(manifest in manifest()) {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("out");

        let result = scaffold::run(&base, &manifest);
        // a file name may collide with a generated directory name
        prop_assume!(result.is_ok());

        for planned in manifest.planned_paths(&base) {
            match planned.kind {
                PlannedKind::Directory => prop_assert!(planned.path.is_dir()),
                PlannedKind::File | PlannedKind::RootFile => {
                    prop_assert!(planned.path.is_file());
                    prop_assert_eq!(std::fs::metadata(&planned.path).unwrap().len(), 0);
                }
            }
        }
    }
}
