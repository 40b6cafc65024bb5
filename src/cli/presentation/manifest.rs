//! Manifest command presentation: table, json, and toml renderings.

use crate::cli::parse::ManifestFormat;
use crate::cli::presentation::shared::count_label;
use crate::error::ScaffoldError;
use crate::manifest::{Manifest, PlannedKind, PlannedPath};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct ManifestListing<'a> {
    base_dir: &'a Path,
    manifest: &'a Manifest,
    planned: Vec<PlannedPath>,
}

pub fn format_manifest(
    manifest: &Manifest,
    base_dir: &Path,
    format: ManifestFormat,
) -> Result<String, ScaffoldError> {
    let listing = || ManifestListing {
        base_dir,
        manifest,
        planned: manifest.planned_paths(base_dir),
    };
    match format {
        ManifestFormat::Json => Ok(serde_json::to_string_pretty(&listing())?),
        ManifestFormat::Toml => Ok(toml::to_string_pretty(&listing())?),
        ManifestFormat::Text => Ok(format_manifest_table(manifest, base_dir)),
    }
}

fn format_manifest_table(manifest: &Manifest, base_dir: &Path) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Kind", "Path"]);
    for planned in manifest.planned_paths(base_dir) {
        let kind = match planned.kind {
            PlannedKind::Directory => "dir",
            PlannedKind::File => "file",
            PlannedKind::RootFile => "root file",
        };
        table.add_row(vec![kind.to_string(), planned.path.display().to_string()]);
    }

    format!(
        "Base directory: {}\n{}, {}\n{}",
        base_dir.display(),
        count_label(manifest.entries().len(), "directory", "directories"),
        count_label(manifest.file_count(), "file", "files"),
        table
    )
}
