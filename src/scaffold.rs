//! Scaffolder
//!
//! Materializes a [`Manifest`] under a base directory: the base directory is
//! created first, then every entry's directory followed by its empty files,
//! then the root files. Creation is sequential and blocking. The first
//! filesystem failure aborts the run and nothing already created is removed.
//!
//! Existing files are truncated to zero bytes, so re-running against a
//! populated tree discards whatever was written into the declared files.

use crate::error::ScaffoldError;
use crate::manifest::Manifest;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Progress notice emitted while a run proceeds, in creation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldEvent {
    Started(PathBuf),
    DirectoryCreated(PathBuf),
    FileCreated(PathBuf),
    RootFileCreated(PathBuf),
    Finished(PathBuf),
}

/// Receives progress notices from a run
pub trait ScaffoldObserver {
    fn on_event(&mut self, event: &ScaffoldEvent);
}

impl<F> ScaffoldObserver for F
where
    F: FnMut(&ScaffoldEvent),
{
    fn on_event(&mut self, event: &ScaffoldEvent) {
        self(event)
    }
}

/// Observer that discards every notice
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl ScaffoldObserver for SilentObserver {
    fn on_event(&mut self, _event: &ScaffoldEvent) {}
}

/// Paths created by a successful run, in creation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub base_dir: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
    pub root_files: Vec<PathBuf>,
}

impl ScaffoldReport {
    fn new(base_dir: &Path) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
            ..Self::default()
        }
    }

    /// Files created, root files included.
    pub fn file_count(&self) -> usize {
        self.files.len() + self.root_files.len()
    }
}

/// Creates the skeleton described by a manifest
pub struct Scaffolder<'m, O: ScaffoldObserver = SilentObserver> {
    manifest: &'m Manifest,
    observer: O,
}

impl<'m> Scaffolder<'m, SilentObserver> {
    pub fn new(manifest: &'m Manifest) -> Self {
        Self {
            manifest,
            observer: SilentObserver,
        }
    }
}

impl<'m, O: ScaffoldObserver> Scaffolder<'m, O> {
    /// Attach an observer that receives every progress notice.
    pub fn with_observer<P: ScaffoldObserver>(self, observer: P) -> Scaffolder<'m, P> {
        Scaffolder {
            manifest: self.manifest,
            observer,
        }
    }

    /// Run the scaffold under `base_dir`.
    pub fn run(&mut self, base_dir: &Path) -> Result<ScaffoldReport, ScaffoldError> {
        info!(
            base_dir = %base_dir.display(),
            entries = self.manifest.entries().len(),
            files = self.manifest.file_count(),
            "Scaffold started"
        );
        self.observer
            .on_event(&ScaffoldEvent::Started(base_dir.to_path_buf()));

        create_directory(base_dir)?;
        let mut report = ScaffoldReport::new(base_dir);

        for entry in self.manifest.entries() {
            let folder = entry.folder(base_dir);
            create_directory(&folder)?;
            debug!(path = %folder.display(), "Created directory");
            self.observer
                .on_event(&ScaffoldEvent::DirectoryCreated(folder.clone()));

            for name in entry.files() {
                let file_path = folder.join(name);
                create_empty_file(&file_path)?;
                debug!(path = %file_path.display(), "Created file");
                self.observer
                    .on_event(&ScaffoldEvent::FileCreated(file_path.clone()));
                report.files.push(file_path);
            }
            report.directories.push(folder);
        }

        for name in self.manifest.root_files() {
            let file_path = base_dir.join(name);
            create_empty_file(&file_path)?;
            debug!(path = %file_path.display(), "Created root file");
            self.observer
                .on_event(&ScaffoldEvent::RootFileCreated(file_path.clone()));
            report.root_files.push(file_path);
        }

        info!(
            base_dir = %base_dir.display(),
            directories = report.directories.len(),
            files = report.file_count(),
            "Scaffold finished"
        );
        self.observer
            .on_event(&ScaffoldEvent::Finished(base_dir.to_path_buf()));
        Ok(report)
    }
}

/// Scaffold `manifest` under `base_dir` without progress output.
pub fn run(base_dir: &Path, manifest: &Manifest) -> Result<ScaffoldReport, ScaffoldError> {
    Scaffolder::new(manifest).run(base_dir)
}

fn create_directory(path: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir_all(path).map_err(|source| ScaffoldError::CreateDirectory {
        path: path.to_path_buf(),
        source,
    })
}

/// Create or truncate `path` to zero bytes. The handle is dropped on return.
fn create_empty_file(path: &Path) -> Result<(), ScaffoldError> {
    fs::File::create(path)
        .map(drop)
        .map_err(|source| ScaffoldError::CreateFile {
            path: path.to_path_buf(),
            source,
        })
}
