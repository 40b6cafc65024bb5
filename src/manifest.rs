//! Scaffold manifest
//!
//! The manifest is the layout of the generated skeleton expressed as data: an
//! ordered list of relative directories, each with the file names to create
//! inside it, plus the files that live directly under the base directory.
//! The scaffolder only ever consumes a `Manifest`; the built-in DonLocal
//! layout below is one instance of it.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default base directory of the built-in layout
pub const BUILTIN_BASE_DIR: &str = "src/app";

/// Built-in DonLocal Angular layout, in creation order
const BUILTIN_ENTRIES: &[(&str, &[&str])] = &[
    (
        "core/components/header",
        &["header.component.ts", "header.component.html", "header.component.scss"],
    ),
    (
        "core/components/footer",
        &["footer.component.ts", "footer.component.html", "footer.component.scss"],
    ),
    (
        "core/components/sidebar",
        &["sidebar.component.ts", "sidebar.component.html", "sidebar.component.scss"],
    ),
    (
        "core/services",
        &[
            "auth.service.ts",
            "user.service.ts",
            "resource.service.ts",
            "category.service.ts",
            "local-storage.service.ts",
            "notification.service.ts",
        ],
    ),
    ("core/guards", &["auth.guard.ts"]),
    ("core/interceptors", &["token.interceptor.ts"]),
    (
        "core/models",
        &[
            "user.model.ts",
            "resource.model.ts",
            "category.model.ts",
            "message.model.ts",
        ],
    ),
    (
        "features/home",
        &["home.component.ts", "home.component.html", "home.component.scss"],
    ),
    (
        "features/resources/resource-list",
        &[
            "resource-list.component.ts",
            "resource-list.component.html",
            "resource-list.component.scss",
        ],
    ),
    (
        "features/resources/resource-detail",
        &[
            "resource-detail.component.ts",
            "resource-detail.component.html",
            "resource-detail.component.scss",
        ],
    ),
    (
        "features/resources/resource-form",
        &[
            "resource-form.component.ts",
            "resource-form.component.html",
            "resource-form.component.scss",
        ],
    ),
    (
        "features/auth/login",
        &["login.component.ts", "login.component.html", "login.component.scss"],
    ),
    (
        "features/auth/register",
        &[
            "register.component.ts",
            "register.component.html",
            "register.component.scss",
        ],
    ),
    (
        "features/profile",
        &[
            "profile.component.ts",
            "profile.component.html",
            "profile.component.scss",
        ],
    ),
    (
        "features/chat",
        &["chat.component.ts", "chat.component.html", "chat.component.scss"],
    ),
    (
        "features/about",
        &["about.component.ts", "about.component.html", "about.component.scss"],
    ),
    (
        "shared/components/card-resource",
        &[
            "card-resource.component.ts",
            "card-resource.component.html",
            "card-resource.component.scss",
        ],
    ),
    (
        "shared/components/modal",
        &["modal.component.ts", "modal.component.html", "modal.component.scss"],
    ),
    ("shared/pipes", &["truncate.pipe.ts", "filter.pipe.ts"]),
];

/// Files created directly under the base directory of the built-in layout
const BUILTIN_ROOT_FILES: &[&str] = &[
    "app.component.ts",
    "app.component.html",
    "app.component.scss",
    "app.routes.ts",
    "app.module.ts",
];

/// One directory of the skeleton and the empty files it holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Directory, `/`-separated, joined onto the base directory as given
    path: String,

    /// File names, in creation order
    files: Vec<String>,
}

impl ManifestEntry {
    /// Build an entry from a `/`-separated path. The text is kept verbatim:
    /// an absolute path replaces the base directory when joined.
    pub fn new<I, S>(path: &str, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.to_string(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path segments, empty ones included.
    pub fn segments(&self) -> Vec<&str> {
        self.path.split('/').collect()
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(&self.path)
    }

    /// Directory this entry resolves to under `base_dir`.
    pub fn folder(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(self.relative_path())
    }
}

/// Ordered layout of the skeleton
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Files created directly under the base directory, after all entries
    #[serde(default)]
    root_files: Vec<String>,

    #[serde(default)]
    entries: Vec<ManifestEntry>,
}

/// Kind of filesystem node a manifest plans to create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlannedKind {
    Directory,
    File,
    RootFile,
}

/// A single path the scaffolder will create, in creation order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedPath {
    pub kind: PlannedKind,
    pub path: PathBuf,
}

impl Manifest {
    pub fn new<I, S>(entries: Vec<ManifestEntry>, root_files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            root_files: root_files.into_iter().map(Into::into).collect(),
            entries,
        }
    }

    /// The DonLocal Angular application layout.
    pub fn builtin() -> Self {
        let entries = BUILTIN_ENTRIES
            .iter()
            .map(|(path, files)| ManifestEntry::new(path, files.iter().copied()))
            .collect();
        Self::new(entries, BUILTIN_ROOT_FILES.iter().copied())
    }

    pub fn builtin_base_dir() -> PathBuf {
        PathBuf::from(BUILTIN_BASE_DIR)
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn root_files(&self) -> &[String] {
        &self.root_files
    }

    /// Number of files a run creates, root files included.
    pub fn file_count(&self) -> usize {
        self.entries.iter().map(|e| e.files.len()).sum::<usize>() + self.root_files.len()
    }

    /// Every directory and file a run creates under `base_dir`, in the order
    /// the scaffolder creates them. The base directory itself is not listed.
    pub fn planned_paths(&self, base_dir: &Path) -> Vec<PlannedPath> {
        let mut planned = Vec::with_capacity(self.entries.len() + self.file_count());
        for entry in &self.entries {
            let folder = entry.folder(base_dir);
            planned.push(PlannedPath {
                kind: PlannedKind::Directory,
                path: folder.clone(),
            });
            planned.extend(entry.files.iter().map(|file| PlannedPath {
                kind: PlannedKind::File,
                path: folder.join(file),
            }));
        }
        planned.extend(self.root_files.iter().map(|file| PlannedPath {
            kind: PlannedKind::RootFile,
            path: base_dir.join(file),
        }));
        planned
    }
}
