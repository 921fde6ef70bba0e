//! Filesystem enumeration for the fixed build-directory union.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::expand::ProjectScanner;

/// Extension of buildable project files.
const PROJECT_EXTENSION: &str = "csproj";

/// Walks the repository under `root` and reports project files with
/// repo-relative, forward-slash paths.
pub struct WalkdirScanner {
    root: PathBuf,
}

impl WalkdirScanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ProjectScanner for WalkdirScanner {
    fn project_files(&self, dir: &str) -> Vec<String> {
        WalkDir::new(self.root.join(dir))
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .is_some_and(|ext| ext == PROJECT_EXTENSION)
            })
            .filter_map(|entry| relative_slash_path(&self.root, entry.path()))
            .collect()
    }
}

fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let segments: Vec<_> = path
        .strip_prefix(root)
        .ok()?
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(segments.join("/"))
}
