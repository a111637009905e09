//! Files queued for concatenation.

use std::cmp::Ordering;
use std::path::{Component, Path, PathBuf};

/// A file that passed every filter and will be emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    path: PathBuf,
    relative: PathBuf,
    extension: Option<String>,
}

impl FileCandidate {
    /// Create a candidate for `path` found under `root`.
    pub fn new(path: impl Into<PathBuf>, root: &Path) -> Self {
        let path = path.into();
        let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        let extension = extension_of(&path);

        Self {
            path,
            relative,
            extension,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn relative_path(&self) -> &Path {
        &self.relative
    }

    /// Lowercase extension with its leading dot, if the name has one.
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    fn sort_key(&self) -> impl Iterator<Item = &[u8]> {
        self.relative.components().filter_map(|c| match c {
            Component::Normal(name) => Some(name.as_encoded_bytes()),
            _ => None,
        })
    }
}

impl Ord for FileCandidate {
    /// Component-wise byte order of the relative path, so `a/x` sorts
    /// before `a-b/x` the same way on every platform and locale.
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key()
            .cmp(other.sort_key())
            .then_with(|| self.path.cmp(&other.path))
    }
}

impl PartialOrd for FileCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lowercase, dot-prefixed extension of a file name.
///
/// Names such as `.gitignore` or `Makefile` have none.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{}", ext.to_lowercase()))
}
