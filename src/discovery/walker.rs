//! Directory walking with prune-on-ignore and candidate filtering.

use super::targets::FileCandidate;
use super::text_detection::{TextClass, sniff};
use crate::config::{ConcatConfig, ExtensionFilter};
use crate::ignore::IgnoreRuleset;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

/// Configuration for directory walking.
#[derive(Debug, Clone, Default)]
pub struct WalkConfig {
    /// Rules pruning directories and rejecting files.
    pub ignore: IgnoreRuleset,
    /// Extensions to include.
    pub extensions: ExtensionFilter,
    /// Whether to follow symbolic links.
    pub follow_symlinks: bool,
    /// Files never returned, e.g. the run's own output file.
    pub excluded: Vec<PathBuf>,
}

impl WalkConfig {
    pub fn new(ignore: IgnoreRuleset, extensions: ExtensionFilter) -> Self {
        Self {
            ignore,
            extensions,
            ..Default::default()
        }
    }

    /// Set whether to follow symlinks.
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Never return `path`.
    pub fn with_excluded(mut self, path: impl Into<PathBuf>) -> Self {
        self.excluded.push(path.into());
        self
    }
}

impl From<&ConcatConfig> for WalkConfig {
    fn from(config: &ConcatConfig) -> Self {
        Self::new(config.ignore.clone(), config.extensions.clone())
            .with_follow_symlinks(config.follow_symlinks)
    }
}

/// Walks a scan root and yields the files worth concatenating.
pub struct DirectoryWalker {
    config: WalkConfig,
}

impl DirectoryWalker {
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    /// Enumerate regular files under `root`, skipping ignored entries.
    ///
    /// Ignored directories are pruned, so nothing beneath them is visited.
    pub fn scan(&self, root: &Path) -> Vec<PathBuf> {
        let ignore = &self.config.ignore;

        WalkDir::new(root)
            .follow_links(self.config.follow_symlinks)
            .into_iter()
            .filter_entry(|entry| {
                let keep = entry.depth() == 0 || !ignore.is_ignored(entry.path(), root);
                if !keep {
                    trace!(path = %entry.path().display(), "Ignored");
                }
                keep
            })
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable entry");
                    None
                }
            })
            .filter(is_file_entry)
            .map(|entry| entry.into_path())
            .collect()
    }

    /// Apply the extension filter and text sniffing, then sort.
    pub fn filter(&self, root: &Path, paths: Vec<PathBuf>) -> Vec<FileCandidate> {
        let mut candidates: Vec<FileCandidate> = paths
            .into_iter()
            .filter(|path| !self.config.excluded.iter().any(|ex| ex == path))
            .map(|path| FileCandidate::new(path, root))
            .filter(|candidate| self.config.extensions.accepts(candidate.extension()))
            .filter(|candidate| match sniff(candidate.path()) {
                TextClass::Text => true,
                class => {
                    debug!(path = %candidate.path().display(), ?class, "Skipping non-text file");
                    false
                }
            })
            .collect();

        candidates.sort();
        candidates
    }

    /// Scan and filter in one pass.
    pub fn walk(&self, root: &Path) -> Vec<FileCandidate> {
        let paths = self.scan(root);
        self.filter(root, paths)
    }
}

/// Regular files, plus symlinks that resolve to one. Links to directories
/// are listed but never descended into unless links are followed.
fn is_file_entry(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    if !file_type.is_symlink() {
        return false;
    }
    match fs::metadata(entry.path()) {
        Ok(meta) => meta.is_file(),
        Err(e) => {
            debug!(path = %entry.path().display(), error = %e, "Skipping broken symlink");
            false
        }
    }
}
