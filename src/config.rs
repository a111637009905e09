//! Run configuration built once from the command line.

use crate::Cli;
use crate::ignore::IgnoreRuleset;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Extensions accepted when neither `--ext` nor `--all-ext` is given.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".py",
    ".js",
    ".jsx",
    ".ts",
    ".tsx",
    ".json",
    ".md",
    ".yaml",
    ".yml",
    ".html",
    ".css",
    ".scss",
    ".sass",
    ".less",
    ".sql",
    ".sh",
    ".bat",
    ".ps1",
    ".dockerfile",
    ".gitignore",
    ".gitattributes",
    ".editorconfig",
];

/// Which file extensions a run accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionFilter {
    /// Accept every file, with or without an extension.
    All,
    /// Accept only these lowercase, dot-prefixed extensions.
    Only(BTreeSet<String>),
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::only(DEFAULT_EXTENSIONS.iter().copied())
    }
}

impl ExtensionFilter {
    /// Build a filter from user input, normalizing each entry to lowercase
    /// with a leading dot (`py`, `.PY` and `.py` are equivalent).
    pub fn only<S: AsRef<str>>(extensions: impl IntoIterator<Item = S>) -> Self {
        Self::Only(
            extensions
                .into_iter()
                .map(|ext| normalize_extension(ext.as_ref()))
                .collect(),
        )
    }

    /// Check a candidate's extension (already lowercase, dot-prefixed).
    pub fn accepts(&self, extension: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(set) => extension.is_some_and(|ext| set.contains(ext)),
        }
    }
}

fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    }
}

/// Immutable settings for one concatenation run.
#[derive(Debug, Clone)]
pub struct ConcatConfig {
    pub root: PathBuf,
    pub output: Option<PathBuf>,
    pub extensions: ExtensionFilter,
    pub ignore: IgnoreRuleset,
    pub follow_symlinks: bool,
}

impl ConcatConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: None,
            extensions: ExtensionFilter::default(),
            ignore: IgnoreRuleset::default(),
            follow_symlinks: false,
        }
    }

    /// Resolve CLI flags; `--all-ext` wins over `--ext`.
    pub fn from_cli(cli: &Cli) -> Self {
        let extensions = if cli.all_ext {
            ExtensionFilter::All
        } else if let Some(ref exts) = cli.ext {
            ExtensionFilter::only(exts)
        } else {
            ExtensionFilter::default()
        };

        Self {
            output: cli.output.clone(),
            extensions,
            ..Self::new(&cli.directory)
        }
    }

    pub fn with_output(mut self, output: impl AsRef<Path>) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn with_extensions(mut self, extensions: ExtensionFilter) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_ignore(mut self, ignore: IgnoreRuleset) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }
}
