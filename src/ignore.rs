use std::collections::BTreeSet;
use std::path::{Component, Path};

/// Directory and file names pruned wherever they appear in a path.
const IGNORED_NAMES: &[&str] = &[
    // Python
    "__pycache__",
    ".pytest_cache",
    "env",
    "venv",
    ".venv",
    ".env",
    "ENV",
    "env.bak",
    "venv.bak",
    ".Python",
    "build",
    "develop-eggs",
    "dist",
    "downloads",
    "eggs",
    ".eggs",
    "lib",
    "lib64",
    "parts",
    "sdist",
    "var",
    "wheels",
    ".installed.cfg",
    "MANIFEST",
    // JavaScript / Node.js
    "node_modules",
    ".npm",
    ".yarn",
    "yarn-error.log",
    ".pnp",
    ".pnp.js",
    "coverage",
    ".nyc_output",
    ".grunt",
    "bower_components",
    ".bower-cache",
    ".sass-cache",
    ".cache",
    ".parcel-cache",
    ".next",
    ".nuxt",
    "out",
    // General
    ".git",
    ".svn",
    ".hg",
    ".DS_Store",
    "Thumbs.db",
    ".vscode",
    ".idea",
    ".vs",
    ".tmp",
    ".temp",
    "logs",
    ".env.local",
    ".env.development.local",
    ".env.test.local",
    ".env.production.local",
];

/// `*suffix` patterns matched against the base name.
const IGNORED_SUFFIX_PATTERNS: &[&str] =
    &["*.egg-info", "*.egg", "*.swp", "*.swo", "*~", "*.log"];

/// Exact file names that are never emitted.
const IGNORED_FILES: &[&str] = &[
    ".env",
    ".env.local",
    ".env.development",
    ".env.production",
    ".env.test",
    ".env.development.local",
    ".env.test.local",
    ".env.production.local",
    "package-lock.json",
    "yarn.lock",
    "poetry.lock",
    "Pipfile.lock",
];

/// Dotfiles that survive the hidden-segment rule.
const ALLOWED_DOTFILES: &[&str] = &[".gitignore", ".gitattributes", ".editorconfig"];

/// Static rules deciding which paths under a scan root are skipped.
#[derive(Debug, Clone)]
pub struct IgnoreRuleset {
    names: BTreeSet<String>,
    suffixes: Vec<String>,
    files: BTreeSet<String>,
    allowed_dotfiles: BTreeSet<String>,
}

impl Default for IgnoreRuleset {
    fn default() -> Self {
        Self::empty()
            .with_names(IGNORED_NAMES.iter().copied())
            .with_patterns(IGNORED_SUFFIX_PATTERNS.iter().copied())
            .with_files(IGNORED_FILES.iter().copied())
            .with_allowed_dotfiles(ALLOWED_DOTFILES.iter().copied())
    }
}

impl IgnoreRuleset {
    /// A ruleset that only applies the hidden-segment rule.
    pub fn empty() -> Self {
        Self {
            names: BTreeSet::new(),
            suffixes: Vec::new(),
            files: BTreeSet::new(),
            allowed_dotfiles: BTreeSet::new(),
        }
    }

    /// Add literal names matched against every path segment.
    pub fn with_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add wildcard patterns. Only the `*suffix` form is supported; a pattern
    /// without a leading `*` is treated as a literal name.
    pub fn with_patterns<S: AsRef<str>>(mut self, patterns: impl IntoIterator<Item = S>) -> Self {
        for pattern in patterns {
            let pattern = pattern.as_ref();
            match pattern.strip_prefix('*') {
                Some(suffix) => self.suffixes.push(suffix.to_string()),
                None => {
                    self.names.insert(pattern.to_string());
                }
            }
        }
        self
    }

    /// Add exact base names that are excluded.
    pub fn with_files<S: Into<String>>(mut self, files: impl IntoIterator<Item = S>) -> Self {
        self.files.extend(files.into_iter().map(Into::into));
        self
    }

    /// Add dotfile names exempt from the hidden-segment rule.
    pub fn with_allowed_dotfiles<S: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        self.allowed_dotfiles.extend(names.into_iter().map(Into::into));
        self
    }

    /// Decide whether `path` (under `root`) is excluded.
    ///
    /// A path outside `root` is judged on all of its components.
    pub fn is_ignored(&self, path: &Path, root: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);

        if relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(name) => Some(name.to_string_lossy()),
                _ => None,
            })
            .any(|segment| self.is_ignored_segment(&segment))
        {
            return true;
        }

        let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
            return false;
        };

        if self.files.contains(&*name) {
            return true;
        }

        self.suffixes
            .iter()
            .any(|suffix| name.ends_with(suffix.as_str()))
    }

    fn is_ignored_segment(&self, segment: &str) -> bool {
        (self.names.contains(segment) || segment.starts_with('.'))
            && !self.allowed_dotfiles.contains(segment)
    }
}
