//! Per-file header lines.

use std::fmt;
use std::path::Path;

/// Comment syntax used for a file's header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentStyle {
    #[default]
    Hash,
    DoubleSlash,
    Html,
}

impl CommentStyle {
    /// Pick the style for a lowercase, dot-prefixed extension.
    pub fn from_extension(extension: Option<&str>) -> Self {
        match extension {
            Some(".py" | ".sh" | ".yml" | ".yaml" | ".dockerfile" | ".md" | ".txt") => Self::Hash,
            Some(
                ".js" | ".jsx" | ".ts" | ".tsx" | ".css" | ".scss" | ".sass" | ".less" | ".sql",
            ) => Self::DoubleSlash,
            Some(".html" | ".xml") => Self::Html,
            _ => Self::Hash,
        }
    }

    /// Render the header line (without trailing newline).
    pub fn header(self, relative_path: &Path) -> String {
        let path = relative_path.display();
        match self {
            Self::Hash => format!("# File: {path}"),
            Self::DoubleSlash => format!("// File: {path}"),
            Self::Html => format!("<!-- File: {path} -->"),
        }
    }
}

impl fmt::Display for CommentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hash => write!(f, "#"),
            Self::DoubleSlash => write!(f, "//"),
            Self::Html => write!(f, "<!-- -->"),
        }
    }
}
