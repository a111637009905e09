//! Text file detection by content sniffing.
//!
//! A file counts as text when its first [`SNIFF_LEN`] bytes contain no NUL
//! byte. Files that cannot be opened or read are reported separately so
//! callers can log why they were dropped.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of leading bytes inspected.
pub const SNIFF_LEN: u64 = 1024;

/// Outcome of sniffing a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextClass {
    Text,
    Binary,
    Unreadable,
}

impl TextClass {
    pub fn is_text(self) -> bool {
        self == Self::Text
    }
}

/// Classify a file by its leading bytes. Never fails.
pub fn sniff(path: &Path) -> TextClass {
    let mut chunk = Vec::with_capacity(SNIFF_LEN as usize);
    let read = File::open(path).and_then(|file| file.take(SNIFF_LEN).read_to_end(&mut chunk));

    match read {
        Ok(_) => classify(&chunk),
        Err(_) => TextClass::Unreadable,
    }
}

/// Classify an in-memory prefix.
pub fn classify(chunk: &[u8]) -> TextClass {
    if chunk.contains(&0) {
        TextClass::Binary
    } else {
        TextClass::Text
    }
}

/// Check if a file is a text file.
pub fn is_text_file(path: &Path) -> bool {
    sniff(path).is_text()
}
