//! Discovery layer: turns a scan root into an ordered list of candidates.
//!
//! This module handles:
//! - Directory traversal with ignore pruning
//! - Extension filtering
//! - Text/binary sniffing
//! - Candidate ordering

pub mod targets;
pub mod text_detection;
pub mod walker;

pub use crate::ignore::IgnoreRuleset;
pub use targets::FileCandidate;
pub use text_detection::{TextClass, is_text_file, sniff};
pub use walker::{DirectoryWalker, WalkConfig};
