//! Output layer.
//!
//! Formats header lines and writes annotated file blocks to the
//! destination (a file or stdout).

pub mod emitter;
pub mod header;

pub use emitter::{Emitter, decode_dropping_invalid, render_block};
pub use header::CommentStyle;
