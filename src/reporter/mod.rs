//! Diagnostic reporting for concatenation runs.

pub mod diagnostics;

pub use diagnostics::{Diagnostics, PROGRESS_INTERVAL};
