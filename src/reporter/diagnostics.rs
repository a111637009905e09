//! Human-readable run diagnostics on the error stream.
//!
//! Everything here goes to stderr (or any other sink handed in), never to
//! the concatenated output.

use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;

/// Emit a progress line every this many files.
pub const PROGRESS_INTERVAL: usize = 10;

/// Diagnostic message sink.
pub struct Diagnostics<W: Write> {
    sink: W,
    color: bool,
}

impl Diagnostics<io::Stderr> {
    /// Diagnostics on stderr, coloured when stderr is a terminal.
    pub fn stderr() -> Self {
        use std::io::IsTerminal;

        let stderr = io::stderr();
        let color = stderr.is_terminal();
        Self::new(stderr).with_color(color)
    }
}

impl<W: Write> Diagnostics<W> {
    pub fn new(sink: W) -> Self {
        Self { sink, color: false }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn start(&mut self, total: usize, root: &Path) {
        self.line(format_args!(
            "Processing {total} files from '{}'...",
            root.display()
        ));
    }

    /// Report progress after the `done`-th file; silent between intervals.
    pub fn progress(&mut self, done: usize, total: usize) {
        if should_report_progress(done) {
            self.line(format_args!("Processed {done}/{total} files..."));
        }
    }

    pub fn warning(&mut self, path: &Path, error: &dyn Display) {
        let label = self.label("Warning:", false);
        self.line(format_args!(
            "{label} Could not process {}: {error}",
            path.display()
        ));
    }

    pub fn error(&mut self, error: &dyn Display) {
        let label = self.label("Error:", true);
        self.line(format_args!("{label} {error}"));
    }

    /// Final line; `total` counts every candidate, skipped ones included.
    pub fn summary(&mut self, total: usize) {
        self.line(format_args!("Successfully processed {total} files."));
    }

    /// Hand back the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn label(&self, text: &str, is_error: bool) -> String {
        match (self.color, is_error) {
            (false, _) => text.to_string(),
            (true, true) => text.red().bold().to_string(),
            (true, false) => text.yellow().bold().to_string(),
        }
    }

    fn line(&mut self, message: std::fmt::Arguments<'_>) {
        // Diagnostics are best effort; a closed stderr must not end the run.
        let _ = writeln!(self.sink, "{message}");
    }
}

fn should_report_progress(done: usize) -> bool {
    done > 0 && done % PROGRESS_INTERVAL == 0
}
