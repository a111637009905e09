//! Concatenation run orchestration.
//!
//! A run moves through `Idle → Scanning → Filtering → Writing` and ends in
//! `Done`, or in `Failed` when the root is missing, is not a directory, or
//! the destination cannot be opened. Errors on individual files are
//! reported and skipped without leaving `Writing`.

use crate::config::ConcatConfig;
use crate::discovery::{DirectoryWalker, FileCandidate, WalkConfig};
use crate::error::{ConcatError, Result};
use crate::output::Emitter;
use crate::reporter::Diagnostics;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Scanning,
    Filtering,
    Writing,
    Done,
    Failed,
}

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcatSummary {
    /// Files that passed every filter.
    pub candidates: usize,
    /// Blocks written to the destination.
    pub written: usize,
    /// Candidates dropped because of a read or write error.
    pub skipped: usize,
}

pub struct Concatenator {
    config: ConcatConfig,
    state: RunState,
}

impl Concatenator {
    pub fn new(config: ConcatConfig) -> Self {
        Self {
            config,
            state: RunState::Idle,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn config(&self) -> &ConcatConfig {
        &self.config
    }

    /// Run end to end, writing to the configured output file or stdout.
    pub fn run<D: Write>(&mut self, diagnostics: &mut Diagnostics<D>) -> Result<ConcatSummary> {
        let root = self.checked_root()?;
        let candidates = self.collect(&root);

        match self.config.output.clone() {
            Some(path) => {
                let file = File::create(&path).map_err(|source| {
                    self.transition(RunState::Failed);
                    ConcatError::OutputError { path, source }
                })?;
                self.write(&root, &candidates, BufWriter::new(file), diagnostics)
            }
            None => {
                let stdout = BufWriter::new(io::stdout().lock());
                self.write(&root, &candidates, stdout, diagnostics)
            }
        }
    }

    /// Run end to end into `writer`, ignoring the configured output path
    /// except to keep it out of the candidates.
    pub fn run_into<W: Write, D: Write>(
        &mut self,
        writer: W,
        diagnostics: &mut Diagnostics<D>,
    ) -> Result<ConcatSummary> {
        let root = self.checked_root()?;
        let candidates = self.collect(&root);
        self.write(&root, &candidates, writer, diagnostics)
    }

    /// Check the root up front and resolve it to an absolute path.
    pub fn checked_root(&mut self) -> Result<PathBuf> {
        let resolved = resolve_root(&self.config.root);
        if resolved.is_err() {
            self.transition(RunState::Failed);
        }
        resolved
    }

    /// Walk `root` and return the sorted candidates.
    pub fn collect(&mut self, root: &Path) -> Vec<FileCandidate> {
        let mut walk_config = WalkConfig::from(&self.config);
        let existing_output = self
            .config
            .output
            .as_deref()
            .and_then(|p| fs::canonicalize(p).ok());
        if let Some(output) = existing_output {
            walk_config = walk_config.with_excluded(output);
        }
        let walker = DirectoryWalker::new(walk_config);

        self.transition(RunState::Scanning);
        let paths = walker.scan(root);
        debug!(files = paths.len(), "Scan complete");

        self.transition(RunState::Filtering);
        let candidates = walker.filter(root, paths);
        info!(root = %root.display(), candidates = candidates.len(), "Collected candidates");
        candidates
    }

    /// Emit every candidate in order. Per-file failures are reported on
    /// `diagnostics` and skipped.
    pub fn write<W: Write, D: Write>(
        &mut self,
        root: &Path,
        candidates: &[FileCandidate],
        writer: W,
        diagnostics: &mut Diagnostics<D>,
    ) -> Result<ConcatSummary> {
        self.transition(RunState::Writing);

        let total = candidates.len();
        let mut summary = ConcatSummary {
            candidates: total,
            ..Default::default()
        };
        let mut emitter = Emitter::new(writer);
        diagnostics.start(total, root);

        for (index, candidate) in candidates.iter().enumerate() {
            match emitter.emit(candidate) {
                Ok(()) => {
                    summary.written += 1;
                    diagnostics.progress(index + 1, total);
                }
                Err(ConcatError::ReadError { path, source }) => {
                    debug!(path = %path.display(), error = %source, "Read failed");
                    diagnostics.warning(&path, &source);
                    summary.skipped += 1;
                }
                Err(e) => {
                    debug!(path = %candidate.path().display(), error = %e, "Write failed");
                    diagnostics.warning(candidate.path(), &e);
                    summary.skipped += 1;
                }
            }
        }

        if let Err(e) = emitter.finish() {
            self.transition(RunState::Failed);
            return Err(e);
        }

        diagnostics.summary(summary.candidates);
        info!(
            written = summary.written,
            skipped = summary.skipped,
            "Concatenation finished"
        );
        self.transition(RunState::Done);
        Ok(summary)
    }

    fn transition(&mut self, next: RunState) {
        debug!(from = ?self.state, to = ?next, "Run state");
        self.state = next;
    }
}

/// Fail fast on a missing or non-directory root, then canonicalize it.
///
/// Errors carry the root made absolute against the working directory.
pub fn resolve_root(root: &Path) -> Result<PathBuf> {
    if !root.exists() {
        return Err(ConcatError::DirectoryNotFound(absolute_or_given(root)));
    }
    if !root.is_dir() {
        return Err(ConcatError::NotADirectory(absolute_or_given(root)));
    }
    fs::canonicalize(root).map_err(|source| ConcatError::ResolveError {
        path: root.to_path_buf(),
        source,
    })
}

fn absolute_or_given(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
