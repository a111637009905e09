//! Writes annotated file blocks to the destination stream.
//!
//! A block is one header line, the file's content (with a newline appended
//! when it lacks one) and one blank separator line. The file is read in full
//! before anything is written, so a failed read never leaves a header
//! without content.

use super::header::CommentStyle;
use crate::discovery::FileCandidate;
use crate::error::{ConcatError, Result};
use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::trace;

/// Sequential block writer over any destination.
pub struct Emitter<W: Write> {
    writer: W,
    blocks: usize,
}

impl<W: Write> Emitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, blocks: 0 }
    }

    /// Read `candidate` and append its block.
    pub fn emit(&mut self, candidate: &FileCandidate) -> Result<()> {
        let bytes = fs::read(candidate.path()).map_err(|source| ConcatError::ReadError {
            path: candidate.path().to_path_buf(),
            source,
        })?;
        let content = decode_dropping_invalid(&bytes);
        let style = CommentStyle::from_extension(candidate.extension());
        trace!(
            path = %candidate.relative_path().display(),
            %style,
            bytes = bytes.len(),
            "Emitting block"
        );

        let block = render_block(candidate.relative_path(), style, &content);
        self.writer
            .write_all(block.as_bytes())
            .map_err(ConcatError::WriteError)?;
        self.blocks += 1;
        Ok(())
    }

    /// Number of blocks written so far.
    pub fn blocks(&self) -> usize {
        self.blocks
    }

    /// Flush and hand back the destination.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush().map_err(ConcatError::WriteError)?;
        Ok(self.writer)
    }
}

/// Render a complete block for already-decoded content.
pub fn render_block(relative_path: &Path, style: CommentStyle, content: &str) -> String {
    let header = style.header(relative_path);
    let mut block = String::with_capacity(header.len() + content.len() + 3);
    block.push_str(&header);
    block.push('\n');
    block.push_str(content);
    if !content.is_empty() && !content.ends_with('\n') {
        block.push('\n');
    }
    block.push('\n');
    block
}

/// Decode UTF-8, dropping byte sequences that are not valid.
pub fn decode_dropping_invalid(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()),
    }
}
