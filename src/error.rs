use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConcatError {
    #[error("Directory '{0}' does not exist.")]
    DirectoryNotFound(PathBuf),

    #[error("'{0}' is not a directory.")]
    NotADirectory(PathBuf),

    #[error("Failed to resolve path {path}: {source}")]
    ResolveError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output file {path}: {source}")]
    OutputError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    WriteError(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConcatError>;
