pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod handlers;
pub mod ignore;
pub mod output;
pub mod reporter;
pub mod run;

#[cfg(test)]
pub mod test_utils;

pub use cli::Cli;
pub use config::{ConcatConfig, DEFAULT_EXTENSIONS, ExtensionFilter};
pub use discovery::{DirectoryWalker, FileCandidate, TextClass, WalkConfig};
pub use error::{ConcatError, Result};
pub use ignore::IgnoreRuleset;
pub use output::{CommentStyle, Emitter};
pub use reporter::Diagnostics;
pub use run::{ConcatSummary, Concatenator, RunState};
