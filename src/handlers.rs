//! CLI command handlers
//!
//! Maps a parsed [`Cli`] onto a concatenation run and its exit code.

use crate::reporter::Diagnostics;
use crate::{Cli, ConcatConfig, ConcatSummary, Concatenator, Result};
use std::io::Write;
use std::process::ExitCode;
use tracing::{debug, info};

/// Run the concatenation described by `cli`, reporting on stderr.
pub fn handle_concat(cli: &Cli) -> ExitCode {
    let mut diagnostics = Diagnostics::stderr();
    match run_with_diagnostics(cli, &mut diagnostics) {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::from(1),
    }
}

/// Run with an explicit diagnostic sink. A fatal error is reported on the
/// sink before being returned.
pub fn run_with_diagnostics<D: Write>(
    cli: &Cli,
    diagnostics: &mut Diagnostics<D>,
) -> Result<ConcatSummary> {
    let config = ConcatConfig::from_cli(cli);
    info!(root = %config.root.display(), output = ?config.output, "Starting concatenation");
    debug!(extensions = ?config.extensions, "Extension filter");

    let mut concatenator = Concatenator::new(config);
    let result = concatenator.run(diagnostics);
    match &result {
        Ok(summary) => debug!(?summary, "Run completed"),
        Err(e) => {
            diagnostics.error(e);
            debug!(state = ?concatenator.state(), "Run failed");
        }
    }
    result
}
