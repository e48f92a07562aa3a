//! Triggering a feed reload through newsboat's command line.

use std::process::{Command, Stdio};

use crate::app::{NewsboatError, Result};

pub const NEWSBOAT_BIN: &str = "newsboat";
pub const RELOAD_ARG: &str = "--execute=reload";

/// Runs `newsboat --execute=reload` and waits for it.
pub fn reload() -> Result<()> {
    reload_with(NEWSBOAT_BIN)
}

/// Runs `program --execute=reload` with stdout and stderr discarded.
///
/// Blocks until the process exits; there is no timeout.
pub fn reload_with(program: &str) -> Result<()> {
    tracing::debug!(program, "reloading feeds");

    let status = Command::new(program)
        .arg(RELOAD_ARG)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|source| NewsboatError::CommandNotRunnable {
            program: program.to_string(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(NewsboatError::ExternalCommandFailed {
            program: program.to_string(),
            code: status.code(),
        })
    }
}
