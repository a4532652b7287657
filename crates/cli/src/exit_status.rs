//! Mapping the outcome of a run to a process exit code.

use std::process::ExitCode;

use selto_core::error::{Error, Result};

/// Success and user cancellation exit with 0, every error with 1.
pub fn exit_code(result: &Result<()>) -> ExitCode {
    match result {
        Ok(()) | Err(Error::Canceled) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

/// The one-line message to print on stderr, if any.
pub fn diagnostic(result: &Result<()>) -> Option<String> {
    match result {
        Ok(()) | Err(Error::Canceled) => None,
        Err(e) => Some(e.to_string()),
    }
}
