use std::process::{Command, Stdio};

use log::info;

use crate::config::DEFAULT_SHELL;
use crate::error::{Error, Result};

/// Runs `command` through the shell with this process's stdio attached.
///
/// # Errors
///
/// Returns an error if the shell cannot be started or exits with non-zero
/// status. Both carry the command string.
pub fn execute_command(command: &str) -> Result<()> {
    info!("Executing `{command}` with {DEFAULT_SHELL}");

    let status = Command::new(DEFAULT_SHELL)
        .args(["-c", command])
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .and_then(|mut child| child.wait())
        .map_err(|original| Error::SubProcess {
            command: command.to_string(),
            original,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::SubProcessExit {
            command: command.to_string(),
            status,
        })
    }
}
