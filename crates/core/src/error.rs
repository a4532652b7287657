use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The user backed out of a menu. Not a failure; callers exit cleanly.
    #[error("Selection canceled.")]
    Canceled,

    #[error("Config file not found: {}", .path)]
    ConfigNotFound { path: String },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("Error reading keyboard input: {}", .0)]
    Input(std::io::Error),

    #[error("Terminal error: {}", .0)]
    Terminal(#[from] std::io::Error),

    #[error("Error running command '{}': {}", .command, .status)]
    SubProcessExit { command: String, status: ExitStatus },

    #[error("Error running command '{}': {}", .command, .original)]
    SubProcess {
        command: String,
        original: std::io::Error,
    },

    #[error("Nothing to choose from: the menu has no items.")]
    EmptyMenu,

    #[error("Choice {} is out of range for a menu of {} items.", .index, .count)]
    InvalidChoice { index: usize, count: usize },

    #[error("The selected path did not produce a command. Is `cmd` set?")]
    EmptyCommand,
}

impl Error {
    pub fn config_not_found(path: String) -> Self {
        Self::ConfigNotFound { path }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    /// True for the user-initiated abort, which callers treat as a clean exit.
    #[must_use]
    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::Canceled)
    }
}
