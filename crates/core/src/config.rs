//! Configuration path utilities for selto.
//!
//! This module resolves which configuration file to load from the
//! `--config` and `--profile` arguments, expanding `~` in paths.

use std::fs;

use log::debug;

use crate::error::{Error, Result};

/// Directory holding the configuration files
const DEFAULT_CONFIG_DIR: &str = "~/.config/selto";
/// Profile used when none is given
const DEFAULT_PROFILE: &str = "config";
/// Extension of profile configuration files
const CONFIG_EXTENSION: &str = "yaml";

/// Shell used to run the built command
pub const DEFAULT_SHELL: &str = "sh";

/// Resolves the path of a profile's configuration file inside `config_dir`.
///
/// # Examples
///
/// ```
/// use selto_core::config::get_profile_path;
///
/// assert_eq!(get_profile_path("/etc/selto", None), "/etc/selto/config.yaml");
/// assert_eq!(get_profile_path("/etc/selto", Some("docker")), "/etc/selto/docker.yaml");
/// ```
pub fn get_profile_path(config_dir: &str, profile: Option<&str>) -> String {
    let file_name = format!(
        "{}.{CONFIG_EXTENSION}",
        profile.filter(|p| !p.is_empty()).unwrap_or(DEFAULT_PROFILE)
    );

    format!("{}/{file_name}", config_dir.trim_end_matches('/'))
}

/// Resolves the configuration file path.
///
/// An explicit path wins over a profile. Otherwise the profile (or the
/// default profile) is looked up in `~/.config/selto`, which is created if it
/// does not exist yet. Shell expansions like `~` are resolved.
///
/// # Errors
///
/// Returns an error if the default configuration directory cannot be created.
pub fn get_config_path(config_path_arg: Option<&str>, profile: Option<&str>) -> Result<String> {
    if let Some(config_path) = config_path_arg {
        return Ok(shellexpand::tilde(config_path).to_string());
    }

    let config_dir = shellexpand::tilde(DEFAULT_CONFIG_DIR).to_string();
    if let Err(e) = fs::create_dir_all(&config_dir) {
        return Err(Error::io_error("config directory".to_string(), config_dir, e));
    }
    debug!("Config directory: `{config_dir}`");

    Ok(get_profile_path(&config_dir, profile))
}
