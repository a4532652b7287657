//! Selto CLI Library
//!
//! This crate provides the command-line interface for selto. It loads a menu
//! tree, lets the user pick one entry per level with the arrow keys, builds
//! a shell command from the chosen path and runs it.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`command_selection`]: The in-place terminal menu and the chooser that
//!   drives it for the tree walk
//! - [`exit_status`]: Exit codes and the diagnostic line for a finished run
//!
//! # Examples
//!
//! ```bash
//! # Use ~/.config/selto/config.yaml
//! selto
//!
//! # Use ~/.config/selto/docker.yaml
//! selto --profile docker
//!
//! # Explicit file, only print the command
//! selto --config ./menu.yaml --dry-run
//! ```

pub mod cli_args;
pub mod command_selection;
pub mod exit_status;
