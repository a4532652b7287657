//! Selto Core Library
//!
//! This crate provides the core functionality for selto, a terminal tool that
//! walks the user through a nested menu and turns the chosen path into a
//! shell command.
//!
//! # Key Features
//!
//! - **Selection Tree**: A YAML-defined menu tree with per-node titles, values and commands
//! - **Tree Walk**: One choice per level through the [`navigation::Chooser`] trait
//! - **Command Building**: Positional `$1`, `$2`, ... placeholders filled from the chosen path
//! - **Execution**: Running the built command through `sh -c`
//! - **Error Handling**: One error type covering cancellation and every failure mode
//!
//! # Examples
//!
//! Building a command from a configuration file without a terminal:
//!
//! ```no_run
//! use selto_core::file_handling::get_selection_tree;
//! use selto_core::interpolation::build_command;
//!
//! let root = get_selection_tree("/home/me/.config/selto/config.yaml")?;
//! let first = root.children.values().next().unwrap();
//! let command = build_command(root.command.as_deref().unwrap_or_default(), &[first]);
//! println!("Would run: {command}");
//! # Ok::<(), selto_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod interpolation;
pub mod navigation;
pub mod selection_tree;
