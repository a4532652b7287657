//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate.

use clap::Parser;

use crate::command_selection::SelectorOptions;

/// Command-line arguments for the selto CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use selto_cli::cli_args::Args;
///
/// let args = Args::parse_from(["selto", "--profile", "docker"]);
/// assert_eq!(args.profile.as_deref(), Some("docker"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = "selto", version, term_width = 0)]
#[allow(clippy::struct_excessive_bools)] // silence clippy's warning on this struct
pub struct Args {
    /// Full path to the configuration file.
    ///
    /// Takes precedence over `--profile`.
    #[arg(long = "config", short = 'c')]
    pub config_path: Option<String>,

    /// Profile name; loads `~/.config/selto/<PROFILE>.yaml`.
    ///
    /// If neither this nor `--config` is given, `~/.config/selto/config.yaml` is used.
    #[arg(long, short = 'p')]
    pub profile: Option<String>,

    /// Print the built command instead of running it.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,

    /// Disable colors and other styling in the menus.
    #[arg(long, action)]
    pub no_color: bool,

    /// Let Backspace cancel a menu, like Escape.
    #[arg(long, action)]
    pub backspace_cancels: bool,

    /// Glyph marking the focused menu item.
    #[arg(long, default_value = ">")]
    pub cursor: String,
}

impl Args {
    /// The menu settings these arguments ask for.
    pub fn selector_options(&self) -> SelectorOptions {
        SelectorOptions {
            cursor_char: self.cursor.clone(),
            cancel_on_backspace: self.backspace_cancels,
        }
    }
}
