use std::io::stderr;
use std::process::ExitCode;

use clap::Parser;
use itertools::Itertools;
use log::{debug, info};
use selto_core::error::{Error, Result};
use selto_core::{config, execution, file_handling, interpolation, navigation};

use selto_cli::cli_args::Args;
use selto_cli::command_selection::{Palette, TerminalChooser, TerminalKeys};
use selto_cli::exit_status::{diagnostic, exit_code};

fn execute() -> Result<()> {
    let args = Args::parse();

    let config_path = config::get_config_path(args.config_path.as_deref(), args.profile.as_deref())?;
    debug!("Config path: `{}`", config_path);

    let root = file_handling::get_selection_tree(&config_path)?;

    let palette = Palette::new(!args.no_color);
    let options = args.selector_options();

    // Raw mode ends when the chooser is dropped, before the command runs.
    let path = {
        let keys = TerminalKeys::new()?;
        let mut chooser = TerminalChooser::new(stderr(), keys, &palette, &options);
        navigation::walk(&root, &mut chooser)?
    };
    info!(
        "Chosen path: {}",
        path.iter().map(|node| node.id()).join(" > ")
    );

    let base_command = root.command.as_deref().unwrap_or_default();
    let command = interpolation::build_command(base_command, &path);
    if command.trim().is_empty() {
        return Err(Error::EmptyCommand);
    }

    if args.dry_run {
        println!("{command}");
        return Ok(());
    }

    println!(); // a little space
    execution::execute_command(&command)
}

fn main() -> ExitCode {
    env_logger::init();

    let result = execute();
    if matches!(result, Err(Error::Canceled)) {
        debug!("Canceled by user");
    }
    if let Some(message) = diagnostic(&result) {
        eprintln!("{message}");
    }

    exit_code(&result)
}
