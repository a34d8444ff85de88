//! `gala` - CLI for the single-session event directory
//!
//! Running without a subcommand executes the scripted walkthrough once and
//! exits.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use clap::Parser;

use gala::cli::{Cli, Command, ConfigCommand, RunCommand};
use gala::{init_logging, Config, Directory, Journal};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone())?;

    match cli.command.unwrap_or(Command::Run(RunCommand::default())) {
        Command::Run(run_cmd) => {
            handle_run(&config, &run_cmd);
            Ok(())
        }
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn handle_run(config: &Config, cmd: &RunCommand) {
    let journal_path = cmd
        .log_file
        .clone()
        .unwrap_or_else(|| config.journal_path());

    let mut directory = Directory::new(Journal::to_file(journal_path));
    gala::scenario::run(&mut directory);
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Journal]");
                println!("  Log file: {}", config.journal_path().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
