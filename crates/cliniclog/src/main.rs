//! `cliniclog` - CLI for the student clinic visit log
//!
//! Starts the interactive record menu, or inspects configuration.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;

use anyhow::Context;
use clap::Parser;

use cliniclog::cli::{Cli, Command, ConfigCommand};
use cliniclog::{init_logging, Config, RecordStore, Session};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => handle_run(config),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn handle_run(config: Config) -> anyhow::Result<()> {
    let store = RecordStore::new(config.store.capacity);
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = Session::new(store, config.clinic, stdin.lock(), stdout.lock());
    session.run().context("interactive session failed")?;
    Ok(())
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
                println!("[Store]");
                println!("  Capacity:  {}", config.store.capacity);
                println!();
                println!("[Clinic]");
                println!("  Name:      {}", config.clinic.name);
                println!("  Campus:    {}", config.clinic.campus);
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
