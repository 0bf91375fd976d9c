use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use taskpad::cli::args::{Cli, Commands, OutputFormat};
use taskpad::cli::commands;
use taskpad::cli::completions::generate_completions;
use taskpad::config::{Config, Paths};
use taskpad::output::ConsoleNotifier;
use taskpad::repl;
use taskpad::session::Session;
use taskpad::storage::TaskFile;

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Quiet by default; `TASKPAD_LOG=debug` shows parsing and save-file activity.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("TASKPAD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::resolve(cli.home)?;
    let config = Config::load_from_path(&paths.config_file)?;
    config.general.color.apply();

    let format = cli.output.unwrap_or(config.general.default_output);
    let save_file = cli.file.unwrap_or_else(|| config.save_file(&paths));

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            paths.ensure_dirs()?;
            let mut session = open_session(save_file, format)?;
            repl::run(&mut session, &paths.history)?;
        },
        Commands::Exec { words } => {
            let mut session = open_session(save_file, format)?;
            let output = commands::exec(&mut session, &words)?;
            if !output.is_empty() {
                println!("{output}");
            }
        },
        Commands::Completions { shell } => print!("{}", generate_completions(shell)?),
        Commands::Config(args) => {
            println!(
                "{}",
                commands::config(args.command, &paths, &config, &save_file)?
            );
        },
    }
    Ok(())
}

fn open_session(save_file: PathBuf, format: OutputFormat) -> Result<Session> {
    let display = save_file.display().to_string();
    Session::open(
        TaskFile::new(save_file),
        Box::new(ConsoleNotifier::new(format)),
        format,
    )
    .with_context(|| format!("Failed to open task list {display}"))
}
