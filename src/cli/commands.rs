//! Implementations of the non-interactive subcommands.

use std::path::Path;

use crate::cli::args::ConfigCommands;
use crate::config::{Config, Paths};
use crate::error::TaskpadError;
use crate::session::Session;

/// Execute config subcommands
///
/// # Errors
///
/// Returns an error if the config cannot be serialized or written, or if
/// `init` would overwrite a file without `--force`.
pub fn config(
    cmd: ConfigCommands,
    paths: &Paths,
    config: &Config,
    save_file: &Path,
) -> Result<String, TaskpadError> {
    match cmd {
        ConfigCommands::Show => config.to_yaml(),
        ConfigCommands::Path => Ok(format!(
            "config: {}\nsave file: {}",
            paths.config_file.display(),
            save_file.display()
        )),
        ConfigCommands::Init { force } => {
            if paths.config_file.exists() && !force {
                return Err(TaskpadError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    paths.config_file.display()
                )));
            }
            paths.ensure_dirs()?;
            Config::default().save_to_path(&paths.config_file)?;
            Ok(format!("Wrote {}", paths.config_file.display()))
        },
    }
}

/// Run one command line in `session`.
///
/// # Errors
///
/// Returns an error if the save file cannot be written.
pub fn exec(session: &mut Session, words: &[String]) -> Result<String, TaskpadError> {
    Ok(session.handle_line(&words.join(" "))?.output)
}
