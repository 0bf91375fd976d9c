use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "taskpad")]
#[command(about = "A personal task-tracking assistant for the terminal")]
#[command(long_about = "taskpad - a personal task-tracking assistant

Type commands to keep track of to-dos, deadlines and events. Tasks are saved
to a plain text file after every change.

COMMANDS (inside the session, or after 'taskpad exec'):
  todo <description>
  deadline <description> /by <dd-MM-yyyy [HH:mm]>
  event <description> /from <dd-MM-yyyy [HH:mm]> /to <dd-MM-yyyy [HH:mm]>
  list                  Show all tasks
  mark <n>              Mark task n as done
  unmark <n>            Mark task n as not done
  delete <n>            Remove task n
  find <keyword>        Show tasks whose description contains keyword
  date <dd-MM-yyyy>     Show deadlines and events on that day
  bye                   End the session

QUICK START:
  taskpad                              Start an interactive session
  taskpad exec todo read book          Run one command and exit
  taskpad -o json exec list            Machine-readable output")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for replies
    ///
    /// Use 'pretty' for human-readable colored output, or 'json' for one JSON
    /// object per reply. Defaults to the configured format.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Data directory holding config.yaml and the default save file
    #[arg(long, env = "TASKPAD_HOME", global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Save file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session (the default)
    ///
    /// Reads one command per line until 'bye' or end of input. With a
    /// terminal attached, lines can be edited and history is kept in the
    /// data directory.
    Repl,

    /// Run a single command and exit
    ///
    /// # Examples
    ///
    ///   taskpad exec todo read book
    ///   taskpad exec deadline return book /by 10-10-2024 18:00
    ///   taskpad exec mark 2
    #[command(alias = "x")]
    Exec {
        /// The command line, e.g. `todo read book`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   taskpad completions zsh > ~/.zsh/completions/_taskpad
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as YAML
    Show,
    /// Print the config file and save file locations
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
