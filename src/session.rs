//! One run of the assistant: the task list, its save file and the executor.

use tracing::debug;

use crate::cli::args::OutputFormat;
use crate::error::TaskpadError;
use crate::executor::{Executor, Reply};
use crate::notify::Notifier;
use crate::output::format_reply;
use crate::parser::parse_command;
use crate::storage::TaskFile;
use crate::task::TaskList;

/// What to show after one line, and whether to stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub output: String,
    pub quit: bool,
}

pub struct Session {
    tasks: TaskList,
    file: TaskFile,
    executor: Executor,
    format: OutputFormat,
}

impl Session {
    /// Load the save file and start a session over it.
    ///
    /// # Errors
    ///
    /// Returns an error if the save file exists but cannot be read.
    pub fn open(
        file: TaskFile,
        notifier: Box<dyn Notifier>,
        format: OutputFormat,
    ) -> Result<Self, TaskpadError> {
        let tasks = file.load()?;
        Ok(Self {
            tasks,
            file,
            executor: Executor::new(notifier),
            format,
        })
    }

    #[must_use]
    pub const fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// Opening message for interactive use.
    #[must_use]
    pub fn greeting(&self) -> String {
        let count = self.tasks.len();
        let noun = if count == 1 { "task" } else { "tasks" };
        format!(
            "Hello! I'm taskpad.\nYou have {count} {noun} saved in {}.\nWhat can I do for you?",
            self.file.path().display()
        )
    }

    /// Parse and execute one line, saving the list if it changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the save file cannot be written or the reply
    /// cannot be formatted. Malformed input is not an error.
    pub fn handle_line(&mut self, line: &str) -> Result<Step, TaskpadError> {
        let command = parse_command(line);
        debug!(?command, "parsed command");

        let outcome = self.executor.execute(command, &mut self.tasks);
        if outcome.changed {
            self.file.save(&self.tasks)?;
        }

        Ok(Step {
            output: format_reply(&outcome.reply, self.format)?,
            quit: matches!(outcome.reply, Reply::Goodbye),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::MockNotifier;
    use tempfile::TempDir;

    fn open_with(dir: &TempDir, format: OutputFormat, notifier: MockNotifier) -> Session {
        let file = TaskFile::new(dir.path().join("tasks.txt"));
        Session::open(file, Box::new(notifier), format).unwrap()
    }

    fn open(dir: &TempDir, format: OutputFormat) -> Session {
        let mut notifier = MockNotifier::new();
        notifier.expect_report().never();
        open_with(dir, format, notifier)
    }

    fn saved(dir: &TempDir) -> String {
        std::fs::read_to_string(dir.path().join("tasks.txt")).unwrap_or_default()
    }

    #[test]
    fn test_mutations_are_saved() {
        let dir = TempDir::new().unwrap();
        let mut session = open(&dir, OutputFormat::Pretty);

        session.handle_line("todo read book").unwrap();
        session.handle_line("deadline return book /by 10-10-2024").unwrap();
        session.handle_line("mark 1").unwrap();
        assert_eq!(
            saved(&dir),
            "T | 1 | read book\nD | 0 | return book | 2024-10-10T00:00\n"
        );

        session.handle_line("delete 1").unwrap();
        assert_eq!(saved(&dir), "D | 0 | return book | 2024-10-10T00:00\n");
    }

    #[test]
    fn test_reads_do_not_touch_the_file() {
        let dir = TempDir::new().unwrap();
        let mut session = open(&dir, OutputFormat::Pretty);

        session.handle_line("list").unwrap();
        session.handle_line("find x").unwrap();
        session.handle_line("nonsense").unwrap();
        assert!(!dir.path().join("tasks.txt").exists());
    }

    #[test]
    fn test_rejected_input_is_not_saved() {
        let dir = TempDir::new().unwrap();
        let mut notifier = MockNotifier::new();
        notifier.expect_report().times(2).return_const(());
        let mut session = open_with(&dir, OutputFormat::Pretty, notifier);

        let step = session.handle_line("deadline no marker").unwrap();
        assert!(step.output.is_empty());
        assert!(!step.quit);

        session.handle_line("todo buy\nmilk").unwrap();
        assert!(session.tasks().is_empty());
        assert!(!dir.path().join("tasks.txt").exists());
    }

    #[test]
    fn test_reopen_restores_tasks() {
        let dir = TempDir::new().unwrap();
        {
            let mut session = open(&dir, OutputFormat::Pretty);
            session
                .handle_line("event trip /from 01-01-2024 /to 05-01-2024 12:00")
                .unwrap();
        }

        let session = open(&dir, OutputFormat::Pretty);
        assert_eq!(session.tasks().len(), 1);
        assert!(session.greeting().contains("You have 1 task saved"));
    }

    #[test]
    fn test_bye_quits() {
        let dir = TempDir::new().unwrap();
        let mut session = open(&dir, OutputFormat::Json);

        let step = session.handle_line("bye").unwrap();
        assert!(step.quit);
        assert_eq!(step.output, r#"{"event":"goodbye"}"#);
    }
}
