//! The interactive read-eval loop.

use std::io::{BufRead, IsTerminal};
use std::path::Path;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing::{debug, warn};

use crate::cli::args::OutputFormat;
use crate::error::TaskpadError;
use crate::parser::COMMAND_WORDS;
use crate::session::Session;

const PROMPT: &str = "> ";

/// Tab completion for command keywords.
struct KeywordCompleter;

impl Completer for KeywordCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        // Only the first word is a keyword.
        if prefix.contains(char::is_whitespace) {
            return Ok((0, vec![]));
        }

        let matches = COMMAND_WORDS
            .iter()
            .filter(|word| word.starts_with(prefix))
            .map(|word| Pair {
                display: (*word).to_string(),
                replacement: format!("{word} "),
            })
            .collect();

        Ok((0, matches))
    }
}

impl Hinter for KeywordCompleter {
    type Hint = String;
}

impl Highlighter for KeywordCompleter {}
impl Validator for KeywordCompleter {}
impl Helper for KeywordCompleter {}

/// Run the session until `bye` or end of input.
///
/// With a terminal on stdin the line editor is used and history is kept in
/// `history`; otherwise lines are read from stdin as they come.
///
/// # Errors
///
/// Returns an error if the save file cannot be written, or if the line
/// editor fails for a reason other than interrupt or end of input.
pub fn run(session: &mut Session, history: &Path) -> Result<(), TaskpadError> {
    if session.format() == OutputFormat::Pretty {
        println!("{}", session.greeting());
    }

    if std::io::stdin().is_terminal() {
        run_editor(session, history)
    } else {
        run_piped(session)
    }
}

fn run_editor(session: &mut Session, history: &Path) -> Result<(), TaskpadError> {
    let config = rustyline::Config::builder()
        .completion_type(rustyline::CompletionType::List)
        .auto_add_history(true)
        .build();
    let mut editor: Editor<KeywordCompleter, DefaultHistory> = Editor::with_config(config)?;
    editor.set_helper(Some(KeywordCompleter));

    if history.exists() {
        if let Err(e) = editor.load_history(history) {
            warn!(path = %history.display(), error = %e, "could not load history");
        }
    }

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if handle(session, &line)? {
                    break;
                }
            },
            Err(ReadlineError::Interrupted) => {
                debug!("interrupted; clearing line");
            },
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    if let Err(e) = editor.save_history(history) {
        warn!(path = %history.display(), error = %e, "could not save history");
    }
    Ok(())
}

fn run_piped(session: &mut Session) -> Result<(), TaskpadError> {
    run_lines(session, std::io::stdin().lock())
}

/// Feed `input` to the session line by line. A line that is not UTF-8 is
/// logged and handled as an unrecognized command.
fn run_lines(session: &mut Session, mut input: impl BufRead) -> Result<(), TaskpadError> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "input line is not valid UTF-8");
                ""
            },
        };
        if handle(session, line)? {
            return Ok(());
        }
    }
}

/// Handle one line and print the reply. Returns whether to stop.
fn handle(session: &mut Session, line: &str) -> Result<bool, TaskpadError> {
    let step = session.handle_line(line)?;
    if !step.output.is_empty() {
        println!("{}", step.output);
    }
    Ok(step.quit)
}
