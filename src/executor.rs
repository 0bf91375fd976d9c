//! Applies parsed commands to the task list.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::InputError;
use crate::notify::Notifier;
use crate::parser::{
    parse_date, parse_deadline, parse_description, parse_event, parse_index, parse_moment,
    Command,
};
use crate::task::{Task, TaskList};

/// Which tasks a listing shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Keyword(String),
    Date(NaiveDate),
}

/// What the assistant says back after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Added { task: Task, count: usize },
    Deleted { task: Task, count: usize },
    Marked(Task),
    Unmarked(Task),
    /// Tasks paired with their 0-based position in the full list.
    Listing {
        selection: Selection,
        tasks: Vec<(usize, Task)>,
    },
    Goodbye,
    /// The keyword was not recognized.
    Unknown,
    /// The arguments were malformed; a notice has already been reported.
    Rejected,
}

/// Result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub reply: Reply,
    /// Whether the task list was modified and needs saving.
    pub changed: bool,
}

impl Outcome {
    fn changed(reply: Reply) -> Self {
        Self {
            reply,
            changed: true,
        }
    }

    fn unchanged(reply: Reply) -> Self {
        Self {
            reply,
            changed: false,
        }
    }

    /// Whether the session should end.
    #[must_use]
    pub const fn is_exit(&self) -> bool {
        matches!(self.reply, Reply::Goodbye)
    }
}

/// Runs commands against a task list, reporting malformed input to a
/// [`Notifier`].
pub struct Executor {
    notifier: Box<dyn Notifier>,
}

impl Executor {
    #[must_use]
    pub fn new(notifier: Box<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Execute `command`. Malformed arguments never fail the call: they are
    /// reported and the reply is [`Reply::Rejected`] with the list untouched.
    pub fn execute(&mut self, command: Command, tasks: &mut TaskList) -> Outcome {
        match apply(command, tasks) {
            Ok(outcome) => outcome,
            Err(notice) => {
                debug!(code = notice.code(), "rejected command");
                self.notifier.report(&notice);
                Outcome::unchanged(Reply::Rejected)
            },
        }
    }
}

fn apply(command: Command, tasks: &mut TaskList) -> Result<Outcome, InputError> {
    let outcome = match command {
        Command::AddTodo(args) => {
            let description = parse_description("todo", &args)?;
            add(tasks, Task::todo(description))
        },
        Command::AddDeadline(args) => {
            let (description, due) = parse_deadline(&args)?;
            let description = parse_description("deadline", description)?;
            let due = parse_moment(due)?;
            add(tasks, Task::deadline(description, due))
        },
        Command::AddEvent(args) => {
            let (description, start, end) = parse_event(&args)?;
            let description = parse_description("event", description)?;
            let start = parse_moment(start)?;
            let end = parse_moment(end)?;
            add(tasks, Task::event(description, start, end))
        },
        Command::Delete(args) => {
            let task = tasks.remove(parse_index(&args)?)?;
            Outcome::changed(Reply::Deleted {
                task,
                count: tasks.len(),
            })
        },
        Command::Mark(args) => {
            let task = tasks.mark(parse_index(&args)?)?.clone();
            Outcome::changed(Reply::Marked(task))
        },
        Command::Unmark(args) => {
            let task = tasks.unmark(parse_index(&args)?)?.clone();
            Outcome::changed(Reply::Unmarked(task))
        },
        Command::List => {
            let listed = tasks.iter().cloned().enumerate().collect();
            listing(Selection::All, listed)
        },
        Command::FindByKeyword(args) => {
            if args.is_empty() {
                return Err(InputError::MissingKeyword);
            }
            let found = owned(tasks.find_by_keyword(&args));
            listing(Selection::Keyword(args), found)
        },
        Command::FindByDate(args) => {
            let Some(moment) = parse_date(Some(args.as_str()))? else {
                return Err(InputError::InvalidDateFormat(args));
            };
            let day = moment.date();
            listing(Selection::Date(day), owned(tasks.find_by_date(day)))
        },
        Command::Goodbye => Outcome::unchanged(Reply::Goodbye),
        Command::Incorrect => Outcome::unchanged(Reply::Unknown),
    };
    Ok(outcome)
}

fn add(tasks: &mut TaskList, task: Task) -> Outcome {
    tasks.add(task.clone());
    Outcome::changed(Reply::Added {
        task,
        count: tasks.len(),
    })
}

fn listing(selection: Selection, tasks: Vec<(usize, Task)>) -> Outcome {
    Outcome::unchanged(Reply::Listing { selection, tasks })
}

fn owned(found: Vec<(usize, &Task)>) -> Vec<(usize, Task)> {
    found
        .into_iter()
        .map(|(index, task)| (index, task.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::MockNotifier;
    use crate::parser::parse_command;
    use crate::task::TaskKind;
    use chrono::NaiveDateTime;

    fn silent() -> Executor {
        let mut notifier = MockNotifier::new();
        notifier.expect_report().never();
        Executor::new(Box::new(notifier))
    }

    fn expecting(check: fn(&InputError) -> bool) -> Executor {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_report()
            .withf(move |notice| check(notice))
            .times(1)
            .return_const(());
        Executor::new(Box::new(notifier))
    }

    fn run(executor: &mut Executor, tasks: &mut TaskList, line: &str) -> Outcome {
        executor.execute(parse_command(line), tasks)
    }

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 10, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_add_todo() {
        let mut tasks = TaskList::new();
        let outcome = run(&mut silent(), &mut tasks, "todo read book");

        assert!(outcome.changed);
        assert_eq!(
            outcome.reply,
            Reply::Added {
                task: Task::todo("read book"),
                count: 1
            }
        );
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_add_deadline_with_date_or_time() {
        let mut tasks = TaskList::new();
        let mut executor = silent();
        run(&mut executor, &mut tasks, "deadline return book /by 10-10-2024");
        run(&mut executor, &mut tasks, "deadline submit /by 11-10-2024 18:30");

        let kinds: Vec<TaskKind> = tasks.iter().map(|t| *t.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                TaskKind::Deadline { due: at(10, 0, 0) },
                TaskKind::Deadline { due: at(11, 18, 30) },
            ]
        );
    }

    #[test]
    fn test_add_event() {
        let mut tasks = TaskList::new();
        run(
            &mut silent(),
            &mut tasks,
            "event fair /from 01-10-2024 09:00 /to 03-10-2024",
        );
        assert_eq!(
            tasks.iter().next().unwrap(),
            &Task::event("fair", at(1, 9, 0), at(3, 0, 0))
        );
    }

    #[test]
    fn test_malformed_deadline_is_reported() {
        let mut tasks = TaskList::new();
        let mut executor =
            expecting(|n| matches!(n, InputError::MalformedArguments { command: "deadline", .. }));
        let outcome = run(&mut executor, &mut tasks, "deadline return book");

        assert_eq!(outcome, Outcome::unchanged(Reply::Rejected));
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_bad_date_is_reported() {
        let mut tasks = TaskList::new();
        let mut executor = expecting(|n| matches!(n, InputError::InvalidDateFormat(_)));
        run(&mut executor, &mut tasks, "deadline return book /by tomorrow");
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_bad_date_time_is_reported() {
        let mut tasks = TaskList::new();
        let mut executor = expecting(|n| matches!(n, InputError::InvalidDateTimeFormat(_)));
        run(&mut executor, &mut tasks, "event x /from 01-10-2024 9am /to 01-10-2024 10:00");
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_event_out_of_order_is_reported() {
        let mut tasks = TaskList::new();
        let mut executor =
            expecting(|n| matches!(n, InputError::MalformedArguments { command: "event", .. }));
        run(&mut executor, &mut tasks, "event x /to 02-10-2024 /from 01-10-2024");
    }

    #[test]
    fn test_empty_todo_is_reported() {
        let mut tasks = TaskList::new();
        let mut executor =
            expecting(|n| *n == InputError::EmptyDescription { command: "todo" });
        run(&mut executor, &mut tasks, "todo");
    }

    #[test]
    fn test_delete_mark_unmark() {
        let mut tasks: TaskList = [Task::todo("a"), Task::todo("b"), Task::todo("c")]
            .into_iter()
            .collect();
        let mut executor = silent();

        let outcome = run(&mut executor, &mut tasks, "mark 2");
        assert_eq!(outcome.reply, Reply::Marked(Task::todo("b").with_done(true)));
        assert!(outcome.changed);

        let outcome = run(&mut executor, &mut tasks, "unmark 2");
        assert_eq!(outcome.reply, Reply::Unmarked(Task::todo("b")));

        let outcome = run(&mut executor, &mut tasks, "delete 1");
        assert_eq!(
            outcome.reply,
            Reply::Deleted {
                task: Task::todo("a"),
                count: 2
            }
        );
        assert_eq!(tasks.iter().next().unwrap().description(), "b");
    }

    #[test]
    fn test_non_integer_index_is_reported() {
        let mut tasks: TaskList = [Task::todo("a")].into_iter().collect();
        let mut executor = expecting(|n| *n == InputError::NonIntegerIndex("abc".into()));
        let outcome = run(&mut executor, &mut tasks, "mark abc");
        assert!(!outcome.changed);
        assert!(!tasks.iter().next().unwrap().done);
    }

    #[test]
    fn test_out_of_range_index_is_reported() {
        let mut tasks: TaskList = [Task::todo("a")].into_iter().collect();
        let mut executor = expecting(|n| *n == InputError::IndexOutOfRange(2));
        run(&mut executor, &mut tasks, "delete 2");
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_list_keeps_positions() {
        let mut tasks: TaskList = [Task::todo("a"), Task::todo("b")].into_iter().collect();
        let outcome = run(&mut silent(), &mut tasks, "list");
        assert!(!outcome.changed);
        assert_eq!(
            outcome.reply,
            Reply::Listing {
                selection: Selection::All,
                tasks: vec![(0, Task::todo("a")), (1, Task::todo("b"))],
            }
        );
    }

    #[test]
    fn test_find_by_keyword() {
        let mut tasks: TaskList = [Task::todo("read book"), Task::todo("walk dog")]
            .into_iter()
            .collect();
        let outcome = run(&mut silent(), &mut tasks, "find dog");
        assert_eq!(
            outcome.reply,
            Reply::Listing {
                selection: Selection::Keyword("dog".into()),
                tasks: vec![(1, Task::todo("walk dog"))],
            }
        );
    }

    #[test]
    fn test_find_without_keyword_is_reported() {
        let mut tasks = TaskList::new();
        let mut executor = expecting(|n| *n == InputError::MissingKeyword);
        run(&mut executor, &mut tasks, "find   ");
    }

    #[test]
    fn test_find_by_date() {
        let mut tasks: TaskList = [
            Task::todo("a"),
            Task::deadline("b", at(10, 18, 0)),
            Task::deadline("c", at(11, 0, 0)),
        ]
        .into_iter()
        .collect();
        let outcome = run(&mut silent(), &mut tasks, "date 10-10-2024");
        assert_eq!(
            outcome.reply,
            Reply::Listing {
                selection: Selection::Date(NaiveDate::from_ymd_opt(2024, 10, 10).unwrap()),
                tasks: vec![(1, Task::deadline("b", at(10, 18, 0)))],
            }
        );
    }

    #[test]
    fn test_find_by_bad_date_is_reported() {
        let mut tasks = TaskList::new();
        let mut executor = expecting(|n| matches!(n, InputError::InvalidDateFormat(_)));
        run(&mut executor, &mut tasks, "date 2024-10-10");
    }

    #[test]
    fn test_goodbye_and_unknown() {
        let mut tasks = TaskList::new();
        let mut executor = silent();

        let outcome = run(&mut executor, &mut tasks, "bye");
        assert!(outcome.is_exit());
        assert!(!outcome.changed);

        let outcome = run(&mut executor, &mut tasks, "xyz foo");
        assert_eq!(outcome.reply, Reply::Unknown);
        assert!(!outcome.is_exit());
    }
}
