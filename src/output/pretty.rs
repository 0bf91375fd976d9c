use colored::Colorize;

use crate::core::format_moment;
use crate::error::InputError;
use crate::executor::{Reply, Selection};
use crate::task::Task;

const RULE_WIDTH: usize = 60;

/// Format a task on one line: kind, status, description and schedule.
pub fn format_task_pretty(task: &Task) -> String {
    let tag = format!("[{}]", task.kind().tag()).dimmed();
    let status = if task.done {
        task.status_icon().green()
    } else {
        task.status_icon().white()
    };

    let mut line = format!("{tag}{status} {}", task.description().bold());
    if let Some(schedule) = task.schedule() {
        line.push_str(&format!(" {}", schedule.yellow()));
    }
    line
}

/// Format a reply for the terminal. Rejected commands produce no text.
pub fn format_reply_pretty(reply: &Reply) -> String {
    match reply {
        Reply::Added { task, count } => format!(
            "Got it. I've added this task:\n  {}\n{}",
            format_task_pretty(task),
            count_line(*count)
        ),
        Reply::Deleted { task, count } => format!(
            "Noted. I've removed this task:\n  {}\n{}",
            format_task_pretty(task),
            count_line(*count)
        ),
        Reply::Marked(task) => format!(
            "Nice! I've marked this task as done:\n  {}",
            format_task_pretty(task)
        ),
        Reply::Unmarked(task) => format!(
            "OK, I've marked this task as not done yet:\n  {}",
            format_task_pretty(task)
        ),
        Reply::Listing { selection, tasks } => format_listing_pretty(selection, tasks),
        Reply::Goodbye => "Bye. Hope to see you again soon!".to_string(),
        Reply::Unknown => format!(
            "{} I'm sorry, but I don't know what that means :-(",
            "OOPS!!!".red().bold()
        ),
        Reply::Rejected => String::new(),
    }
}

fn count_line(count: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("Now you have {count} {noun} in the list.")
}

/// Format a numbered listing. Numbers are the tasks' 1-based positions in the
/// full list, so they can be passed straight to `mark` or `delete`.
pub fn format_listing_pretty(selection: &Selection, tasks: &[(usize, Task)]) -> String {
    let title = match selection {
        Selection::All => "Here are the tasks in your list:".to_string(),
        Selection::Keyword(keyword) => {
            format!("Here are the tasks matching '{keyword}':")
        },
        Selection::Date(day) => format!(
            "Here are the tasks on {}:",
            format_moment(&day.and_time(chrono::NaiveTime::MIN))
        ),
    };

    if tasks.is_empty() {
        let empty = match selection {
            Selection::All => "Your list is empty.",
            Selection::Keyword(_) | Selection::Date(_) => "No matching tasks.",
        };
        return format!("{title}\n  {}", empty.dimmed());
    }

    let mut output = format!("{title}\n");
    output.push_str(&"─".repeat(RULE_WIDTH));
    for (index, task) in tasks {
        output.push_str(&format!("\n{}. {}", index + 1, format_task_pretty(task)));
    }
    output
}

/// Format a notice for the terminal.
pub fn format_notice_pretty(notice: &InputError) -> String {
    format!("{} {notice}", "OOPS!!!".red().bold())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn due() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 10, 10)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_added_reply_mentions_task_and_count() {
        let output = format_reply_pretty(&Reply::Added {
            task: Task::todo("read book"),
            count: 1,
        });
        assert!(output.starts_with("Got it. I've added this task:"));
        assert!(output.contains("read book"));
        assert!(output.ends_with("Now you have 1 task in the list."));
    }

    #[test]
    fn test_deleted_reply_pluralizes() {
        let output = format_reply_pretty(&Reply::Deleted {
            task: Task::todo("read book"),
            count: 0,
        });
        assert!(output.ends_with("Now you have 0 tasks in the list."));
    }

    #[test]
    fn test_task_line_includes_schedule() {
        let line = format_task_pretty(&Task::deadline("return book", due()));
        assert!(line.contains("return book"));
        assert!(line.contains("(by: Oct 10 2024 18:00)"));
    }

    #[test]
    fn test_listing_numbers_from_one() {
        let output = format_listing_pretty(
            &Selection::Keyword("book".into()),
            &[(0, Task::todo("read book")), (2, Task::todo("buy book"))],
        );
        assert!(output.starts_with("Here are the tasks matching 'book':"));
        assert!(output.contains("\n1. "));
        assert!(output.contains("\n3. "));
        assert!(!output.contains("\n2. "));
    }

    #[test]
    fn test_empty_listing() {
        let output = format_listing_pretty(&Selection::All, &[]);
        assert!(output.contains("Your list is empty."));

        let day = NaiveDate::from_ymd_opt(2024, 10, 10).unwrap();
        let output = format_listing_pretty(&Selection::Date(day), &[]);
        assert!(output.starts_with("Here are the tasks on Oct 10 2024:"));
        assert!(output.contains("No matching tasks."));
    }

    #[test]
    fn test_rejected_reply_is_silent() {
        assert!(format_reply_pretty(&Reply::Rejected).is_empty());
    }

    #[test]
    fn test_notice_uses_error_message() {
        let output = format_notice_pretty(&InputError::NonIntegerIndex("abc".into()));
        assert!(output.contains("The task number must be an integer, got 'abc'."));
    }
}
