//! The in-memory task list.

use chrono::NaiveDate;

use super::{Task, TaskKind};
use crate::error::InputError;

/// Ordered collection of tasks, addressed by 0-based index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Remove and return a task; later tasks shift down by one.
    ///
    /// # Errors
    ///
    /// Returns `InputError::IndexOutOfRange` if no task has that index.
    pub fn remove(&mut self, index: usize) -> Result<Task, InputError> {
        if index >= self.tasks.len() {
            return Err(Self::out_of_range(index));
        }
        Ok(self.tasks.remove(index))
    }

    /// Mark a task as done.
    ///
    /// # Errors
    ///
    /// Returns `InputError::IndexOutOfRange` if no task has that index.
    pub fn mark(&mut self, index: usize) -> Result<&Task, InputError> {
        self.set_done(index, true)
    }

    /// Mark a task as not done.
    ///
    /// # Errors
    ///
    /// Returns `InputError::IndexOutOfRange` if no task has that index.
    pub fn unmark(&mut self, index: usize) -> Result<&Task, InputError> {
        self.set_done(index, false)
    }

    fn set_done(&mut self, index: usize, done: bool) -> Result<&Task, InputError> {
        let task = self
            .tasks
            .get_mut(index)
            .ok_or_else(|| Self::out_of_range(index))?;
        task.done = done;
        Ok(task)
    }

    fn out_of_range(index: usize) -> InputError {
        let human = i64::try_from(index).map_or(i64::MAX, |i| i.saturating_add(1));
        InputError::IndexOutOfRange(human)
    }

    /// Tasks whose description contains `keyword`, ignoring case, paired with
    /// their index.
    #[must_use]
    pub fn find_by_keyword(&self, keyword: &str) -> Vec<(usize, &Task)> {
        let needle = keyword.to_lowercase();
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.description().to_lowercase().contains(&needle))
            .collect()
    }

    /// Deadlines due on `day` and events running through `day`, paired with
    /// their index. Todos never match.
    #[must_use]
    pub fn find_by_date(&self, day: NaiveDate) -> Vec<(usize, &Task)> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| match task.kind() {
                TaskKind::Todo => false,
                TaskKind::Deadline { due } => due.date() == day,
                TaskKind::Event { start, end } => start.date() <= day && day <= end.date(),
            })
            .collect()
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
