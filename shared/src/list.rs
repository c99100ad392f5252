//! In-memory mirror of the remote collection.
//!
//! Every method here is a state transition the UI applies once the server has
//! confirmed a change. Nothing in this module talks to the network.

use crate::message;
use crate::task::{Task, TaskId, TaskUpdate};

/// Display order: favorite-uncompleted, then uncompleted, then completed with
/// favorites first. Stable within each group.
pub fn sort_tasks(tasks: Vec<Task>) -> Vec<Task> {
    let mut tasks = tasks;
    tasks.sort_by_key(|task| match (task.completed, task.favorite) {
        (false, true) => 0u8,
        (false, false) => 1,
        (true, true) => 2,
        (true, false) => 3,
    });
    tasks
}

/// Case-insensitive substring match on the message.
pub fn matches_search(task: &Task, query: &str) -> bool {
    task.message.to_lowercase().contains(&query.to_lowercase())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
    search: String,
    draft: String,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Result of a full fetch.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = sort_tasks(tasks);
    }

    /// Result of a create call.
    pub fn insert_created(&mut self, task: Task) {
        let mut tasks = Vec::with_capacity(self.tasks.len() + 1);
        tasks.push(task);
        tasks.append(&mut self.tasks);
        self.tasks = sort_tasks(tasks);
    }

    /// Result of a delete call. Returns whether anything was removed.
    pub fn remove(&mut self, id: &TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| &task.id != id);
        self.tasks.len() != before
    }

    /// Result of a batch update: records named in the response replace their
    /// local counterparts and go to the front before re-sorting. Local records
    /// not mentioned are kept as they are.
    pub fn merge_updated(&mut self, updated: Vec<Task>) {
        let mut tasks = updated;
        let rest = std::mem::take(&mut self.tasks)
            .into_iter()
            .filter(|task| !tasks.iter().any(|fresh| fresh.id == task.id))
            .collect::<Vec<_>>();
        tasks.extend(rest);
        self.tasks = sort_tasks(tasks);
    }

    /// Builds the batch for "mark all complete": a fresh copy of every task
    /// with `completed` set. The list itself is left untouched until the
    /// server answers. Empty when nothing is left to complete.
    pub fn mark_all_complete(&self) -> Vec<TaskUpdate> {
        if self.tasks.iter().all(|task| task.completed) {
            return Vec::new();
        }
        self.tasks
            .iter()
            .map(|task| task.to_update().with_completed(true))
            .collect()
    }

    pub fn all_completed(&self) -> bool {
        !self.tasks.is_empty() && self.tasks.iter().all(|task| task.completed)
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Tasks that pass the current search, in display order.
    pub fn visible(&self) -> impl Iterator<Item = &Task> {
        self.tasks
            .iter()
            .filter(move |task| matches_search(task, &self.search))
    }

    /// Applies the input rules to the new-task field. Returns false when the
    /// keystroke was rejected.
    pub fn set_draft(&mut self, value: &str) -> bool {
        match message::normalize_input(value) {
            Some(draft) => {
                self.draft = draft;
                true
            }
            None => false,
        }
    }

    /// Takes the draft for submission, clearing the field. Leaves the draft in
    /// place and returns `None` when it is blank.
    pub fn take_draft(&mut self) -> Option<String> {
        let message = message::validate(&self.draft).ok()?;
        self.draft.clear();
        Some(message)
    }
}
