//! Per-task view state and the translation of gestures into intents.

use std::collections::HashMap;

use crate::list::TaskList;
use crate::message;
use crate::task::{Task, TaskId, TaskUpdate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    CheckboxClicked,
    StarClicked,
    EditClicked,
    DeleteClicked,
    KeyPressed(Key),
    TextChanged(String),
}

/// What the list controller is asked to do on behalf of an item.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Update(TaskUpdate),
    Delete(TaskId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TaskItem {
    #[default]
    Viewing,
    Editing {
        draft: String,
    },
}

impl TaskItem {
    pub fn is_editing(&self) -> bool {
        matches!(self, TaskItem::Editing { .. })
    }

    /// Text to show for `task` in the current state.
    pub fn text<'a>(&'a self, task: &'a Task) -> &'a str {
        match self {
            TaskItem::Viewing => &task.message,
            TaskItem::Editing { draft } => draft,
        }
    }

    pub fn handle(&mut self, task: &Task, gesture: Gesture) -> Option<Intent> {
        match gesture {
            Gesture::DeleteClicked => Some(Intent::Delete(task.id.clone())),
            Gesture::CheckboxClicked => {
                if self.is_editing() {
                    return None;
                }
                Some(Intent::Update(task.to_update().with_completed(!task.completed)))
            }
            Gesture::StarClicked => {
                if self.is_editing() || task.completed {
                    return None;
                }
                Some(Intent::Update(task.to_update().with_favorite(!task.favorite)))
            }
            Gesture::EditClicked => match self {
                TaskItem::Viewing if !task.completed => {
                    *self = TaskItem::Editing {
                        draft: task.message.clone(),
                    };
                    None
                }
                TaskItem::Viewing => None,
                TaskItem::Editing { .. } => self.commit(task),
            },
            Gesture::KeyPressed(Key::Enter) if self.is_editing() => self.commit(task),
            Gesture::KeyPressed(Key::Escape) => {
                *self = TaskItem::Viewing;
                None
            }
            Gesture::KeyPressed(_) => None,
            Gesture::TextChanged(_) if task.completed => {
                *self = TaskItem::Viewing;
                None
            }
            Gesture::TextChanged(value) => {
                if let TaskItem::Editing { draft } = self {
                    if let Some(normalized) = message::normalize_input(&value) {
                        *draft = normalized;
                    }
                }
                None
            }
        }
    }

    fn commit(&mut self, task: &Task) -> Option<Intent> {
        let TaskItem::Editing { draft } = std::mem::take(self) else {
            return None;
        };
        if task.completed {
            return None;
        }
        let edited = message::validate(&draft).ok()?;
        (edited != task.message).then(|| Intent::Update(task.to_update().with_message(edited)))
    }
}

/// Item states for the rendered list. Items in `Viewing` are not stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemStates {
    items: HashMap<TaskId, TaskItem>,
}

impl ItemStates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &TaskId) -> TaskItem {
        self.items.get(id).cloned().unwrap_or_default()
    }

    pub fn editing_count(&self) -> usize {
        self.items.len()
    }

    pub fn handle(&mut self, task: &Task, gesture: Gesture) -> Option<Intent> {
        let mut item = self.items.remove(&task.id).unwrap_or_default();
        let intent = item.handle(task, gesture);
        if item.is_editing() {
            self.items.insert(task.id.clone(), item);
        }
        intent
    }

    /// Drops state for tasks that left the list or are now completed.
    pub fn sync(&mut self, list: &TaskList) {
        self.items
            .retain(|id, _| list.get(id).is_some_and(|task| !task.completed));
    }
}
