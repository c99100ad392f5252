//! In-memory task collection.

use chrono::Utc;
use shared::{message, Task, TaskId, TaskUpdate};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ServerError;

#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Newest first.
    pub async fn list(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }

    pub async fn create(&self, raw_message: &str) -> Result<Task, ServerError> {
        let message = message::validate(raw_message)?;
        let task = Task {
            id: TaskId::new(Uuid::new_v4().to_string()),
            message,
            completed: false,
            favorite: false,
            created: Utc::now(),
            modified: None,
        };
        self.tasks.write().await.insert(0, task.clone());
        Ok(task)
    }

    /// Applies every patch or none of them. Unknown ids are skipped.
    pub async fn update(&self, patches: Vec<TaskUpdate>) -> Result<Vec<Task>, ServerError> {
        let patches = patches
            .into_iter()
            .map(|mut patch| -> Result<TaskUpdate, ServerError> {
                if let Some(raw) = patch.message.take() {
                    patch.message = Some(message::validate(&raw)?);
                }
                Ok(patch)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let now = Utc::now();
        let mut tasks = self.tasks.write().await;
        let mut updated = Vec::with_capacity(patches.len());
        for patch in &patches {
            if let Some(task) = tasks.iter_mut().find(|task| task.id == patch.id) {
                task.apply(patch);
                task.modified = Some(now);
                updated.push(task.clone());
            }
        }
        Ok(updated)
    }

    pub async fn delete(&self, id: &TaskId) -> Result<(), ServerError> {
        let mut tasks = self.tasks.write().await;
        match tasks.iter().position(|task| &task.id == id) {
            Some(index) => {
                tasks.remove(index);
                Ok(())
            }
            None => Err(ServerError::NotFound(id.clone())),
        }
    }
}
