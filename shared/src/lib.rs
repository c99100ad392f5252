//! Types and state transitions shared by the scheduler UI and its dev server.

pub mod config;
pub mod error;
pub mod item;
pub mod list;
pub mod message;
pub mod task;

pub use config::ApiConfig;
pub use error::{ApiError, Operation};
pub use item::{Gesture, Intent, ItemStates, Key, TaskItem};
pub use list::{sort_tasks, TaskList};
pub use message::{MessageError, MAX_MESSAGE_LEN};
pub use task::{CreateTaskRequest, Envelope, Task, TaskId, TaskUpdate};
