use sauron::prelude::*;
use shared::{
    ApiConfig, ApiError, Gesture, Intent, ItemStates, Key, Task, TaskId, TaskList, TaskUpdate,
};
use web_sys::console;

use crate::api;

#[derive(Debug, Clone)]
pub enum Msg {
    LoadTasks,
    TasksLoaded(Vec<Task>),
    SetSearch(String),
    SetDraft(String),
    DraftKey(Key),
    SubmitDraft,
    TaskCreated(Task),
    Item(TaskId, Gesture),
    TasksUpdated(Vec<Task>),
    TaskDeleted(TaskId),
    MarkAllComplete,
    Failed(ApiError),
}

pub struct Model {
    pub(crate) config: ApiConfig,
    pub(crate) list: TaskList,
    pub(crate) items: ItemStates,
}

impl Model {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            list: TaskList::new(),
            items: ItemStates::new(),
        }
    }

    fn update_tasks(&self, updates: Vec<TaskUpdate>) -> Cmd<Msg> {
        let config = self.config.clone();
        Cmd::new(async move {
            match api::update_tasks(&config, &updates).await {
                Ok(tasks) => Msg::TasksUpdated(tasks),
                Err(e) => Msg::Failed(e),
            }
        })
    }

    fn delete_task(&self, id: TaskId) -> Cmd<Msg> {
        let config = self.config.clone();
        Cmd::new(async move {
            match api::delete_task(&config, &id).await {
                Ok(()) => Msg::TaskDeleted(id),
                Err(e) => Msg::Failed(e),
            }
        })
    }

    fn handle_gesture(&mut self, id: TaskId, gesture: Gesture) -> Cmd<Msg> {
        let Some(task) = self.list.get(&id).cloned() else {
            console::log_1(&format!("[Scheduler] gesture for unknown task {id}").into());
            return Cmd::none();
        };

        match self.items.handle(&task, gesture) {
            Some(Intent::Update(update)) => self.update_tasks(vec![update]),
            Some(Intent::Delete(id)) => self.delete_task(id),
            None => Cmd::none(),
        }
    }
}

impl Application for Model {
    type MSG = Msg;

    fn init(&mut self) -> Cmd<Msg> {
        console::log_1(&format!("[Scheduler] using {}", self.config.collection_url()).into());
        Cmd::new(async { Msg::LoadTasks })
    }

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::LoadTasks => {
                let config = self.config.clone();
                Cmd::new(async move {
                    match api::fetch_tasks(&config).await {
                        Ok(tasks) => Msg::TasksLoaded(tasks),
                        Err(e) => Msg::Failed(e),
                    }
                })
            }
            Msg::TasksLoaded(tasks) => {
                console::log_1(&format!("[Scheduler] loaded {} tasks", tasks.len()).into());
                self.list.replace_all(tasks);
                self.items.sync(&self.list);
                Cmd::none()
            }
            Msg::SetSearch(query) => {
                self.list.set_search(query);
                Cmd::none()
            }
            Msg::SetDraft(value) => {
                self.list.set_draft(&value);
                Cmd::none()
            }
            Msg::DraftKey(Key::Enter) => self.update(Msg::SubmitDraft),
            Msg::DraftKey(_) => Cmd::none(),
            Msg::SubmitDraft => {
                let Some(message) = self.list.take_draft() else {
                    return Cmd::none();
                };
                let config = self.config.clone();
                Cmd::new(async move {
                    match api::create_task(&config, message).await {
                        Ok(task) => Msg::TaskCreated(task),
                        Err(e) => Msg::Failed(e),
                    }
                })
            }
            Msg::TaskCreated(task) => {
                self.list.insert_created(task);
                Cmd::none()
            }
            Msg::Item(id, gesture) => self.handle_gesture(id, gesture),
            Msg::TasksUpdated(tasks) => {
                self.list.merge_updated(tasks);
                self.items.sync(&self.list);
                Cmd::none()
            }
            Msg::TaskDeleted(id) => {
                self.list.remove(&id);
                self.items.sync(&self.list);
                Cmd::none()
            }
            Msg::MarkAllComplete => {
                let updates = self.list.mark_all_complete();
                if updates.is_empty() {
                    Cmd::none()
                } else {
                    self.update_tasks(updates)
                }
            }
            Msg::Failed(error) => {
                console::error_1(&error.to_string().into());
                Cmd::none()
            }
        }
    }

    fn view(&self) -> Node<Msg> {
        self.view_scheduler()
    }
}
