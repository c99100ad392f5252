use sauron::{
    html::{attributes::*, *},
    prelude::*,
};
use shared::{Gesture, Key, Task, TaskId, TaskItem};

use crate::app::{Model, Msg};

const ICON_BUTTON: &str =
    "inline-flex items-center justify-center w-8 h-8 rounded-lg transition-colors duration-200";

impl Model {
    pub(crate) fn view_scheduler(&self) -> Node<Msg> {
        section(
            [class("min-h-screen bg-ctp-base text-ctp-text")],
            [div(
                [class("max-w-2xl mx-auto px-6 py-8")],
                [self.view_header(), self.view_create_form(), self.view_task_list(), self.view_footer()],
            )],
        )
    }

    fn view_header(&self) -> Node<Msg> {
        header([class("flex items-center justify-between mb-6")], [
            h1([class("text-2xl font-bold")], [text("Task Scheduler")]),
            input([
                r#type("search"),
                placeholder("Search"),
                value(self.list.search().to_string()),
                on_input(|event| Msg::SetSearch(event.value())),
                class("px-3 py-2 bg-ctp-surface0 border border-ctp-surface2 rounded-md focus:outline-none focus:ring-2 focus:ring-ctp-blue"),
            ], []),
        ])
    }

    fn view_create_form(&self) -> Node<Msg> {
        div([class("flex gap-2 mb-6")], [
            input([
                r#type("text"),
                placeholder("Describe the new task"),
                value(self.list.draft().to_string()),
                on_input(|event| Msg::SetDraft(event.value())),
                on_keydown(|event| Msg::DraftKey(Key::from_dom(&event.key()))),
                class("flex-1 px-3 py-2 bg-ctp-surface0 border border-ctp-surface2 rounded-md placeholder-ctp-subtext0 focus:outline-none focus:ring-2 focus:ring-ctp-blue"),
            ], []),
            button([
                r#type("button"),
                on_click(|_| Msg::SubmitDraft),
                class("bg-ctp-blue hover:bg-ctp-sapphire text-ctp-base font-medium px-4 py-2 rounded-md"),
            ], [text("Add task")]),
        ])
    }

    fn view_task_list(&self) -> Node<Msg> {
        let visible: Vec<Node<Msg>> = self
            .list
            .visible()
            .map(|task| self.view_task(task, &self.items.get(&task.id)))
            .collect();

        if visible.is_empty() {
            p([class("text-center py-12 text-ctp-subtext0")], [text(if self.list.is_empty() {
                "No tasks yet"
            } else {
                "Nothing matches the search"
            })])
        } else {
            ul([class("space-y-2")], visible)
        }
    }

    fn view_task(&self, task: &Task, item: &TaskItem) -> Node<Msg> {
        let state = if task.completed {
            "border-ctp-green bg-ctp-green/10"
        } else if item.is_editing() {
            "border-ctp-blue"
        } else {
            "border-ctp-surface1"
        };

        let message = if item.is_editing() {
            let id = task.id.clone();
            let key_id = task.id.clone();
            input([
                r#type("text"),
                value(item.text(task).to_string()),
                on_input(move |event| Msg::Item(id.clone(), Gesture::TextChanged(event.value()))),
                on_keydown(move |event| {
                    Msg::Item(key_id.clone(), Gesture::KeyPressed(Key::from_dom(&event.key())))
                }),
                class("flex-1 px-2 py-1 bg-ctp-surface1 border border-ctp-surface2 rounded-md focus:outline-none"),
            ], [])
        } else {
            p([class(if task.completed { "flex-1 line-through text-ctp-overlay1" } else { "flex-1" })], [
                text(&task.message),
            ])
        };

        li(
            [
                key(task.id.to_string()),
                class(&format!("flex items-center gap-3 border rounded-xl px-4 py-3 bg-ctp-surface0 {state}")),
            ],
            [
                button([
                    r#type("button"),
                    on_gesture(&task.id, Gesture::CheckboxClicked),
                    class(&format!(
                        "{ICON_BUTTON} border-2 {}",
                        if task.completed { "bg-ctp-blue border-ctp-blue text-ctp-base" } else { "border-ctp-surface2" }
                    )),
                ], [text(if task.completed { "✓" } else { "" })]),
                message,
                button([
                    r#type("button"),
                    on_gesture(&task.id, Gesture::StarClicked),
                    disabled(task.completed),
                    class(&format!("{ICON_BUTTON} text-ctp-yellow")),
                ], [text(if task.favorite { "★" } else { "☆" })]),
                button([
                    r#type("button"),
                    on_gesture(&task.id, Gesture::EditClicked),
                    disabled(task.completed),
                    class(&format!("{ICON_BUTTON} text-ctp-blue")),
                ], [text(if item.is_editing() { "✔" } else { "✎" })]),
                button([
                    r#type("button"),
                    on_gesture(&task.id, Gesture::DeleteClicked),
                    class(&format!("{ICON_BUTTON} text-ctp-red")),
                ], [text("✕")]),
            ],
        )
    }

    fn view_footer(&self) -> Node<Msg> {
        let all_completed = self.list.all_completed();
        footer([class("flex items-center gap-3 mt-6 pt-4 border-t border-ctp-surface1")], [
            input([
                r#type("checkbox"),
                checked(all_completed),
                on_click(|_| Msg::MarkAllComplete),
            ], []),
            p([class("text-ctp-subtext1")], [text("All tasks completed")]),
        ])
    }
}

fn on_gesture(id: &TaskId, gesture: Gesture) -> Attribute<Msg> {
    let id = id.clone();
    on_click(move |_| Msg::Item(id.clone(), gesture.clone()))
}
