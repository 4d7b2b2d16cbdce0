use sauron::{
    html::{attributes::*, *},
    prelude::*,
};
use shared::{Priority, Task};

use crate::datetime;
use crate::{Model, Msg, Page};

/// Completion-status filter for the task list. Maps onto the `completed`
/// query parameter: `All` omits it entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

impl Filter {
    pub fn completed_param(&self) -> Option<bool> {
        match self {
            Filter::All => None,
            Filter::Completed => Some(true),
            Filter::Pending => Some(false),
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Completed => "completed",
            Filter::Pending => "pending",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "completed" => Filter::Completed,
            "pending" => Filter::Pending,
            _ => Filter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All Tasks",
            Filter::Completed => "Completed",
            Filter::Pending => "Pending",
        }
    }
}

impl Model {
    pub(crate) fn view_list(&self) -> Node<Msg> {
        div(
            [class("max-w-3xl mx-auto")],
            [
                div([class("flex items-center justify-between mb-6")], [
                    h1([class("text-3xl font-bold text-ctp-text")], [text("Task Manager")]),
                    button([
                        on_click(|_| Msg::NavigateTo(Page::NewTask)),
                        r#type("button"),
                        class("bg-ctp-blue hover:bg-ctp-sapphire text-ctp-base font-medium px-4 py-2 rounded-md transition-colors duration-200"),
                    ], [text("Add New Task")]),
                ]),
                self.view_filter_select(),
                self.view_list_error(),
                div(
                    [class("bg-ctp-surface0 rounded-lg shadow-lg border border-ctp-surface1")],
                    [self.view_tasks()],
                ),
            ],
        )
    }

    fn view_filter_select(&self) -> Node<Msg> {
        div([class("mb-6")], [
            label([class("block text-sm font-medium text-ctp-subtext0 mb-1")], [text("Filter")]),
            select(
                [
                    on_change(|event| Msg::SetFilter(Filter::from_value(&event.value()))),
                    class("px-3 py-2 bg-ctp-surface0 border border-ctp-surface2 rounded-md text-ctp-text focus:outline-none focus:ring-2 focus:ring-ctp-blue focus:border-transparent"),
                ],
                [Filter::All, Filter::Completed, Filter::Pending]
                    .into_iter()
                    .map(|filter| {
                        option(
                            [value(filter.value()), selected(self.filter == filter)],
                            [text(filter.label())],
                        )
                    })
                    .collect::<Vec<_>>(),
            ),
        ])
    }

    fn view_list_error(&self) -> Node<Msg> {
        match &self.list_error {
            Some(message) => div(
                [class("mb-4 px-4 py-3 rounded-md bg-ctp-red/20 text-ctp-red")],
                [text(message)],
            ),
            None => span([], []),
        }
    }

    fn view_tasks(&self) -> Node<Msg> {
        if self.tasks.is_empty() {
            div(
                [class("px-6 py-10 text-center text-ctp-subtext0 italic")],
                [text("No tasks found")],
            )
        } else {
            div(
                [class("divide-y divide-ctp-surface1")],
                self.tasks
                    .iter()
                    .map(|task| self.view_task_row(task))
                    .collect::<Vec<_>>(),
            )
        }
    }

    fn view_task_row(&self, task: &Task) -> Node<Msg> {
        div(
            [
                key(task.id.to_string()),
                class(&format!(
                    "flex items-start gap-4 px-6 py-4 transition-colors duration-200 {}",
                    if task.completed {
                        "bg-ctp-surface1/50"
                    } else {
                        "hover:bg-ctp-surface1/30"
                    }
                )),
            ],
            [
                button(
                    [
                        on_click({
                            let task_id = task.id;
                            let completed = task.completed;
                            move |_| Msg::ToggleTask(task_id, completed)
                        }),
                        r#type("button"),
                        class("flex-shrink-0 mt-1 text-xl leading-none"),
                    ],
                    [if task.completed {
                        span([class("text-ctp-green")], [text("✓")])
                    } else {
                        span([class("text-ctp-overlay0 hover:text-ctp-blue")], [text("○")])
                    }],
                ),
                div([class("flex-1 min-w-0")], [
                    h3(
                        [class(&format!(
                            "text-lg font-semibold {}",
                            if task.completed {
                                "line-through text-ctp-overlay1"
                            } else {
                                "text-ctp-text"
                            }
                        ))],
                        [text(&task.title)],
                    ),
                    match &task.description {
                        Some(description) => p(
                            [class("text-sm text-ctp-subtext1 break-words mt-1")],
                            [text(description)],
                        ),
                        None => span([], []),
                    },
                    div([class("flex flex-wrap gap-2 mt-2")], [
                        match &task.due_date {
                            Some(due_date) => self.chip(
                                &format!("📅 {}", datetime::format_short_date(due_date)),
                                "bg-ctp-surface1 text-ctp-subtext1",
                            ),
                            None => span([], []),
                        },
                        match task.priority {
                            Some(priority) => {
                                self.chip(priority.as_str(), priority_chip_class(priority))
                            }
                            None => span([], []),
                        },
                    ]),
                ]),
                div([class("flex-shrink-0 flex gap-2")], [
                    button(
                        [
                            on_click({
                                let task_id = task.id;
                                move |_| Msg::NavigateTo(Page::EditTask(task_id))
                            }),
                            r#type("button"),
                            class("inline-flex items-center justify-center w-8 h-8 rounded-lg bg-ctp-blue/20 text-ctp-blue hover:bg-ctp-blue/30 transition-colors duration-200"),
                        ],
                        [text("✏️")],
                    ),
                    button(
                        [
                            on_click({
                                let task_id = task.id;
                                move |_| Msg::DeleteTask(task_id)
                            }),
                            r#type("button"),
                            class("inline-flex items-center justify-center w-8 h-8 rounded-lg bg-ctp-red/20 text-ctp-red hover:bg-ctp-red/30 transition-colors duration-200"),
                        ],
                        [text("🗑️")],
                    ),
                ]),
            ],
        )
    }

    fn chip(&self, label: &str, color_class: &str) -> Node<Msg> {
        span(
            [class(&format!(
                "inline-flex items-center px-2 py-1 rounded-full text-xs font-medium {color_class}"
            ))],
            [text(label)],
        )
    }
}

fn priority_chip_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "bg-ctp-red/20 text-ctp-red",
        Priority::Medium => "bg-ctp-yellow/20 text-ctp-yellow",
        Priority::Low => "bg-ctp-green/20 text-ctp-green",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_maps_to_completed_param() {
        assert_eq!(Filter::All.completed_param(), None);
        assert_eq!(Filter::Completed.completed_param(), Some(true));
        assert_eq!(Filter::Pending.completed_param(), Some(false));
    }

    #[test]
    fn filter_round_trips_through_select_values() {
        for filter in [Filter::All, Filter::Completed, Filter::Pending] {
            assert_eq!(Filter::from_value(filter.value()), filter);
        }
    }

    #[test]
    fn unknown_select_value_falls_back_to_all() {
        assert_eq!(Filter::from_value("archived"), Filter::All);
    }
}
