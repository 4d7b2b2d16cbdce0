use sauron::{
    html::{attributes::*, *},
    prelude::*,
};
use shared::{Priority, Task, TaskData};

use crate::datetime;
use crate::{Model, Msg, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

/// Local state of the create/edit form. Reset whenever the form page is
/// entered; nothing here outlives navigation.
#[derive(Debug, Clone)]
pub struct FormState {
    pub mode: FormMode,
    pub loading: bool,
    pub load_error: Option<String>,
    pub save_error: Option<String>,
    pub title: String,
    pub title_error: Option<String>,
    pub description: String,
    /// Date input value (`YYYY-MM-DD`); empty means no due date selected.
    pub due_date: String,
    pub priority: Option<Priority>,
}

impl FormState {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            loading: false,
            load_error: None,
            save_error: None,
            title: String::new(),
            title_error: None,
            description: String::new(),
            due_date: String::new(),
            priority: None,
        }
    }

    /// Edit mode starts in a loading state until the task fetch resolves.
    pub fn edit(id: i64) -> Self {
        Self {
            mode: FormMode::Edit(id),
            loading: true,
            ..Self::create()
        }
    }

    /// Pre-fills the fields from a fetched task; absent optional fields
    /// become empty controls.
    pub fn seed(&mut self, task: &Task) {
        self.title = task.title.clone();
        self.description = task.description.clone().unwrap_or_default();
        self.due_date = task
            .due_date
            .as_deref()
            .map(datetime::to_date_input)
            .unwrap_or_default();
        self.priority = task.priority;
        self.loading = false;
    }

    /// The only client-side rule: a title that is non-empty after trimming.
    pub fn validate(&mut self) -> bool {
        if self.title.trim().is_empty() {
            self.title_error = Some("Title is required".to_string());
            false
        } else {
            self.title_error = None;
            true
        }
    }

    /// Builds the submission payload, mapping empty controls to absent
    /// fields rather than empty strings.
    pub fn build_payload(&self) -> TaskData {
        TaskData {
            title: self.title.clone(),
            description: if self.description.is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
            due_date: datetime::from_date_input(&self.due_date),
            priority: self.priority,
        }
    }
}

impl Model {
    pub(crate) fn view_form(&self) -> Node<Msg> {
        let heading = match self.form.mode {
            FormMode::Create => "Add New Task",
            FormMode::Edit(_) => "Edit Task",
        };
        div([class("max-w-2xl mx-auto")], [
            h1([class("text-3xl font-bold text-ctp-text mb-6")], [text(heading)]),
            if self.form.loading {
                div(
                    [class("text-center py-10 text-ctp-subtext0 italic")],
                    [text("Loading...")],
                )
            } else if let Some(message) = &self.form.load_error {
                div(
                    [class("px-4 py-3 rounded-md bg-ctp-red/20 text-ctp-red")],
                    [text(message)],
                )
            } else {
                self.view_form_fields()
            },
        ])
    }

    fn view_form_fields(&self) -> Node<Msg> {
        div(
            [class("bg-ctp-surface0 rounded-lg shadow-lg p-6 border border-ctp-surface1 space-y-4")],
            [
                match &self.form.save_error {
                    Some(message) => div(
                        [class("px-4 py-3 rounded-md bg-ctp-red/20 text-ctp-red")],
                        [text(message)],
                    ),
                    None => span([], []),
                },
                div([], [
                    label([class("block text-sm font-medium text-ctp-subtext0 mb-1")], [text("Title")]),
                    input([
                        r#type("text"),
                        value(&self.form.title),
                        on_input(|event| Msg::SetTitle(event.value())),
                        class("w-full px-3 py-2 bg-ctp-surface1 border border-ctp-surface2 rounded-md text-ctp-text focus:outline-none focus:ring-2 focus:ring-ctp-blue focus:border-transparent"),
                    ], []),
                    match &self.form.title_error {
                        Some(message) => p([class("text-sm text-ctp-red mt-1")], [text(message)]),
                        None => span([], []),
                    },
                ]),
                div([], [
                    label([class("block text-sm font-medium text-ctp-subtext0 mb-1")], [text("Description")]),
                    textarea([
                        value(&self.form.description),
                        on_input(|event| Msg::SetDescription(event.value())),
                        class("w-full px-3 py-2 bg-ctp-surface1 border border-ctp-surface2 rounded-md text-ctp-text focus:outline-none focus:ring-2 focus:ring-ctp-blue focus:border-transparent h-24 resize-y"),
                    ], []),
                ]),
                div([], [
                    label([class("block text-sm font-medium text-ctp-subtext0 mb-1")], [text("Due Date")]),
                    input([
                        r#type("date"),
                        value(&self.form.due_date),
                        on_input(|event| Msg::SetDueDate(event.value())),
                        class("w-full px-3 py-2 bg-ctp-surface1 border border-ctp-surface2 rounded-md text-ctp-text focus:outline-none focus:ring-2 focus:ring-ctp-blue focus:border-transparent"),
                    ], []),
                ]),
                div([], [
                    label([class("block text-sm font-medium text-ctp-subtext0 mb-1")], [text("Priority")]),
                    select(
                        [
                            on_change(|event| Msg::SetPriority(event.value())),
                            class("w-full px-3 py-2 bg-ctp-surface1 border border-ctp-surface2 rounded-md text-ctp-text focus:outline-none focus:ring-2 focus:ring-ctp-blue focus:border-transparent"),
                        ],
                        [
                            option([value(""), selected(self.form.priority.is_none())], [text("None")]),
                            self.priority_option(Priority::Low),
                            self.priority_option(Priority::Medium),
                            self.priority_option(Priority::High),
                        ],
                    ),
                ]),
                div([class("flex gap-3 pt-2")], [
                    button([
                        on_click(|_| Msg::Submit),
                        r#type("button"),
                        class("flex-1 bg-ctp-blue hover:bg-ctp-sapphire text-ctp-base font-medium px-6 py-2 rounded-md transition-colors duration-200"),
                    ], [
                        match self.form.mode {
                            FormMode::Create => text("Create Task"),
                            FormMode::Edit(_) => text("Update Task"),
                        },
                    ]),
                    button([
                        on_click(|_| Msg::NavigateTo(Page::List)),
                        r#type("button"),
                        class("flex-1 bg-ctp-overlay0 hover:bg-ctp-overlay1 text-ctp-text font-medium px-6 py-2 rounded-md transition-colors duration-200"),
                    ], [text("Cancel")]),
                ]),
            ],
        )
    }

    fn priority_option(&self, priority: Priority) -> Node<Msg> {
        option(
            [
                value(priority.as_str()),
                selected(self.form.priority == Some(priority)),
            ],
            [text(priority.as_str())],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(overrides: impl FnOnce(&mut Task)) -> Task {
        let mut task = Task {
            id: 1,
            title: "Buy milk".to_string(),
            description: None,
            due_date: None,
            priority: None,
            completed: false,
            created_at: "2025-05-30T09:00:00".to_string(),
            updated_at: "2025-05-30T09:00:00".to_string(),
        };
        overrides(&mut task);
        task
    }

    #[test]
    fn blank_title_fails_validation() {
        let mut form = FormState::create();
        assert!(!form.validate());
        assert!(form.title_error.is_some());
    }

    #[test]
    fn whitespace_title_fails_validation() {
        let mut form = FormState::create();
        form.title = "   ".to_string();
        assert!(!form.validate());
    }

    #[test]
    fn valid_title_clears_previous_error() {
        let mut form = FormState::create();
        assert!(!form.validate());
        form.title = "Buy milk".to_string();
        assert!(form.validate());
        assert_eq!(form.title_error, None);
    }

    #[test]
    fn payload_omits_empty_controls() {
        let mut form = FormState::create();
        form.title = "Buy milk".to_string();
        let payload = form.build_payload();
        assert_eq!(payload.title, "Buy milk");
        assert_eq!(payload.description, None);
        assert_eq!(payload.due_date, None);
        assert_eq!(payload.priority, None);
    }

    #[test]
    fn payload_carries_filled_controls() {
        let mut form = FormState::create();
        form.title = "Buy milk".to_string();
        form.description = "Two liters".to_string();
        form.due_date = "2025-06-01".to_string();
        form.priority = Some(Priority::High);

        let payload = form.build_payload();
        assert_eq!(payload.description.as_deref(), Some("Two liters"));
        assert_eq!(payload.due_date.as_deref(), Some("2025-06-01T00:00:00Z"));
        assert_eq!(payload.priority, Some(Priority::High));
    }

    #[test]
    fn edit_mode_starts_loading() {
        let form = FormState::edit(7);
        assert_eq!(form.mode, FormMode::Edit(7));
        assert!(form.loading);
    }

    #[test]
    fn seeding_maps_absent_fields_to_empty_controls() {
        let mut form = FormState::edit(1);
        form.seed(&task(|_| {}));
        assert!(!form.loading);
        assert_eq!(form.title, "Buy milk");
        assert_eq!(form.description, "");
        assert_eq!(form.due_date, "");
        assert_eq!(form.priority, None);
    }

    #[test]
    fn seeding_fills_present_fields() {
        let mut form = FormState::edit(1);
        form.seed(&task(|task| {
            task.description = Some("Two liters".to_string());
            task.due_date = Some("2025-06-01T00:00:00Z".to_string());
            task.priority = Some(Priority::Medium);
        }));
        assert_eq!(form.description, "Two liters");
        assert_eq!(form.due_date, "2025-06-01");
        assert_eq!(form.priority, Some(Priority::Medium));
    }
}
