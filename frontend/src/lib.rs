use sauron::{
    html::{attributes::*, *},
    prelude::*,
};
use shared::{Priority, Task};
use web_sys::{console, window};

mod api;
mod datetime;
mod form;
mod list;

use form::{FormMode, FormState};
use list::Filter;

#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    List,
    NewTask,
    EditTask(i64),
}

impl Page {
    fn to_path(&self) -> String {
        match self {
            Page::List => "/".to_string(),
            Page::NewTask => "/add-task".to_string(),
            Page::EditTask(id) => format!("/edit-task/{id}"),
        }
    }

    fn from_path(path: &str) -> Self {
        if path == "/add-task" {
            return Page::NewTask;
        }
        if let Some(rest) = path.strip_prefix("/edit-task/") {
            if let Ok(id) = rest.parse() {
                return Page::EditTask(id);
            }
        }
        Page::List
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    NavigateTo(Page),

    // List view
    LoadTasks,
    TasksLoaded(Vec<Task>),
    SetFilter(Filter),
    ToggleTask(i64, bool),
    DeleteTask(i64),
    ListError(String),

    // Form view
    TaskFetched(Task),
    TaskLoadFailed(String),
    SetTitle(String),
    SetDescription(String),
    SetDueDate(String),
    SetPriority(String),
    Submit,
    TaskSaved(Task),
    SaveFailed(String),
}

pub struct Model {
    page: Page,
    filter: Filter,
    tasks: Vec<Task>,
    list_error: Option<String>,
    form: FormState,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            page: Page::List,
            filter: Filter::All,
            tasks: Vec::new(),
            list_error: None,
            form: FormState::create(),
        }
    }
}

impl Application for Model {
    type MSG = Msg;

    fn init(&mut self) -> Cmd<Msg> {
        if let Some(window) = window() {
            if let Ok(pathname) = window.location().pathname() {
                self.page = Page::from_path(&pathname);
            }
        }
        setup_popstate_listener();
        self.enter_page()
    }

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::NavigateTo(page) => {
                self.page = page.clone();
                if let Some(history) = window().and_then(|w| w.history().ok()) {
                    let _ = history.push_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&page.to_path()),
                    );
                }
                self.enter_page()
            }
            Msg::LoadTasks => self.load_tasks(),
            Msg::TasksLoaded(tasks) => {
                self.tasks = tasks;
                self.list_error = None;
                Cmd::none()
            }
            Msg::SetFilter(filter) => {
                self.filter = filter;
                self.load_tasks()
            }
            Msg::ToggleTask(id, completed) => Cmd::new(async move {
                // The transition is chosen by the task's current state;
                // the refreshed list reflects the new one.
                let result = if completed {
                    api::reopen_task(id).await
                } else {
                    api::complete_task(id).await
                };
                match result {
                    Ok(_) => Msg::LoadTasks,
                    Err(e) => Msg::ListError(e),
                }
            }),
            Msg::DeleteTask(id) => Cmd::new(async move {
                match api::delete_task(id).await {
                    Ok(()) => Msg::LoadTasks,
                    Err(e) => Msg::ListError(e),
                }
            }),
            Msg::ListError(message) => {
                console::log_1(&format!("Error: {}", message).into());
                self.list_error = Some(message);
                Cmd::none()
            }
            Msg::TaskFetched(task) => {
                self.form.seed(&task);
                Cmd::none()
            }
            Msg::TaskLoadFailed(message) => {
                console::log_1(&format!("Error: {}", message).into());
                self.form.loading = false;
                self.form.load_error = Some(message);
                Cmd::none()
            }
            Msg::SetTitle(title) => {
                self.form.title = title;
                Cmd::none()
            }
            Msg::SetDescription(description) => {
                self.form.description = description;
                Cmd::none()
            }
            Msg::SetDueDate(due_date) => {
                self.form.due_date = due_date;
                Cmd::none()
            }
            Msg::SetPriority(value) => {
                self.form.priority = Priority::from_value(&value);
                Cmd::none()
            }
            Msg::Submit => {
                if !self.form.validate() {
                    return Cmd::none();
                }
                let payload = self.form.build_payload();
                match self.form.mode {
                    FormMode::Create => Cmd::new(async move {
                        match api::create_task(payload).await {
                            Ok(task) => Msg::TaskSaved(task),
                            Err(e) => Msg::SaveFailed(e),
                        }
                    }),
                    FormMode::Edit(id) => Cmd::new(async move {
                        match api::update_task(id, payload).await {
                            Ok(task) => Msg::TaskSaved(task),
                            Err(e) => Msg::SaveFailed(e),
                        }
                    }),
                }
            }
            Msg::TaskSaved(_) => Cmd::new(async { Msg::NavigateTo(Page::List) }),
            Msg::SaveFailed(message) => {
                console::log_1(&format!("Error: {}", message).into());
                self.form.save_error = Some(message);
                Cmd::none()
            }
        }
    }

    fn view(&self) -> Node<Msg> {
        div(
            [class("min-h-screen bg-ctp-base text-ctp-text")],
            [div([class("px-6 py-8")], [match self.page {
                Page::List => self.view_list(),
                Page::NewTask | Page::EditTask(_) => self.view_form(),
            }])],
        )
    }
}

impl Model {
    /// Resets per-page state and kicks off the page's initial fetch.
    fn enter_page(&mut self) -> Cmd<Msg> {
        match self.page {
            Page::List => self.load_tasks(),
            Page::NewTask => {
                self.form = FormState::create();
                Cmd::none()
            }
            Page::EditTask(id) => {
                self.form = FormState::edit(id);
                Cmd::new(async move {
                    match api::get_task(id).await {
                        Ok(task) => Msg::TaskFetched(task),
                        Err(e) => Msg::TaskLoadFailed(e),
                    }
                })
            }
        }
    }

    fn load_tasks(&mut self) -> Cmd<Msg> {
        let completed = self.filter.completed_param();
        Cmd::new(async move {
            match api::list_tasks(completed).await {
                Ok(tasks) => Msg::TasksLoaded(tasks),
                Err(e) => Msg::ListError(e),
            }
        })
    }
}

fn setup_popstate_listener() {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    // Back/forward restores the URL without re-running init, so reload and
    // let init derive the page from the restored path.
    let callback = Closure::wrap(Box::new(|_event: web_sys::PopStateEvent| {
        if let Some(window) = window() {
            let _ = window.location().reload();
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(window) = window() {
        let _ = window
            .add_event_listener_with_callback("popstate", callback.as_ref().unchecked_ref());
    }
    callback.forget();
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    Program::mount_to_body(Model::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_map_to_pages() {
        assert_eq!(Page::from_path("/"), Page::List);
        assert_eq!(Page::from_path("/add-task"), Page::NewTask);
        assert_eq!(Page::from_path("/edit-task/42"), Page::EditTask(42));
    }

    #[test]
    fn unknown_routes_fall_back_to_the_list() {
        assert_eq!(Page::from_path("/nope"), Page::List);
        assert_eq!(Page::from_path("/edit-task/abc"), Page::List);
    }

    #[test]
    fn pages_round_trip_through_paths() {
        for page in [Page::List, Page::NewTask, Page::EditTask(7)] {
            assert_eq!(Page::from_path(&page.to_path()), page);
        }
    }
}
