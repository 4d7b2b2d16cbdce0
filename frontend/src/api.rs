//! REST client for the task backend. Every HTTP request the application
//! makes is built here; failures of any kind surface as a single generic
//! error string for the caller to display.

use serde::de::DeserializeOwned;
use shared::{Task, TaskData};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Request, RequestInit, Response};

const API_URL: &str = "http://localhost:8000";

fn list_url(completed: Option<bool>) -> String {
    match completed {
        Some(value) => format!("{API_URL}/tasks?completed={value}"),
        None => format!("{API_URL}/tasks"),
    }
}

fn task_url(id: i64) -> String {
    format!("{API_URL}/tasks/{id}")
}

fn transition_url(id: i64, completed: bool) -> String {
    let action = if completed { "complete" } else { "pending" };
    format!("{}/{}", task_url(id), action)
}

async fn send(method: &str, url: &str, body: Option<String>) -> Result<String, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|_| "Failed to create request")?;

    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|_| "Failed to set header")?;
    }

    let window = window().ok_or("No window available")?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| "Failed to send request")?
        .into();

    if !response.ok() {
        return Err(format!("Request failed with status {}", response.status()));
    }

    let text_promise = response.text().map_err(|_| "Failed to read response")?;
    JsFuture::from(text_promise)
        .await
        .map_err(|_| "Failed to read response")?
        .as_string()
        .ok_or_else(|| "Failed to read response".to_string())
}

fn parse<T: DeserializeOwned>(text: &str) -> Result<T, String> {
    serde_json::from_str(text).map_err(|e| format!("Failed to parse response: {e}"))
}

pub async fn list_tasks(completed: Option<bool>) -> Result<Vec<Task>, String> {
    let text = send("GET", &list_url(completed), None).await?;
    parse(&text)
}

pub async fn get_task(id: i64) -> Result<Task, String> {
    let text = send("GET", &task_url(id), None).await?;
    parse(&text)
}

pub async fn create_task(data: TaskData) -> Result<Task, String> {
    let body = serde_json::to_string(&data).map_err(|_| "Failed to serialize request")?;
    let text = send("POST", &format!("{API_URL}/tasks"), Some(body)).await?;
    parse(&text)
}

pub async fn update_task(id: i64, data: TaskData) -> Result<Task, String> {
    let body = serde_json::to_string(&data).map_err(|_| "Failed to serialize request")?;
    let text = send("PUT", &task_url(id), Some(body)).await?;
    parse(&text)
}

pub async fn delete_task(id: i64) -> Result<(), String> {
    send("DELETE", &task_url(id), None).await?;
    Ok(())
}

pub async fn complete_task(id: i64) -> Result<Task, String> {
    let text = send("POST", &transition_url(id, true), None).await?;
    parse(&text)
}

pub async fn reopen_task(id: i64) -> Result<Task, String> {
    let text = send("POST", &transition_url(id, false), None).await?;
    parse(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_url_maps_filter_to_query_param() {
        assert_eq!(list_url(None), "http://localhost:8000/tasks");
        assert_eq!(list_url(Some(true)), "http://localhost:8000/tasks?completed=true");
        assert_eq!(list_url(Some(false)), "http://localhost:8000/tasks?completed=false");
    }

    #[test]
    fn task_url_addresses_single_resource() {
        assert_eq!(task_url(42), "http://localhost:8000/tasks/42");
    }

    #[test]
    fn transition_url_selects_the_dedicated_subresource() {
        assert_eq!(transition_url(42, true), "http://localhost:8000/tasks/42/complete");
        assert_eq!(transition_url(42, false), "http://localhost:8000/tasks/42/pending");
    }
}
