//! Calls against the remote task collection.

use serde::{de::DeserializeOwned, Serialize};
use shared::{
    ApiConfig, ApiError, CreateTaskRequest, Envelope, Operation, Task, TaskId, TaskUpdate,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

const OK: u16 = 200;
const NO_CONTENT: u16 = 204;

pub async fn fetch_tasks(config: &ApiConfig) -> Result<Vec<Task>, ApiError> {
    let text = send(config, Operation::Fetch, "GET", config.collection_url(), None, OK).await?;
    decode::<Vec<Task>>(Operation::Fetch, &text)
}

pub async fn create_task(config: &ApiConfig, message: String) -> Result<Task, ApiError> {
    let body = encode(Operation::Create, &CreateTaskRequest { message })?;
    let text = send(config, Operation::Create, "POST", config.collection_url(), Some(body), OK).await?;
    decode::<Task>(Operation::Create, &text)
}

pub async fn delete_task(config: &ApiConfig, id: &TaskId) -> Result<(), ApiError> {
    send(config, Operation::Delete, "DELETE", &config.item_url(id), None, NO_CONTENT).await?;
    Ok(())
}

pub async fn update_tasks(config: &ApiConfig, updates: &[TaskUpdate]) -> Result<Vec<Task>, ApiError> {
    let body = encode(Operation::Update, updates)?;
    let text = send(config, Operation::Update, "PUT", config.collection_url(), Some(body), OK).await?;
    decode::<Vec<Task>>(Operation::Update, &text)
}

fn encode<T: Serialize + ?Sized>(operation: Operation, value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Encode {
        operation,
        detail: e.to_string(),
    })
}

fn decode<T: DeserializeOwned>(operation: Operation, text: &str) -> Result<T, ApiError> {
    serde_json::from_str::<Envelope<T>>(text)
        .map(|envelope| envelope.data)
        .map_err(|e| ApiError::Decode {
            operation,
            detail: e.to_string(),
        })
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

async fn send(
    config: &ApiConfig,
    operation: Operation,
    method: &str,
    url: &str,
    body: Option<String>,
    expected: u16,
) -> Result<String, ApiError> {
    let transport = |e: JsValue| ApiError::transport(operation, describe(&e));

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;
    let headers = request.headers();
    if !config.token.is_empty() {
        headers.set("Authorization", &config.token).map_err(transport)?;
    }
    if body.is_some() {
        headers.set("Content-Type", "application/json").map_err(transport)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::transport(operation, "no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?
        .into();

    if response.status() != expected {
        return Err(ApiError::Status {
            operation,
            status: response.status(),
        });
    }
    if expected == NO_CONTENT {
        return Ok(String::new());
    }

    let text_promise = response.text().map_err(transport)?;
    JsFuture::from(text_promise)
        .await
        .map_err(transport)?
        .as_string()
        .ok_or_else(|| ApiError::transport(operation, "response body is not text"))
}
