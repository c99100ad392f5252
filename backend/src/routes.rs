use axum::{
    extract::{Path, Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::{self, Next},
    response::{Json, Response},
    routing::{delete, get},
    Router,
};
use shared::{CreateTaskRequest, Envelope, Task, TaskId, TaskUpdate};

use crate::error::ServerError;
use crate::store::TaskStore;

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: TaskStore,
    pub token: String,
}

impl AppState {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            store: TaskStore::new(),
            token: token.into(),
        }
    }
}

/// The task collection routes, relative to their mount point.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_tasks).post(create_task).put(update_tasks))
        .route("/:id", delete(delete_task))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_token))
        .with_state(state)
}

async fn require_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    if state.token.is_empty() {
        return Ok(next.run(request).await);
    }
    let presented = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    if presented == Some(state.token.as_str()) {
        Ok(next.run(request).await)
    } else {
        Err(ServerError::Unauthorized)
    }
}

async fn list_tasks(State(state): State<AppState>) -> Json<Envelope<Vec<Task>>> {
    let tasks = state.store.list().await;
    tracing::debug!(count = tasks.len(), "listing tasks");
    Json(Envelope::new(tasks))
}

async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<Json<Envelope<Task>>, ServerError> {
    let task = state.store.create(&payload.message).await?;
    tracing::info!(id = %task.id, "task created");
    Ok(Json(Envelope::new(task)))
}

async fn update_tasks(
    State(state): State<AppState>,
    Json(payload): Json<Vec<TaskUpdate>>,
) -> Result<Json<Envelope<Vec<Task>>>, ServerError> {
    let requested = payload.len();
    let tasks = state.store.update(payload).await?;
    tracing::info!(requested, updated = tasks.len(), "tasks updated");
    Ok(Json(Envelope::new(tasks)))
}

async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
) -> Result<StatusCode, ServerError> {
    state.store.delete(&id).await?;
    tracing::info!(%id, "task deleted");
    Ok(StatusCode::NO_CONTENT)
}
