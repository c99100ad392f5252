use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use pretty_assertions::assert_eq;
use scheduler_backend::{app, ServerConfig};
use serde_json::{json, Value};
use shared::{sort_tasks, Envelope, Task};
use tower::ServiceExt;

const TOKEN: &str = "test-token";

fn test_app() -> Router {
    let config = ServerConfig::from_lookup(|key| match key {
        "SCHEDULER_TOKEN" => Some(TOKEN.to_string()),
        "SCHEDULER_STATIC_DIR" => Some("does-not-exist".to_string()),
        _ => None,
    })
    .unwrap();
    app(&config)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, TOKEN);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn create(app: &Router, message: &str) -> Task {
    let (status, body) = send(app, Method::POST, "/api/tasks", Some(json!({ "message": message }))).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice::<Envelope<Task>>(&body).unwrap().data
}

async fn list(app: &Router) -> Vec<Task> {
    let (status, body) = send(app, Method::GET, "/api/tasks", None).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice::<Envelope<Vec<Task>>>(&body).unwrap().data
}

async fn update(app: &Router, patches: Value) -> Vec<Task> {
    let (status, body) = send(app, Method::PUT, "/api/tasks", Some(patches)).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice::<Envelope<Vec<Task>>>(&body).unwrap().data
}

#[tokio::test]
async fn empty_collection_is_wrapped_in_data() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/api/tasks", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!({ "data": [] }));
}

#[tokio::test]
async fn requests_without_token_are_rejected() {
    let app = test_app();
    let response = app
        .oneshot(Request::builder().uri("/api/tasks").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_trims_and_rejects_invalid_messages() {
    let app = test_app();

    let task = create(&app, "  Buy milk  ").await;
    assert_eq!(task.message, "Buy milk");
    assert!(!task.completed && !task.favorite);

    let (status, _) = send(&app, Method::POST, "/api/tasks", Some(json!({ "message": "   " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let too_long = "x".repeat(47);
    let (status, _) = send(&app, Method::POST, "/api/tasks", Some(json!({ "message": too_long }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(list(&app).await.len(), 1);
}

#[tokio::test]
async fn delete_returns_no_content_then_not_found() {
    let app = test_app();
    let task = create(&app, "Buy milk").await;
    let uri = format!("/api/tasks/{}", task.id);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn batch_update_returns_only_known_tasks() {
    let app = test_app();
    let first = create(&app, "First").await;
    let second = create(&app, "Second").await;

    let updated = update(
        &app,
        json!([
            { "id": first.id, "completed": true },
            { "id": "unknown", "favorite": true },
        ]),
    )
    .await;

    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].id, first.id);
    assert!(updated[0].completed);
    assert!(updated[0].modified.is_some());

    let stored = list(&app).await;
    let untouched = stored.iter().find(|task| task.id == second.id).unwrap();
    assert!(!untouched.completed);
}

#[tokio::test]
async fn buy_milk_lifecycle() {
    let app = test_app();
    create(&app, "Water plants").await;
    let milk = create(&app, "Buy milk").await;

    let sorted = sort_tasks(list(&app).await);
    assert_eq!(sorted[0].id, milk.id);

    update(&app, json!([{ "id": milk.id, "message": milk.message, "completed": false, "favorite": true }])).await;
    let sorted = sort_tasks(list(&app).await);
    assert_eq!(sorted[0].id, milk.id);
    assert!(sorted[0].favorite);

    update(&app, json!([{ "id": milk.id, "message": milk.message, "completed": true, "favorite": true }])).await;
    let sorted = sort_tasks(list(&app).await);
    assert_eq!(sorted.last().map(|task| &task.id), Some(&milk.id));
    assert!(sorted.last().unwrap().completed);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/tasks/{}", milk.id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(list(&app).await.iter().all(|task| task.id != milk.id));
}
