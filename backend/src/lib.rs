//! Development server for the scheduler UI.
//!
//! Serves the built frontend and a task collection API with in-memory storage.

pub mod config;
pub mod error;
pub mod routes;
pub mod store;

use axum::Router;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub use config::ServerConfig;
pub use routes::{api_router, AppState};

pub const API_PATH: &str = "/api/tasks";

pub fn app(config: &ServerConfig) -> Router {
    Router::new()
        .nest(API_PATH, api_router(AppState::new(config.token.clone())))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
