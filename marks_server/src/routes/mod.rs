//! HTTP routes — student pages, health check, static assets.

pub mod students;

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::MarksConfig;
use crate::store::StudentStore;

/// Shared state for route handlers.
#[derive(Clone)]
pub struct MarksRouterState {
    pub store: Arc<dyn StudentStore>,
    pub config: Arc<MarksConfig>,
}

/// Build the application router.
pub fn marks_router(state: MarksRouterState) -> Router {
    let public = ServeDir::new(&state.config.public_dir);

    Router::new()
        .route("/", get(students::list_students))
        .route("/healthz", get(health))
        // Student CRUD
        .route("/students", post(students::create_student))
        .route("/students/add", get(students::add_form))
        .route(
            "/students/{id}",
            put(students::update_student)
                .delete(students::delete_student)
                .post(students::method_override),
        )
        .route("/students/{id}/edit", get(students::edit_form))
        .route("/students/{id}/delete", get(students::delete_student))
        .nest_service("/public", public)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
