use axum::{Router, routing::get};
use std::path::Path;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::handlers::todos;
use crate::service::TodoService;

#[derive(Clone)]
pub struct TodoState {
    pub service: TodoService,
}

impl TodoState {
    pub fn new(service: TodoService) -> Self {
        Self { service }
    }
}

/// (verb, path) -> handler table, plus `/static` served from `static_dir`.
pub fn todo_router(state: TodoState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(todos::list_todos))
        .route("/add", get(todos::add_form).post(todos::add_todo))
        .route("/complete/{todo_id}", get(todos::complete_todo))
        .route("/delete/{todo_id}", get(todos::delete_todo))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
