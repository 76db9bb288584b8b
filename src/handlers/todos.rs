use axum::{
    Form,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::debug;

use crate::error::TodoError;
use crate::router::TodoState;
use crate::views::{self, AddFormView};

/// Body of `POST /add`. Absent fields become empty strings so they reach
/// validation instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct AddTodoForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// GET / -> list page.
pub async fn list_todos(State(state): State<TodoState>) -> Result<Html<String>, TodoError> {
    let todos = state.service.list_todos().await?;
    Ok(Html(views::render_index(&todos)?))
}

/// GET /add -> empty add form.
pub async fn add_form() -> Result<Html<String>, TodoError> {
    Ok(Html(views::render_add_form(&AddFormView::default())?))
}

/// POST /add -> create, then back to the list. Invalid input re-renders the form.
pub async fn add_todo(
    State(state): State<TodoState>,
    Form(form): Form<AddTodoForm>,
) -> Result<Response, TodoError> {
    match state.service.add_todo(&form.title, &form.description).await {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(TodoError::Validation(e)) => {
            debug!(error = %e, "add form rejected");
            let status = TodoError::from(e).status();
            let view = AddFormView {
                title: form.title,
                description: form.description,
                error: Some(e.to_string()),
            };
            Ok((status, Html(views::render_add_form(&view)?)).into_response())
        }
        Err(e) => Err(e),
    }
}

/// GET /complete/{todo_id}
pub async fn complete_todo(
    State(state): State<TodoState>,
    Path(todo_id): Path<i64>,
) -> Result<Redirect, TodoError> {
    state.service.complete_todo(todo_id).await?;
    Ok(Redirect::to("/"))
}

/// GET /delete/{todo_id}
pub async fn delete_todo(
    State(state): State<TodoState>,
    Path(todo_id): Path<i64>,
) -> Result<Redirect, TodoError> {
    state.service.delete_todo(todo_id).await?;
    Ok(Redirect::to("/"))
}
