//! Server-side HTML rendering.
//!
//! Templates are compiled into the binary and parsed once into a shared
//! [`Tera`] instance. Tera escapes HTML in every `.html` template, so titles
//! and descriptions are rendered as text.

use axum::http::StatusCode;
use serde::Serialize;
use std::sync::LazyLock;
use tera::{Context, Tera};

use crate::db::Todo;

static TEMPLATES: LazyLock<Tera> = LazyLock::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("index.html", include_str!("../templates/index.html")),
        ("add.html", include_str!("../templates/add.html")),
        ("error.html", include_str!("../templates/error.html")),
    ])
    .expect("bundled templates must parse");
    tera
});

/// State of the add form: previously typed values plus an optional message.
#[derive(Debug, Default, Clone, Serialize)]
pub struct AddFormView {
    pub title: String,
    pub description: String,
    pub error: Option<String>,
}

pub fn render_index(todos: &[Todo]) -> Result<String, tera::Error> {
    let mut ctx = Context::new();
    ctx.insert("todos", todos);
    TEMPLATES.render("index.html", &ctx)
}

pub fn render_add_form(form: &AddFormView) -> Result<String, tera::Error> {
    TEMPLATES.render("add.html", &Context::from_serialize(form)?)
}

pub fn render_error(status: StatusCode, message: &str) -> Result<String, tera::Error> {
    let mut ctx = Context::new();
    ctx.insert("status", &status.to_string());
    ctx.insert("message", message);
    TEMPLATES.render("error.html", &ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i64, title: &str, complete: bool) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            description: format!("about {title}"),
            complete,
        }
    }

    #[test]
    fn index_lists_todos_with_actions() {
        let html = render_index(&[todo(1, "Buy milk", false), todo(2, "Walk dog", true)]).unwrap();

        assert!(html.contains("Buy milk"));
        assert!(html.contains("about Walk dog"));
        assert!(html.contains(r#"href="/complete/1""#));
        assert!(!html.contains(r#"href="/complete/2""#));
        assert!(html.contains(r#"href="/delete/1""#));
        assert!(html.contains(r#"href="/delete/2""#));
        assert!(html.contains("/static/style.css"));
    }

    #[test]
    fn index_shows_placeholder_when_empty() {
        let html = render_index(&[]).unwrap();
        assert!(html.contains("Nothing to do."));
        assert!(html.contains(r#"href="/add""#));
    }

    #[test]
    fn todo_text_is_escaped() {
        let html = render_index(&[todo(1, "<script>x</script>", false)]).unwrap();
        assert!(!html.contains("<script>x</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn add_form_keeps_values_and_message() {
        let empty = render_add_form(&AddFormView::default()).unwrap();
        assert!(empty.contains(r#"action="/add""#));
        assert!(!empty.contains(r#"class="error""#));

        let reprompt = render_add_form(&AddFormView {
            title: "Buy milk".to_string(),
            description: String::new(),
            error: Some("`description` is required".to_string()),
        })
        .unwrap();
        assert!(reprompt.contains(r#"value="Buy milk""#));
        assert!(reprompt.contains("is required"));
    }

    #[test]
    fn error_page_shows_status() {
        let html = render_error(StatusCode::NOT_FOUND, "Todo 3 not found").unwrap();
        assert!(html.contains("404 Not Found"));
        assert!(html.contains("Todo 3 not found"));
    }
}
