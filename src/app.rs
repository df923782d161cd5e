use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::content::ContentStore;

pub mod api;
pub mod pages;
pub mod session;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ContentStore>,
}

impl AppState {
    pub fn new(store: ContentStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::show))
        .route("/navigate", post(pages::navigate))
        .route("/forms/:form_id", post(pages::submit_form))
        .route("/api/views", get(api::list_views))
        .route("/api/books", get(api::list_books))
        .route("/api/books/:book_id", get(api::get_book))
        .route("/api/scripts", get(api::list_scripts))
        .route("/api/classify", get(api::classify_script))
        .route("/healthz", get(|| async { "ok\n" }))
        .fallback(|| async {
            (
                StatusCode::NOT_FOUND,
                Html(
                    r#"<!doctype html>
<html>
  <head><meta charset="utf-8"><title>Not found</title></head>
  <body>
    <h1>Not found</h1>
    <p><a href="/">Back to the overview</a></p>
  </body>
</html>
"#,
                ),
            )
        })
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
