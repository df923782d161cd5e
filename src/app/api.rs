use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::json;

use crate::app::AppState;
use crate::classifier::{Classification, classify};
use crate::error::Error;
use crate::filter::{CategoryFilter, StatusFilter, filter_books, filter_scripts};
use crate::formats::Book;
use crate::router::View;

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

fn api_error(err: Error) -> (StatusCode, String) {
    let status = match err {
        Error::BookNotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_REQUEST,
    };
    (status, err.to_string())
}

pub async fn list_views() -> Json<serde_json::Value> {
    let views: Vec<_> = View::ALL
        .into_iter()
        .map(|view| json!({ "slug": view.slug(), "label": view.label() }))
        .collect();
    Json(json!(views))
}

#[derive(Debug, Deserialize)]
pub struct BooksQuery {
    status: Option<String>,
}

pub async fn list_books(
    State(state): State<AppState>,
    Query(q): Query<BooksQuery>,
) -> ApiResult<Vec<Book>> {
    let status = match q.status.as_deref().map(str::trim) {
        None | Some("") => StatusFilter::All,
        Some(raw) => raw.parse::<StatusFilter>().map_err(api_error)?,
    };
    let books = filter_books(&state.store, status)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(books))
}

pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> ApiResult<Book> {
    let book = state.store.get_book(&book_id).map_err(api_error)?;
    Ok(Json(book.clone()))
}

#[derive(Debug, Deserialize)]
pub struct ScriptsQuery {
    category: Option<String>,
    q: Option<String>,
}

pub async fn list_scripts(
    State(state): State<AppState>,
    Query(q): Query<ScriptsQuery>,
) -> ApiResult<serde_json::Value> {
    let category = match q.category.as_deref().map(str::trim) {
        None | Some("") => CategoryFilter::All,
        Some(raw) => raw.parse::<CategoryFilter>().map_err(api_error)?,
    };
    let groups: Vec<_> = filter_scripts(&state.store, category, q.q.as_deref())
        .iter()
        .map(|group| {
            json!({
                "category": group.category,
                "title": group.title,
                "scripts": group.annotated(),
            })
        })
        .collect();
    Ok(Json(json!(groups)))
}

#[derive(Debug, Deserialize)]
pub struct ClassifyQuery {
    #[serde(default)]
    script: String,
}

pub async fn classify_script(Query(q): Query<ClassifyQuery>) -> Json<Classification> {
    Json(classify(&q.script))
}
