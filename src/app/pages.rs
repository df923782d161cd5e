use std::collections::HashMap;

use axum::Form;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::app::AppState;
use crate::app::session;
use crate::forms::{self, FormId};
use crate::render::{self, Notice, ViewParams};
use crate::router::NavState;

/// Renders the session's current view. A `view` parameter is a selection
/// from the sidebar and moves the session before rendering.
pub async fn show(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ViewParams>,
) -> Result<Response, StatusCode> {
    let mut nav = session::nav_state(&headers);
    if let Some(label) = params.view.as_deref() {
        let transition = nav.select(label);
        if transition.rerender {
            tracing::debug!(from = %nav.current(), to = %transition.state.current(), "view selected");
        }
        nav = transition.state;
    }

    let body = render::page(&state.store, nav.current(), &params, None);
    Ok(([session::set_cookie(nav)?], Html(body)).into_response())
}

#[derive(Debug, Deserialize)]
pub struct NavigateForm {
    #[serde(default)]
    target: String,
}

/// In-page navigation buttons. Always sends the browser back to `/` so the
/// target view is rendered again, even when it is already current.
pub async fn navigate(
    headers: HeaderMap,
    Form(form): Form<NavigateForm>,
) -> Result<Response, StatusCode> {
    let transition = session::nav_state(&headers).navigate_to(&form.target);
    tracing::debug!(to = %transition.state.current(), "navigate");
    Ok(([session::set_cookie(transition.state)?], Redirect::to("/")).into_response())
}

pub async fn submit_form(
    State(state): State<AppState>,
    Path(form_id): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Response, StatusCode> {
    let form_id = match form_id.parse::<FormId>() {
        Ok(form_id) => form_id,
        Err(err) => {
            tracing::warn!(%err, "rejecting submission");
            return Err(StatusCode::NOT_FOUND);
        }
    };

    // Submitting a form moves the session to the view that hosts it.
    let nav = NavState::new(form_id.view());
    let (status, notice) = match forms::submit(form_id, fields) {
        Ok(ack) => (StatusCode::OK, Notice::Acknowledged(ack)),
        Err(err) => {
            tracing::info!(form = %form_id, %err, "submission rejected");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Notice::Rejected {
                    form: form_id,
                    error: err.to_string(),
                },
            )
        }
    };

    let body = render::page(
        &state.store,
        nav.current(),
        &ViewParams::default(),
        Some(&notice),
    );
    Ok((status, [session::set_cookie(nav)?], Html(body)).into_response())
}
