use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};

use crate::router::NavState;

pub const COOKIE_NAME: &str = "kye_view";

pub fn nav_state(headers: &HeaderMap) -> NavState {
    NavState::restore(cookie_value(headers, COOKIE_NAME).as_deref())
}

pub fn set_cookie(state: NavState) -> Result<(HeaderName, HeaderValue), StatusCode> {
    let value = HeaderValue::from_str(&format!(
        "{COOKIE_NAME}={}; Path=/; HttpOnly; SameSite=Lax",
        state.current().slug()
    ))
    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok((SET_COOKIE, value))
}

fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"').to_owned())
}
