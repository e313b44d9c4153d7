//! HTTP handlers.
//!
//! Every `/calc` request builds its own [`Engine`]; nothing computed in one
//! request is visible to another.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use calc_core::Engine;
use serde::Serialize;
use tracing::debug;

use crate::error::AppError;
use crate::json::to_body;
use crate::operand::parse_operand;
use crate::selector::parse_selector;
use crate::AppState;

const HOME_PAGE: &str = include_str!("home.html");

const JSON_CONTENT_TYPE: &str = "application/json";

/// Body of a successful `/calc` response.
///
/// `operation` echoes the selector from the request (`"sub"`, not
/// `"subtract"`).
#[derive(Debug, Clone, Serialize)]
pub struct CalcResponse {
    pub a: f64,
    pub b: f64,
    pub operation: String,
    pub result: f64,
}

/// Body of `/health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
}

/// `GET /`
pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

/// `GET /calc?a=<num>&b=<num>&op=<add|sub|mul|div>`
pub async fn calc(Query(params): Query<Vec<(String, String)>>) -> Result<Response, AppError> {
    let a = operand_param(&params, "a")?;
    let b = operand_param(&params, "b")?;
    let op = first_param(&params, "op");
    let kind = parse_selector(op).ok_or_else(|| AppError::UnknownOperation(op.to_string()))?;

    let mut engine = Engine::new();
    let result = engine.apply(kind, a, b)?;
    debug!(operation = %kind, a, b, result, "calculation complete");

    json_response(&CalcResponse {
        a,
        b,
        operation: op.to_string(),
        result,
    })
}

/// `GET /health`
pub async fn health(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    json_response(&HealthResponse {
        status: "ok",
        service: state.config.service_name.clone(),
    })
}

// =============================================================================
// Helpers
// =============================================================================

/// First value for `key`, or `""` when absent.
fn first_param<'a>(params: &'a [(String, String)], key: &str) -> &'a str {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .unwrap_or("")
}

fn operand_param(params: &[(String, String)], key: &'static str) -> Result<f64, AppError> {
    parse_operand(first_param(params, key)).map_err(|_| AppError::InvalidParameter(key))
}

fn json_response<T: Serialize>(body: &T) -> Result<Response, AppError> {
    let body = to_body(body)?;
    Ok(([(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], body).into_response())
}
