//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::state::AppState;
use crate::profanity;
use crate::validation::{self, ListingDraft, ValidationError};

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    let max_body_size = state.config.max_body_size;
    let cors_enabled = state.config.cors_enabled;
    let logging = state.config.logging;

    let mut router = Router::new()
        // Health and status
        .route("/health", get(health_check))
        .route("/status", get(status))
        // Text operations
        .route("/check", post(check))
        .route("/censor", post(censor))
        .route("/wrap", post(wrap))
        // Validation
        .route("/validate/username", post(validate_username))
        .route("/validate/email", post(validate_email))
        .route("/validate/listing", post(validate_listing))
        .layer(DefaultBodyLimit::max(max_body_size))
        .with_state(state);

    if cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }
    if logging {
        router = router.layer(TraceLayer::new_for_http());
    }
    router
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Status endpoint
async fn status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let stats = state.stats.summary();

    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.uptime().as_secs(),
        "checks": stats.checks,
        "flagged": stats.flagged,
        "rejections": stats.rejections,
        "patterns": profanity::PATTERNS.len(),
        "reserved_names": state.reserved.len(),
    }))
}

/// Text request
#[derive(Deserialize)]
pub struct CheckRequest {
    pub text: String,
}

/// Check text against the pattern table
async fn check(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CheckRequest>,
) -> impl IntoResponse {
    let matches = profanity::find_matches(&req.text);
    let flagged = !matches.is_empty();
    state.stats.record_check(flagged);

    Json(serde_json::json!({
        "flagged": flagged,
        "matches": matches,
    }))
}

/// Censor request
#[derive(Deserialize)]
pub struct CensorRequest {
    pub text: String,
    #[serde(default)]
    pub replacement: Option<String>,
}

/// Replace every match
async fn censor(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CensorRequest>,
) -> impl IntoResponse {
    let replacement = req
        .replacement
        .as_deref()
        .unwrap_or(&state.config.filter.replacement);

    let replaced = profanity::find_matches(&req.text).len();
    state.stats.record_check(replaced > 0);

    Json(serde_json::json!({
        "text": profanity::replace(&req.text, replacement),
        "replaced": replaced,
    }))
}

/// Wrap request
#[derive(Deserialize)]
pub struct WrapRequest {
    pub text: String,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
}

/// Wrap flagged words in markup
async fn wrap(
    State(state): State<Arc<AppState>>,
    Json(req): Json<WrapRequest>,
) -> impl IntoResponse {
    let filter = &state.config.filter;
    let prefix = req.prefix.as_deref().unwrap_or(&filter.wrap_prefix);
    let suffix = req.suffix.as_deref().unwrap_or(&filter.wrap_suffix);

    let wrapped = profanity::wrap(&req.text, prefix, suffix);
    state.stats.record_check(wrapped != req.text);

    Json(serde_json::json!({ "text": wrapped }))
}

/// Username validation request
#[derive(Deserialize)]
pub struct UsernameRequest {
    pub username: String,
}

/// Validate a username for registration
async fn validate_username(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UsernameRequest>,
) -> impl IntoResponse {
    let result = validation::validate_username(&req.username, &state.reserved);
    validation_response(&state, result)
}

/// E-mail validation request
#[derive(Deserialize)]
pub struct EmailRequest {
    pub email: String,
}

/// Validate an e-mail address for registration
async fn validate_email(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EmailRequest>,
) -> impl IntoResponse {
    let result = validation::validate_email(&req.email);
    validation_response(&state, result)
}

/// Validate listing text before it is stored
async fn validate_listing(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<ListingDraft>,
) -> impl IntoResponse {
    let result = draft.validate();
    state.stats.record_check(result.is_err());
    validation_response(&state, result)
}

fn validation_response(
    state: &AppState,
    result: Result<(), ValidationError>,
) -> (StatusCode, Json<serde_json::Value>) {
    match result {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({ "valid": true }))),
        Err(e) => {
            state.stats.record_rejection();
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({
                    "valid": false,
                    "code": e.code(),
                    "error": e.to_string(),
                })),
            )
        },
    }
}
