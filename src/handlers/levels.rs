use axum::response::Html;

use crate::{
    fault,
    severity::{self, Severity},
};

pub const INFO_MESSAGE: &str = "This is a Info log";
pub const ERROR_MESSAGE: &str = "This is an Error log";
pub const CRITICAL_MESSAGE: &str = "This is a Critical log";
pub const EXCEPTION_MESSAGE: &str = "Unexpected error occurred";

// ── Plain severities ──────────────────────────────────────────────────────────

pub async fn info() -> Html<&'static str> {
    severity::emit(Severity::Info, INFO_MESSAGE);
    Html("<p>Hello Info</p>")
}

pub async fn error() -> Html<&'static str> {
    severity::emit(Severity::Error, ERROR_MESSAGE);
    Html("<p>Hello Error</p>")
}

pub async fn critical() -> Html<&'static str> {
    severity::emit(Severity::Critical, CRITICAL_MESSAGE);
    Html("<p>Hello Critical</p>")
}

// ── Caught failure ────────────────────────────────────────────────────────────

/// Always divides by zero; whatever comes back out is logged, never returned.
pub async fn exception() -> Html<&'static str> {
    if let Err(err) = fault::catch_any(|| fault::divide(1, 0)) {
        severity::emit_exception(EXCEPTION_MESSAGE, &err);
    }
    Html("<p>Hello Exception</p>")
}
