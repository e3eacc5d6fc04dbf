//! Error bodies shared by the HTTP adapters.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::intake::{template_text, Locale};

/// Standard error response. `error` is localized text safe to show the rider.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub code: String,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, error: impl Into<String>) -> Self {
        Self {
            ok: false,
            code: code.to_string(),
            error: error.into(),
        }
    }

    /// The message field was missing, not a string or blank.
    pub fn message_required(locale: Locale) -> Self {
        Self::new(
            ErrorCode::ValidationFailed,
            template_text("error.messageRequired", locale),
        )
    }

    pub fn profile_not_found(locale: Locale) -> Self {
        Self::new(
            ErrorCode::ProfileNotFound,
            template_text("error.profileNotFound", locale),
        )
    }

    pub fn internal(locale: Locale) -> Self {
        Self::new(
            ErrorCode::InternalError,
            template_text("error.internal", locale),
        )
    }
}

/// Maps a domain error to a status and localized body. Internal details are
/// logged, never returned.
pub fn domain_error_response(error: &DomainError, locale: Locale) -> Response {
    match error.code {
        code if code.is_validation() => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::message_required(locale)),
        )
            .into_response(),
        ErrorCode::ProfileNotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::profile_not_found(locale)),
        )
            .into_response(),
        _ => {
            tracing::error!(code = %error.code, "Request failed: {}", error.message());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(locale)),
            )
                .into_response()
        }
    }
}
