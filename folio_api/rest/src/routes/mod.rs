use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{ApiError, ApiStatus};

pub mod contact;
pub mod health;
pub mod resume;

pub fn ok() -> Response {
    Json(ApiStatus { ok: true }).into_response()
}

pub fn error(code: StatusCode, message: impl Into<String>) -> Response {
    (
        code,
        Json(ApiError {
            ok: false,
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}
