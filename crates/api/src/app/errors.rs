use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockyard_core::DomainError;
use stockyard_reports::RenderError;

/// Map a domain error to its HTTP representation.
///
/// The original reason travels verbatim in the message; nothing is wrapped
/// or dropped. `Busy` is the one retryable status.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let message = err.to_string();
    match err {
        DomainError::InvalidArgument(_) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_argument", message)
        }
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", message),
        DomainError::InsufficientStock { .. } => {
            json_error(StatusCode::CONFLICT, "insufficient_stock", message)
        }
        DomainError::Busy(_) => json_error(StatusCode::SERVICE_UNAVAILABLE, "busy", message),
        DomainError::CommitFailure(_) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "commit_failure", message)
        }
    }
}

pub fn render_error_to_response(err: RenderError) -> axum::response::Response {
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "render_error",
        err.to_string(),
    )
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
