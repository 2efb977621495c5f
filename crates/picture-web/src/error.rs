use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use maud::html;
use picture_core::CoreError;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Client(StatusCode, String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Client(status, msg) => (status, msg),
            AppError::Internal(msg) => {
                // Log the real error server-side, return generic message to client
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = html! {
            h1 { (status.as_u16()) " " (status.canonical_reason().unwrap_or_default()) }
            p { (message) }
        };

        (status, Html(body.into_string())).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::NotFound(path) => {
                AppError::Internal(format!("storage directory missing: {}", path.display()))
            }
            e if e.is_invalid_upload() => AppError::Client(StatusCode::BAD_REQUEST, e.to_string()),
            e => AppError::Internal(e.to_string()),
        }
    }
}

impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(e: axum::extract::multipart::MultipartError) -> Self {
        AppError::Client(e.status(), e.body_text())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(e: tokio::task::JoinError) -> Self {
        AppError::Internal(format!("blocking task failed: {e}"))
    }
}
