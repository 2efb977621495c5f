use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use picture_core::resolve_name;
use tokio_util::io::ReaderStream;

use crate::error::AppError;
use crate::state::AppState;

/// `GET /static/{name}`: serves a file from the configured static directory.
pub async fn static_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    let path = resolve_name(&state.config.assets.static_dir, &name)
        .ok_or_else(|| AppError::NotFound(format!("No such asset: {name}")))?;

    let file = tokio::fs::File::open(&path)
        .await
        .map_err(|_| AppError::NotFound(format!("No such asset: {name}")))?;

    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, mime.as_ref())],
        Body::from_stream(ReaderStream::new(file)),
    )
        .into_response())
}
