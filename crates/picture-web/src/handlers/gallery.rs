use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use crate::error::AppError;
use crate::state::AppState;
use crate::templates::Template;

/// `GET /`: every stored image, newest first.
pub async fn index(State(state): State<AppState>) -> Result<Response, AppError> {
    let store = state.store.clone();
    let images = tokio::task::spawn_blocking(move || store.list()).await?;
    tracing::debug!("listing {} images", images.len());
    Ok(Template::Gallery { images: &images }.into_response())
}

/// `GET /preview/{name}`: does not check that the image exists.
pub async fn preview(Path(name): Path<String>) -> Response {
    Template::Preview { name: &name }.into_response()
}
