use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{files, gallery, upload};
use crate::middleware::security_headers::security_headers;
use crate::state::AppState;
use crate::static_files::static_handler;

pub fn router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes();

    Router::new()
        .route("/", get(gallery::index))
        .route("/upload", get(upload::upload_form).post(upload::upload_file))
        .route("/preview/{name}", get(gallery::preview))
        .route("/download/{name}", get(files::download))
        .route("/static/{name}", get(static_handler))
        .layer(from_fn(security_headers))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
