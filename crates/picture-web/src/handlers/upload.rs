use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use picture_core::UploadedFile;

use crate::error::AppError;
use crate::state::AppState;
use crate::templates::Template;

const UPLOAD_PROMPT: &str = "Upload your photos.";
const INVALID_UPLOAD: &str = "No valid image file provided";

/// Name of the multipart field carrying the image.
const FILE_FIELD: &str = "file";

/// `GET /upload`
pub async fn upload_form() -> Response {
    Template::Message {
        message: UPLOAD_PROMPT,
    }
    .into_response()
}

/// `POST /upload`: stores the `file` field and redirects to the gallery.
///
/// Invalid uploads (no file field, empty name, not an image) render a
/// message page instead and write nothing.
pub async fn upload_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, AppError> {
    let upload = match multipart {
        Ok(multipart) => read_file_field(multipart).await?,
        Err(rejection) => {
            tracing::warn!("Upload without multipart body: {rejection}");
            None
        }
    };

    let store = state.store.clone();
    let result = tokio::task::spawn_blocking(move || store.save(upload.as_ref())).await?;

    match result {
        Ok(_) => Ok((StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()),
        Err(e) if e.is_invalid_upload() => {
            tracing::warn!("Rejected upload: {e}");
            Ok(Template::Message {
                message: INVALID_UPLOAD,
            }
            .into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Returns the first `file` field, skipping any other form fields.
async fn read_file_field(mut multipart: Multipart) -> Result<Option<UploadedFile>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let data = field.bytes().await?;
        return Ok(Some(UploadedFile {
            file_name,
            data: Vec::from(data),
        }));
    }
    Ok(None)
}
