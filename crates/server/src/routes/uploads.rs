use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::errors::ApiError;
use crate::routes::message;
use crate::state::ServerState;

/// Multipart field carrying the cover image.
const COVER_FIELD: &str = "cover";

#[utoipa::path(post, path = "/albums/{id}/covers", tag = "albums", params(("id" = String, Path, description = "Album id")), request_body(content = String, content_type = "multipart/form-data", description = "form field `cover`"), responses((status = 201, description = "Uploaded"), (status = 400, description = "Bad Request"), (status = 404, description = "Not Found"), (status = 413, description = "Payload Too Large")))]
pub async fn upload_cover(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(COVER_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("cover").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;
        state.covers.upload_album_cover(&id, &file_name, content_type.as_deref(), &bytes).await?;
        return Ok((StatusCode::CREATED, message("Album Cover Successfully Uploaded")));
    }
    Err(ApiError::bad_request("\"cover\" is required"))
}
