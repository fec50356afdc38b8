use axum::{extract::{Extension, Path, State}, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::ApiError;
use crate::extract::AppJson;
use crate::middleware::Credential;
use crate::routes::message;
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportInput {
    #[serde(default)]
    pub target_email: String,
}

#[utoipa::path(post, path = "/export/playlists/{id}", tag = "exports", params(("id" = String, Path, description = "Playlist id")), request_body = crate::openapi::ExportRequest, responses((status = 201, description = "Queued"), (status = 400, description = "Bad Request"), (status = 403, description = "Forbidden"), (status = 404, description = "Not Found")), security(("bearer" = [])))]
pub async fn export_playlist(
    State(state): State<ServerState>,
    Extension(cred): Extension<Credential>,
    Path(id): Path<String>,
    AppJson(input): AppJson<ExportInput>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    state.exports.enqueue_export(&id, &input.target_email, &cred.id).await?;
    Ok((
        StatusCode::CREATED,
        message("Your request is in the queue. You will receive an email when your request is processed."),
    ))
}
