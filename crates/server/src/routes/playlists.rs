use axum::{extract::{Extension, Path, State}, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::ApiError;
use crate::extract::AppJson;
use crate::middleware::Credential;
use crate::routes::{message, success};
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
pub struct PlaylistInput {
    pub name: String,
}

#[utoipa::path(post, path = "/playlists", tag = "playlists", request_body = crate::openapi::PlaylistRequest, responses((status = 201, description = "Created"), (status = 401, description = "Unauthorized")), security(("bearer" = [])))]
pub async fn create(
    State(state): State<ServerState>,
    Extension(cred): Extension<Credential>,
    AppJson(input): AppJson<PlaylistInput>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let playlist_id = state.playlists.add_playlist(&input.name, &cred.id).await?;
    Ok((StatusCode::CREATED, success(json!({"playlistId": playlist_id}))))
}

#[utoipa::path(get, path = "/playlists", tag = "playlists", responses((status = 200, description = "Caller's playlists")), security(("bearer" = [])))]
pub async fn list(State(state): State<ServerState>, Extension(cred): Extension<Credential>) -> Result<Json<Value>, ApiError> {
    let playlists = state.playlists.get_playlists(&cred.id).await?;
    Ok(success(json!({"playlists": playlists})))
}

#[utoipa::path(delete, path = "/playlists/{id}", tag = "playlists", params(("id" = String, Path, description = "Playlist id")), responses((status = 200, description = "Deleted"), (status = 403, description = "Forbidden"), (status = 404, description = "Not Found")), security(("bearer" = [])))]
pub async fn delete(
    State(state): State<ServerState>,
    Extension(cred): Extension<Credential>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.playlists.verify_playlist_owner(&id, &cred.id).await?;
    state.playlists.delete_playlist_by_id(&id).await?;
    Ok(message("Playlist deleted"))
}
