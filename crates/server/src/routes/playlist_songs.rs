use axum::{extract::{Extension, Path, State}, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::ApiError;
use crate::extract::AppJson;
use crate::middleware::Credential;
use crate::routes::{message, success};
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSongInput {
    pub song_id: String,
}

#[utoipa::path(post, path = "/playlists/{id}/songs", tag = "playlists", params(("id" = String, Path, description = "Playlist id")), request_body = crate::openapi::PlaylistSongRequest, responses((status = 201, description = "Added"), (status = 403, description = "Forbidden"), (status = 404, description = "Not Found")), security(("bearer" = [])))]
pub async fn add(
    State(state): State<ServerState>,
    Extension(cred): Extension<Credential>,
    Path(id): Path<String>,
    AppJson(input): AppJson<PlaylistSongInput>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    state.playlists.verify_playlist_owner(&id, &cred.id).await?;
    state.playlist_songs.add_song_to_playlist(&id, &input.song_id).await?;
    Ok((StatusCode::CREATED, message("Song added to playlist")))
}

#[utoipa::path(get, path = "/playlists/{id}/songs", tag = "playlists", params(("id" = String, Path, description = "Playlist id")), responses((status = 200, description = "Playlist with songs"), (status = 403, description = "Forbidden")), security(("bearer" = [])))]
pub async fn list(
    State(state): State<ServerState>,
    Extension(cred): Extension<Credential>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.playlists.verify_playlist_owner(&id, &cred.id).await?;
    let playlist = state.playlists.get_playlist_by_id(&id).await?;
    let songs = state.playlist_songs.get_songs_by_playlist(&id).await?;
    Ok(success(json!({"playlist": {
        "id": playlist.id,
        "name": playlist.name,
        "username": playlist.username,
        "songs": songs,
    }})))
}

#[utoipa::path(delete, path = "/playlists/{id}/songs", tag = "playlists", params(("id" = String, Path, description = "Playlist id")), request_body = crate::openapi::PlaylistSongRequest, responses((status = 200, description = "Removed"), (status = 404, description = "Not Found")), security(("bearer" = [])))]
pub async fn remove(
    State(state): State<ServerState>,
    Extension(cred): Extension<Credential>,
    Path(id): Path<String>,
    AppJson(input): AppJson<PlaylistSongInput>,
) -> Result<Json<Value>, ApiError> {
    state.playlists.verify_playlist_owner(&id, &cred.id).await?;
    state.playlist_songs.delete_song_from_playlist(&id, &input.song_id).await?;
    Ok(message("Song removed from playlist"))
}
