use axum::{extract::{Path, State}, http::StatusCode, Json};
use serde_json::{json, Value};

use service::songs::domain::{SongFilter, SongInput};

use crate::errors::ApiError;
use crate::extract::{AppJson, AppQuery};
use crate::routes::{message, success};
use crate::state::ServerState;

#[utoipa::path(post, path = "/songs", tag = "songs", request_body = crate::openapi::SongRequest, responses((status = 201, description = "Created"), (status = 400, description = "Bad Request")))]
pub async fn create(State(state): State<ServerState>, AppJson(input): AppJson<SongInput>) -> Result<(StatusCode, Json<Value>), ApiError> {
    let song_id = state.songs.add_song(input).await?;
    Ok((StatusCode::CREATED, success(json!({"songId": song_id}))))
}

#[utoipa::path(get, path = "/songs", tag = "songs", params(("title" = Option<String>, Query, description = "Title contains"), ("performer" = Option<String>, Query, description = "Performer contains")), responses((status = 200, description = "Song summaries")))]
pub async fn list(State(state): State<ServerState>, AppQuery(filter): AppQuery<SongFilter>) -> Result<Json<Value>, ApiError> {
    let songs = state.songs.get_songs(filter).await?;
    Ok(success(json!({"songs": songs})))
}

#[utoipa::path(get, path = "/songs/{id}", tag = "songs", params(("id" = String, Path, description = "Song id")), responses((status = 200, description = "Song"), (status = 404, description = "Not Found")))]
pub async fn get(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<Value>, ApiError> {
    let song = state.songs.get_song_by_id(&id).await?;
    Ok(success(json!({"song": song})))
}

#[utoipa::path(put, path = "/songs/{id}", tag = "songs", params(("id" = String, Path, description = "Song id")), request_body = crate::openapi::SongRequest, responses((status = 200, description = "Updated"), (status = 404, description = "Not Found")))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<SongInput>,
) -> Result<Json<Value>, ApiError> {
    state.songs.edit_song_by_id(&id, input).await?;
    Ok(message("Song updated"))
}

#[utoipa::path(delete, path = "/songs/{id}", tag = "songs", params(("id" = String, Path, description = "Song id")), responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<Value>, ApiError> {
    state.songs.delete_song_by_id(&id).await?;
    Ok(message("Song deleted"))
}
