use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};

use service::albums::domain::AlbumInput;

use crate::errors::ApiError;
use crate::extract::AppJson;
use crate::middleware::Credential;
use crate::routes::{message, success};
use crate::state::ServerState;

/// Response header naming where a like count was read from.
pub const DATA_SOURCE_HEADER: &str = "x-data-source";

#[utoipa::path(post, path = "/albums", tag = "albums", request_body = crate::openapi::AlbumRequest, responses((status = 201, description = "Created"), (status = 400, description = "Bad Request")))]
pub async fn create(State(state): State<ServerState>, AppJson(input): AppJson<AlbumInput>) -> Result<(StatusCode, Json<Value>), ApiError> {
    let album_id = state.albums.add_album(input).await?;
    Ok((StatusCode::CREATED, success(json!({"albumId": album_id}))))
}

#[utoipa::path(get, path = "/albums/{id}", tag = "albums", params(("id" = String, Path, description = "Album id")), responses((status = 200, description = "Album with songs"), (status = 404, description = "Not Found")))]
pub async fn get(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<Value>, ApiError> {
    let album = state.albums.get_album_by_id(&id).await?;
    Ok(success(json!({"album": album})))
}

#[utoipa::path(put, path = "/albums/{id}", tag = "albums", params(("id" = String, Path, description = "Album id")), request_body = crate::openapi::AlbumRequest, responses((status = 200, description = "Updated"), (status = 404, description = "Not Found")))]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<AlbumInput>,
) -> Result<Json<Value>, ApiError> {
    state.albums.edit_album_by_id(&id, input).await?;
    Ok(message("Album updated"))
}

#[utoipa::path(delete, path = "/albums/{id}", tag = "albums", params(("id" = String, Path, description = "Album id")), responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<Value>, ApiError> {
    state.albums.delete_album_by_id(&id).await?;
    Ok(message("Album deleted"))
}

#[utoipa::path(get, path = "/albums/{id}/likes", tag = "likes", params(("id" = String, Path, description = "Album id")), responses((status = 200, description = "Like count; X-Data-Source tells cache or store")))]
pub async fn get_likes(State(state): State<ServerState>, Path(id): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let likes = state.likes.get_like_count(&id).await?;
    Ok(([(DATA_SOURCE_HEADER, likes.source.as_str())], success(json!({"likes": likes.count}))))
}

#[utoipa::path(post, path = "/albums/{id}/likes", tag = "likes", params(("id" = String, Path, description = "Album id")), responses((status = 201, description = "Liked or unliked"), (status = 401, description = "Unauthorized"), (status = 404, description = "Not Found")), security(("bearer" = [])))]
pub async fn toggle_like(
    State(state): State<ServerState>,
    Extension(cred): Extension<Credential>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let outcome = state.likes.toggle_like(&id, &cred.id).await?;
    Ok((StatusCode::CREATED, message(outcome.message())))
}
