use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use service::auth::domain::LoginInput;

use crate::errors::ApiError;
use crate::extract::AppJson;
use crate::routes::{message, success};
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenInput {
    pub refresh_token: String,
}

#[utoipa::path(post, path = "/authentications", tag = "auth", request_body = crate::openapi::LoginRequest, responses((status = 201, description = "Logged In"), (status = 401, description = "Unauthorized")))]
pub async fn login(State(state): State<ServerState>, AppJson(input): AppJson<LoginInput>) -> Result<(StatusCode, Json<Value>), ApiError> {
    let pair = state.auth.login(input).await?;
    Ok((StatusCode::CREATED, success(pair)))
}

#[utoipa::path(put, path = "/authentications", tag = "auth", request_body = crate::openapi::RefreshTokenRequest, responses((status = 200, description = "New access token"), (status = 400, description = "Invalid refresh token")))]
pub async fn refresh(State(state): State<ServerState>, AppJson(input): AppJson<RefreshTokenInput>) -> Result<Json<Value>, ApiError> {
    let access_token = state.auth.refresh(&input.refresh_token).await?;
    Ok(success(json!({"accessToken": access_token})))
}

#[utoipa::path(delete, path = "/authentications", tag = "auth", request_body = crate::openapi::RefreshTokenRequest, responses((status = 200, description = "Logged out"), (status = 400, description = "Unknown refresh token")))]
pub async fn logout(State(state): State<ServerState>, AppJson(input): AppJson<RefreshTokenInput>) -> Result<Json<Value>, ApiError> {
    state.auth.logout(&input.refresh_token).await?;
    Ok(message("Refresh token deleted"))
}
