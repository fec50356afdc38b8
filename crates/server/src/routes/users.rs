use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use service::users::domain::RegisterInput;

use crate::errors::ApiError;
use crate::extract::AppJson;
use crate::routes::success;
use crate::state::ServerState;

#[utoipa::path(post, path = "/users", tag = "users", request_body = crate::openapi::RegisterRequest, responses((status = 201, description = "Registered"), (status = 400, description = "Bad Request")))]
pub async fn create(State(state): State<ServerState>, AppJson(input): AppJson<RegisterInput>) -> Result<(StatusCode, Json<Value>), ApiError> {
    let user_id = state.users.add_user(input).await?;
    Ok((StatusCode::CREATED, success(json!({"userId": user_id}))))
}
