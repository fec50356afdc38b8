use axum::{extract::{Request, State}, middleware::Next, response::Response};

use crate::errors::ApiError;
use crate::state::ServerState;

/// Verified caller, inserted into request extensions by
/// [`require_bearer_token_state`].
#[derive(Debug, Clone)]
pub struct Credential {
    pub id: String,
}

/// Route layer for protected endpoints: requires `Authorization: Bearer <access token>`.
/// Missing or invalid tokens are rejected with 401.
pub async fn require_bearer_token_state(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = req.uri().path().to_string();
    let token = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from);

    let Some(token) = token else {
        tracing::warn!(path = %path, "missing or malformed Authorization header");
        return Err(ApiError::unauthorized("Missing authentication"));
    };

    match state.tokens.verify_access_token(&token) {
        Ok(claims) => {
            req.extensions_mut().insert(Credential { id: claims.id });
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(path = %path, err = %e, "token validation failed");
            Err(ApiError::unauthorized("Invalid access token"))
        }
    }
}
