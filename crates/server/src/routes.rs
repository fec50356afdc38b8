use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::storage::cover::COVER_ROUTE;

use crate::middleware::require_bearer_token_state;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod albums;
pub mod authentications;
pub mod exports;
pub mod playlist_songs;
pub mod playlists;
pub mod songs;
pub mod uploads;
pub mod users;

/// Headroom for multipart framing on top of the cover size limit.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// `{status:"success", data}`
pub fn success<T: Serialize>(data: T) -> Json<Value> {
    Json(json!({"status": "success", "data": data}))
}

/// `{status:"success", message}`
pub fn message(msg: &str) -> Json<Value> {
    Json(json!({"status": "success", "message": msg}))
}

/// Build the full application router: public reads, protected writes,
/// static covers and API docs.
pub fn build_router(state: ServerState, cors: CorsLayer, uploads_dir: &str) -> Router {
    let cover_limit = state.covers.max_bytes() + MULTIPART_OVERHEAD;

    let public = Router::new()
        .route("/health", get(health))
        .route("/albums", post(albums::create))
        .route("/albums/:id", get(albums::get).put(albums::update).delete(albums::delete))
        .route("/albums/:id/likes", get(albums::get_likes))
        .route(
            "/albums/:id/covers",
            post(uploads::upload_cover).layer(DefaultBodyLimit::max(cover_limit)),
        )
        .route("/songs", post(songs::create).get(songs::list))
        .route("/songs/:id", get(songs::get).put(songs::update).delete(songs::delete))
        .route("/users", post(users::create))
        .route(
            "/authentications",
            post(authentications::login).put(authentications::refresh).delete(authentications::logout),
        );

    let protected = Router::new()
        .route("/albums/:id/likes", post(albums::toggle_like))
        .route("/playlists", post(playlists::create).get(playlists::list))
        .route("/playlists/:id", axum::routing::delete(playlists::delete))
        .route(
            "/playlists/:id/songs",
            post(playlist_songs::add).get(playlist_songs::list).delete(playlist_songs::remove),
        )
        .route("/export/playlists/:id", post(exports::export_playlist))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer_token_state));

    public
        .merge(protected)
        .nest_service(COVER_ROUTE, ServeDir::new(uploads_dir))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request carrying method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
