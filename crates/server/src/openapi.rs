use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use serde::Serialize;
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct AlbumRequest { pub name: String, pub year: i32 }

#[derive(ToSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongRequest {
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub performer: String,
    pub duration: Option<i32>,
    pub album_id: Option<String>,
}

#[derive(ToSchema)]
pub struct RegisterRequest { pub username: String, pub password: String, pub fullname: String }

#[derive(ToSchema)]
pub struct LoginRequest { pub username: String, pub password: String }

#[derive(ToSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest { pub refresh_token: String }

#[derive(ToSchema)]
pub struct PlaylistRequest { pub name: String }

#[derive(ToSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSongRequest { pub song_id: String }

#[derive(ToSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest { pub target_email: String }

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build()),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::albums::create,
        crate::routes::albums::get,
        crate::routes::albums::update,
        crate::routes::albums::delete,
        crate::routes::albums::get_likes,
        crate::routes::albums::toggle_like,
        crate::routes::uploads::upload_cover,
        crate::routes::songs::create,
        crate::routes::songs::list,
        crate::routes::songs::get,
        crate::routes::songs::update,
        crate::routes::songs::delete,
        crate::routes::users::create,
        crate::routes::authentications::login,
        crate::routes::authentications::refresh,
        crate::routes::authentications::logout,
        crate::routes::playlists::create,
        crate::routes::playlists::list,
        crate::routes::playlists::delete,
        crate::routes::playlist_songs::add,
        crate::routes::playlist_songs::list,
        crate::routes::playlist_songs::remove,
        crate::routes::exports::export_playlist,
    ),
    components(
        schemas(
            HealthResponse,
            AlbumRequest,
            SongRequest,
            RegisterRequest,
            LoginRequest,
            RefreshTokenRequest,
            PlaylistRequest,
            PlaylistSongRequest,
            ExportRequest,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health"),
        (name = "albums"),
        (name = "likes"),
        (name = "songs"),
        (name = "users"),
        (name = "auth"),
        (name = "playlists"),
        (name = "exports")
    )
)]
pub struct ApiDoc;
