use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::{
    albums::{repo::seaorm::SeaOrmAlbumRepository, repository::AlbumRepository, AlbumService},
    auth::{repo::seaorm::SeaOrmAuthenticationRepository, repository::AuthenticationRepository, AuthService, TokenManager},
    cache::CacheStore,
    exports::{ExportService, MessageChannel},
    likes::{repo::seaorm::SeaOrmLikeRepository, repository::LikeRepository, LikeService},
    playlist_songs::{repo::seaorm::SeaOrmPlaylistSongRepository, repository::PlaylistSongRepository, PlaylistSongService},
    playlists::{repo::seaorm::SeaOrmPlaylistRepository, repository::PlaylistRepository, PlaylistService},
    songs::{repo::seaorm::SeaOrmSongRepository, repository::SongRepository, SongService},
    storage::{CoverService, FileStorage},
    users::{repo::seaorm::SeaOrmUserRepository, repository::UserRepository, UserService},
};

/// Persistence behind every service.
#[derive(Clone)]
pub struct Repositories {
    pub albums: Arc<dyn AlbumRepository>,
    pub songs: Arc<dyn SongRepository>,
    pub likes: Arc<dyn LikeRepository>,
    pub playlists: Arc<dyn PlaylistRepository>,
    pub playlist_songs: Arc<dyn PlaylistSongRepository>,
    pub users: Arc<dyn UserRepository>,
    pub authentications: Arc<dyn AuthenticationRepository>,
}

impl Repositories {
    pub fn seaorm(db: DatabaseConnection) -> Self {
        Self {
            albums: Arc::new(SeaOrmAlbumRepository { db: db.clone() }),
            songs: Arc::new(SeaOrmSongRepository { db: db.clone() }),
            likes: Arc::new(SeaOrmLikeRepository { db: db.clone() }),
            playlists: Arc::new(SeaOrmPlaylistRepository { db: db.clone() }),
            playlist_songs: Arc::new(SeaOrmPlaylistSongRepository { db: db.clone() }),
            users: Arc::new(SeaOrmUserRepository { db: db.clone() }),
            authentications: Arc::new(SeaOrmAuthenticationRepository { db }),
        }
    }
}

/// Outbound adapters: cache, message channel, file storage.
#[derive(Clone)]
pub struct Adapters {
    pub cache: Arc<dyn CacheStore>,
    pub channel: Arc<dyn MessageChannel>,
    pub storage: Arc<dyn FileStorage>,
}

#[derive(Clone)]
pub struct ServerState {
    pub albums: Arc<AlbumService>,
    pub songs: Arc<SongService>,
    pub likes: Arc<LikeService>,
    pub playlists: Arc<PlaylistService>,
    pub playlist_songs: Arc<PlaylistSongService>,
    pub users: Arc<UserService>,
    pub auth: Arc<AuthService>,
    pub exports: Arc<ExportService>,
    pub covers: Arc<CoverService>,
    pub tokens: Arc<TokenManager>,
}

impl ServerState {
    pub fn build(repos: Repositories, adapters: Adapters, cfg: &configs::AppConfig) -> Self {
        let tokens = Arc::new(TokenManager::new(&cfg.auth));
        let users = Arc::new(UserService::new(repos.users.clone()));
        let playlists = Arc::new(PlaylistService::new(repos.playlists.clone(), repos.users.clone()));
        Self {
            albums: Arc::new(AlbumService::new(repos.albums.clone(), repos.songs.clone())),
            songs: Arc::new(SongService::new(repos.songs.clone(), repos.albums.clone())),
            likes: Arc::new(LikeService::new(repos.albums.clone(), repos.likes.clone(), adapters.cache)),
            playlist_songs: Arc::new(PlaylistSongService::new(repos.playlist_songs.clone(), repos.songs.clone())),
            auth: Arc::new(AuthService::new(repos.authentications.clone(), users.clone(), tokens.clone())),
            exports: Arc::new(ExportService::new(playlists.clone(), adapters.channel)),
            covers: Arc::new(CoverService::new(adapters.storage, repos.albums.clone(), &cfg.uploads)),
            playlists,
            users,
            tokens,
        }
    }
}
