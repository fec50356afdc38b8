//! Songs attached to playlists.

pub mod repository;
pub mod repo;
pub mod service;

pub use service::PlaylistSongService;
