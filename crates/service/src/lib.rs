//! Service layer for the music catalog.
//! - Repository traits separate business rules from persistence.
//! - sea-orm implementations live under each module's `repo::seaorm`.
//! - In-memory `repository::mock` implementations back unit and HTTP tests.

pub mod errors;
pub mod runtime;
pub mod cache;
pub mod albums;
pub mod songs;
pub mod likes;
pub mod playlists;
pub mod playlist_songs;
pub mod users;
pub mod auth;
pub mod exports;
pub mod storage;
#[cfg(test)]
pub mod test_support;
