pub mod errors;
pub mod db;
pub mod ids;
pub mod validation;
pub mod user;
pub mod authentication;
pub mod album;
pub mod song;
pub mod playlist;
pub mod playlist_song;
pub mod user_album_like;

#[cfg(test)]
mod tests;
