use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    /// user id of the creator
    pub owner: String,
}

/// Playlist with the owner's username resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaylistView {
    pub id: String,
    pub name: String,
    pub username: String,
}

impl From<models::playlist::Model> for Playlist {
    fn from(m: models::playlist::Model) -> Self { Self { id: m.id, name: m.name, owner: m.owner } }
}
