use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::songs::domain::SongSummary;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub cover_url: Option<String>,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumInput {
    pub name: String,
    pub year: i32,
}

/// Album with its track list, as returned by `GET /albums/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct AlbumView {
    #[serde(flatten)]
    pub album: Album,
    pub songs: Vec<SongSummary>,
}

impl From<models::album::Model> for Album {
    fn from(m: models::album::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            year: m.year,
            cover_url: m.cover,
            inserted_at: m.created_at.with_timezone(&Utc),
            updated_at: m.updated_at.with_timezone(&Utc),
        }
    }
}
