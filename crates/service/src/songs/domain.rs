use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub performer: String,
    pub duration: Option<i32>,
    pub album_id: Option<String>,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongInput {
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub performer: String,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub album_id: Option<String>,
}

/// List projection used by `GET /songs`, album views and playlists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SongSummary {
    pub id: String,
    pub title: String,
    pub performer: String,
}

/// Optional case-insensitive substring filters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SongFilter {
    pub title: Option<String>,
    pub performer: Option<String>,
}

impl SongFilter {
    pub fn matches(&self, song: &Song) -> bool {
        fn contains(hay: &str, needle: &Option<String>) -> bool {
            needle.as_ref().map_or(true, |n| hay.to_lowercase().contains(&n.to_lowercase()))
        }
        contains(&song.title, &self.title) && contains(&song.performer, &self.performer)
    }
}

impl From<Song> for SongSummary {
    fn from(s: Song) -> Self { Self { id: s.id, title: s.title, performer: s.performer } }
}

impl From<&SongInput> for models::song::SongFields {
    fn from(i: &SongInput) -> Self {
        Self {
            title: i.title.clone(),
            year: i.year,
            genre: i.genre.clone(),
            performer: i.performer.clone(),
            duration: i.duration,
            album_id: i.album_id.clone(),
        }
    }
}

impl From<models::song::Model> for Song {
    fn from(m: models::song::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            year: m.year,
            genre: m.genre,
            performer: m.performer,
            duration: m.duration,
            album_id: m.album_id,
            inserted_at: m.created_at.with_timezone(&Utc),
            updated_at: m.updated_at.with_timezone(&Utc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_is_case_insensitive_substring() {
        let now = Utc::now();
        let song = Song {
            id: "song-1".into(),
            title: "Fix You".into(),
            year: 2005,
            genre: "Rock".into(),
            performer: "Coldplay".into(),
            duration: None,
            album_id: None,
            inserted_at: now,
            updated_at: now,
        };
        assert!(SongFilter::default().matches(&song));
        assert!(SongFilter { title: Some("fix".into()), performer: None }.matches(&song));
        assert!(SongFilter { title: Some("YOU".into()), performer: Some("cold".into()) }.matches(&song));
        assert!(!SongFilter { title: None, performer: Some("muse".into()) }.matches(&song));
    }
}
