use serde::Serialize;

/// Where a like count was read from; sent as the `X-Data-Source` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CountSource {
    Cache,
    Store,
}

impl CountSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CountSource::Cache => "cache",
            CountSource::Store => "store",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LikeCount {
    pub count: u64,
    pub source: CountSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeToggle {
    Liked,
    Unliked,
}

impl LikeToggle {
    pub fn message(&self) -> &'static str {
        match self {
            LikeToggle::Liked => "Album Liked",
            LikeToggle::Unliked => "Album Unliked",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Inserted,
    Removed,
}

/// Receipt for a committed like-row write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeMutation {
    pub album_id: String,
    pub user_id: String,
    pub kind: MutationKind,
}

impl LikeMutation {
    pub fn toggle(&self) -> LikeToggle {
        match self.kind {
            MutationKind::Inserted => LikeToggle::Liked,
            MutationKind::Removed => LikeToggle::Unliked,
        }
    }
}

/// Cache key holding the decimal like count of an album.
pub fn like_key(album_id: &str) -> String {
    format!("like:{album_id}")
}
