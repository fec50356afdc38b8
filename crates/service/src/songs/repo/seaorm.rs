use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::errors::ServiceError;
use crate::songs::domain::{Song, SongFilter, SongInput};
use crate::songs::repository::SongRepository;
use models::song::{Column, Entity};

pub struct SeaOrmSongRepository {
    pub db: DatabaseConnection,
}

/// `%`, `_` and `\\` in the needle match literally, as in the in-memory filter.
fn escape_like(needle: &str) -> String {
    let mut out = String::with_capacity(needle.len());
    for c in needle.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn lower_like(col: Column, needle: &str) -> sea_orm::sea_query::SimpleExpr {
    let pattern = format!("%{}%", escape_like(needle));
    Expr::expr(Func::lower(Expr::col(col))).like(LikeExpr::new(pattern).escape('\\'))
}

#[async_trait::async_trait]
impl SongRepository for SeaOrmSongRepository {
    async fn create(&self, input: &SongInput) -> Result<Song, ServiceError> {
        let created = models::song::create(&self.db, input.into()).await?;
        Ok(created.into())
    }

    async fn list(&self, filter: &SongFilter) -> Result<Vec<Song>, ServiceError> {
        let mut query = Entity::find().order_by_asc(Column::CreatedAt);
        if let Some(title) = filter.title.as_deref().filter(|t| !t.is_empty()) {
            query = query.filter(lower_like(Column::Title, title));
        }
        if let Some(performer) = filter.performer.as_deref().filter(|p| !p.is_empty()) {
            query = query.filter(lower_like(Column::Performer, performer));
        }
        let rows = query.all(&self.db).await?;
        Ok(rows.into_iter().map(Song::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Song>, ServiceError> {
        Ok(Entity::find_by_id(id.to_string()).one(&self.db).await?.map(Song::from))
    }

    async fn find_by_album(&self, album_id: &str) -> Result<Vec<Song>, ServiceError> {
        let rows = Entity::find()
            .filter(Column::AlbumId.eq(album_id))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Song::from).collect())
    }

    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<Song>, ServiceError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = Entity::find()
            .filter(Column::Id.is_in(ids.iter().cloned()))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Song::from).collect())
    }

    async fn update(&self, id: &str, input: &SongInput) -> Result<Option<Song>, ServiceError> {
        Ok(models::song::update(&self.db, id, input.into()).await?.map(Song::from))
    }

    async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
        let res = Entity::delete_by_id(id.to_string()).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(escape_like("100%_Pure\\"), "100\\%\\_pure\\\\");
        assert_eq!(escape_like("Yellow"), "yellow");
    }

    #[tokio::test]
    async fn percent_in_title_matches_literally() {
        let Some(db) = get_db().await else { return };
        let repo = SeaOrmSongRepository { db };
        let marker = models::ids::new_id("w");
        let created = repo.create(&SongInput {
            title: format!("Fix You {marker}"),
            year: 2005,
            genre: "Rock".into(),
            performer: "Coldplay".into(),
            duration: None,
            album_id: None,
        }).await.unwrap();

        let wildcard = SongFilter { title: Some(format!("{marker}%")), performer: None };
        assert!(repo.list(&wildcard).await.unwrap().is_empty());
        let bare = SongFilter { title: Some("%".into()), performer: Some("coldplay".into()) };
        assert!(repo.list(&bare).await.unwrap().iter().all(|s| s.id != created.id));
        assert!(repo.delete(&created.id).await.unwrap());
    }

    #[tokio::test]
    async fn title_filter_ignores_case() {
        let Some(db) = get_db().await else { return };
        let repo = SeaOrmSongRepository { db };
        let marker = models::ids::new_id("t");
        let created = repo.create(&SongInput {
            title: format!("Yellow {marker}"),
            year: 2000,
            genre: "Rock".into(),
            performer: "Coldplay".into(),
            duration: Some(266),
            album_id: None,
        }).await.unwrap();

        let filter = SongFilter { title: Some(format!("YELLOW {}", marker.to_uppercase())), performer: None };
        let found = repo.list(&filter).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, created.id);
        assert!(repo.delete(&created.id).await.unwrap());
    }
}
