use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::domain::{Playlist, PlaylistView};
use super::repository::PlaylistRepository;
use crate::errors::ServiceError;
use crate::users::repository::UserRepository;

pub struct PlaylistService {
    repo: Arc<dyn PlaylistRepository>,
    users: Arc<dyn UserRepository>,
}

impl PlaylistService {
    pub fn new(repo: Arc<dyn PlaylistRepository>, users: Arc<dyn UserRepository>) -> Self { Self { repo, users } }

    #[instrument(skip(self))]
    pub async fn add_playlist(&self, name: &str, owner: &str) -> Result<String, ServiceError> {
        models::validation::require_non_empty("name", name)?;
        let playlist = self.repo.create(name, owner).await?;
        info!(playlist_id = %playlist.id, owner = %owner, "playlist_created");
        Ok(playlist.id)
    }

    pub async fn get_playlists(&self, owner: &str) -> Result<Vec<PlaylistView>, ServiceError> {
        let mut views = Vec::new();
        for playlist in self.repo.list_by_owner(owner).await? {
            views.push(self.view(playlist).await?);
        }
        Ok(views)
    }

    pub async fn get_playlist_by_id(&self, id: &str) -> Result<PlaylistView, ServiceError> {
        let playlist = self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("Playlist not found"))?;
        self.view(playlist).await
    }

    /// Fails with not-found for an unknown playlist and with an
    /// authorization error when `owner` did not create it.
    #[instrument(skip(self))]
    pub async fn verify_playlist_owner(&self, id: &str, owner: &str) -> Result<Playlist, ServiceError> {
        let playlist = self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("Playlist not found"))?;
        if playlist.owner != owner {
            warn!(playlist_id = %id, caller = %owner, "playlist_access_denied");
            return Err(ServiceError::Authorization("Not an Authorized User. Access Denied".into()));
        }
        Ok(playlist)
    }

    #[instrument(skip(self))]
    pub async fn delete_playlist_by_id(&self, id: &str) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("Failed Deleting Playlist. Id not found"));
        }
        info!(playlist_id = %id, "playlist_deleted");
        Ok(())
    }

    async fn view(&self, playlist: Playlist) -> Result<PlaylistView, ServiceError> {
        let username = self.users
            .find_by_id(&playlist.owner)
            .await?
            .map(|u| u.username)
            .ok_or_else(|| ServiceError::Internal(format!("owner {} of playlist {} is missing", playlist.owner, playlist.id)))?;
        Ok(PlaylistView { id: playlist.id, name: playlist.name, username })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playlists::repository::mock::MockPlaylistRepository;
    use crate::users::repository::mock::MockUserRepository;

    fn service() -> PlaylistService {
        let users = Arc::new(MockUserRepository::default());
        users.seed("user-1", "chris");
        users.seed("user-2", "will");
        PlaylistService::new(Arc::new(MockPlaylistRepository::default()), users)
    }

    #[tokio::test]
    async fn playlists_are_listed_per_owner_with_username() {
        let svc = service();
        let id = svc.add_playlist("Road trip", "user-1").await.unwrap();
        svc.add_playlist("Gym", "user-2").await.unwrap();

        let mine = svc.get_playlists("user-1").await.unwrap();
        assert_eq!(mine, vec![PlaylistView { id, name: "Road trip".into(), username: "chris".into() }]);
    }

    #[tokio::test]
    async fn ownership_is_enforced() {
        let svc = service();
        let id = svc.add_playlist("Road trip", "user-1").await.unwrap();
        assert!(svc.verify_playlist_owner(&id, "user-1").await.is_ok());

        let err = svc.verify_playlist_owner(&id, "user-2").await.unwrap_err();
        assert!(matches!(err, ServiceError::Authorization(_)));
        let err = svc.verify_playlist_owner("playlist-nope", "user-1").await.unwrap_err();
        assert_eq!(err.to_string(), "Playlist not found");
    }

    #[tokio::test]
    async fn delete_reports_missing_playlist() {
        let svc = service();
        let id = svc.add_playlist("Road trip", "user-1").await.unwrap();
        svc.delete_playlist_by_id(&id).await.unwrap();
        assert!(matches!(svc.delete_playlist_by_id(&id).await, Err(ServiceError::NotFound(_))));
    }
}
