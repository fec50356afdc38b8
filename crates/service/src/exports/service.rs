use std::sync::Arc;

use tracing::{info, instrument};

use super::channel::{DeliveryReceipt, MessageChannel};
use super::message::{publish, ExportPlaylistMessage};
use crate::errors::ServiceError;
use crate::playlists::PlaylistService;

pub struct ExportService {
    playlists: Arc<PlaylistService>,
    channel: Arc<dyn MessageChannel>,
}

impl ExportService {
    pub fn new(playlists: Arc<PlaylistService>, channel: Arc<dyn MessageChannel>) -> Self { Self { playlists, channel } }

    /// Queue an export of `playlist_id` to `target_email` for its owner.
    ///
    /// The receipt means the message was accepted, not that it was processed.
    #[instrument(skip(self), fields(routing_key = super::message::EXPORT_ROUTING_KEY))]
    pub async fn enqueue_export(
        &self,
        playlist_id: &str,
        target_email: &str,
        credential_id: &str,
    ) -> Result<DeliveryReceipt, ServiceError> {
        models::validation::validate_email(target_email)?;
        self.playlists.verify_playlist_owner(playlist_id, credential_id).await?;

        let message = ExportPlaylistMessage {
            playlist_id: playlist_id.to_string(),
            target_email: target_email.trim().to_string(),
        };
        let receipt = publish(self.channel.as_ref(), &message).await?;
        info!(playlist_id = %playlist_id, message_id = %receipt.message_id, "export_enqueued");
        Ok(receipt)
    }
}
