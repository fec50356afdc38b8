use serde::{Deserialize, Serialize};

use super::channel::{ChannelError, DeliveryReceipt, MessageChannel};

pub const EXPORT_ROUTING_KEY: &str = "export:songs";

/// A typed message bound to a fixed routing key.
pub trait OutboundMessage: Serialize {
    const ROUTING_KEY: &'static str;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportPlaylistMessage {
    pub playlist_id: String,
    pub target_email: String,
}

impl OutboundMessage for ExportPlaylistMessage {
    const ROUTING_KEY: &'static str = EXPORT_ROUTING_KEY;
}

/// Serialize `message` as JSON and send it once on its routing key.
pub async fn publish<M: OutboundMessage + Sync>(
    channel: &dyn MessageChannel,
    message: &M,
) -> Result<DeliveryReceipt, ChannelError> {
    let payload = serde_json::to_vec(message).map_err(|e| ChannelError::Encode(e.to_string()))?;
    channel.send(M::ROUTING_KEY, payload).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_is_camel_case() {
        let msg = ExportPlaylistMessage { playlist_id: "playlist-1".into(), target_email: "a@b.co".into() };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json, serde_json::json!({"playlistId": "playlist-1", "targetEmail": "a@b.co"}));
    }
}
