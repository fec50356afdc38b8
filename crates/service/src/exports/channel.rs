use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("channel unavailable: {0}")]
    Unavailable(String),
    #[error("message encoding failed: {0}")]
    Encode(String),
}

/// The channel accepted the message for delivery. It says nothing about
/// whether a consumer has processed it.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryReceipt {
    pub routing_key: String,
    pub message_id: Uuid,
    pub accepted_at: DateTime<Utc>,
}

impl DeliveryReceipt {
    fn accepted(routing_key: &str) -> Self {
        Self { routing_key: routing_key.to_string(), message_id: Uuid::new_v4(), accepted_at: Utc::now() }
    }
}

#[async_trait]
pub trait MessageChannel: Send + Sync {
    async fn send(&self, routing_key: &str, payload: Vec<u8>) -> Result<DeliveryReceipt, ChannelError>;
}

/// A message as it sits in the in-process queue.
#[derive(Debug, Clone)]
pub struct QueuedMessage {
    pub receipt: DeliveryReceipt,
    pub payload: Vec<u8>,
}

/// In-process broker over a bounded mpsc queue. Sending never waits: a full
/// or closed queue is reported as `Unavailable`.
#[derive(Clone)]
pub struct QueueChannel {
    tx: mpsc::Sender<QueuedMessage>,
}

impl QueueChannel {
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<QueuedMessage>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, rx)
    }
}

#[async_trait]
impl MessageChannel for QueueChannel {
    async fn send(&self, routing_key: &str, payload: Vec<u8>) -> Result<DeliveryReceipt, ChannelError> {
        let receipt = DeliveryReceipt::accepted(routing_key);
        self.tx
            .try_send(QueuedMessage { receipt: receipt.clone(), payload })
            .map_err(|e| match e {
                mpsc::error::TrySendError::Full(_) => ChannelError::Unavailable("queue is full".into()),
                mpsc::error::TrySendError::Closed(_) => ChannelError::Unavailable("queue is closed".into()),
            })?;
        Ok(receipt)
    }
}

/// Log every accepted message until all senders are dropped.
pub fn spawn_log_drain(mut rx: mpsc::Receiver<QueuedMessage>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            info!(
                routing_key = %msg.receipt.routing_key,
                message_id = %msg.receipt.message_id,
                payload = %String::from_utf8_lossy(&msg.payload),
                "export_message_drained"
            );
        }
    })
}

/// Records sent messages for tests
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct RecordingChannel {
        sent: Mutex<Vec<(String, Vec<u8>)>>,
        unavailable: AtomicBool,
    }

    impl RecordingChannel {
        pub fn sent(&self) -> Vec<(String, Vec<u8>)> { self.sent.lock().unwrap().clone() }

        pub fn set_unavailable(&self, on: bool) { self.unavailable.store(on, Ordering::SeqCst); }

        /// Sent payloads decoded as JSON.
        pub fn sent_json(&self) -> Vec<serde_json::Value> {
            self.sent().iter().filter_map(|(_, p)| serde_json::from_slice(p).ok()).collect()
        }
    }

    #[async_trait]
    impl MessageChannel for RecordingChannel {
        async fn send(&self, routing_key: &str, payload: Vec<u8>) -> Result<DeliveryReceipt, ChannelError> {
            if self.unavailable.load(Ordering::SeqCst) {
                return Err(ChannelError::Unavailable("recording channel switched off".into()));
            }
            self.sent.lock().unwrap().push((routing_key.to_string(), payload));
            Ok(DeliveryReceipt::accepted(routing_key))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn queue_hands_message_to_receiver() {
        let (channel, mut rx) = QueueChannel::new(4);
        let receipt = channel.send("export:songs", b"{}".to_vec()).await.unwrap();
        let queued = rx.recv().await.unwrap();
        assert_eq!(queued.receipt, receipt);
        assert_eq!(queued.payload, b"{}");
    }

    #[tokio::test]
    async fn full_queue_is_unavailable() {
        let (channel, _rx) = QueueChannel::new(1);
        channel.send("export:songs", vec![1]).await.unwrap();
        assert!(matches!(channel.send("export:songs", vec![2]).await, Err(ChannelError::Unavailable(_))));
    }

    #[tokio::test]
    async fn closed_queue_is_unavailable() {
        let (channel, rx) = QueueChannel::new(1);
        drop(rx);
        assert!(matches!(channel.send("export:songs", vec![1]).await, Err(ChannelError::Unavailable(_))));
    }
}
