//! Playlist export requests.
//!
//! A caller who owns a playlist can ask for its songs to be mailed to an
//! address. The request is published once on [`message::EXPORT_ROUTING_KEY`]
//! and answered without waiting for the consumer.

pub mod message;
pub mod channel;
pub mod service;

pub use channel::{ChannelError, DeliveryReceipt, MessageChannel, QueueChannel};
pub use message::{ExportPlaylistMessage, OutboundMessage, EXPORT_ROUTING_KEY};
pub use service::ExportService;
