use thiserror::Error;

use waitline_shared::QueueState;

/// Errors surfaced by the replication channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    /// The channel's arbitration refused to transfer ownership
    #[error("Ownership request was denied by the replication channel")]
    OwnershipDenied,

    /// A snapshot could not be handed to the channel for broadcast
    #[error("Failed to publish snapshot: {reason}")]
    PublishFailed { reason: &'static str },

    /// The channel is no longer connected to the session
    #[error("Replication channel is disconnected")]
    Disconnected,
}

/// The single-writer broadcast primitive the session replicates through.
///
/// Implementations are expected to provide, but the session does not verify:
/// - exactly one owner at any instant, arbitrated externally;
/// - at-least-once delivery of published snapshots to every replica,
///   including the publisher;
/// - per-owner ordering: one owner's successive snapshots are observed by
///   any one replica in publication order.
///
/// `request_ownership` is the only call that may block; everything else in
/// the session is synchronous once ownership is held.
pub trait ReplicationChannel {
    /// Whether this replica currently holds write ownership.
    fn is_owner(&self) -> bool;

    /// Blocks until this replica is the owner, or fails.
    ///
    /// An arbitration that never answers stalls the local mutation
    /// indefinitely; liveness is the channel's concern, not the session's.
    fn request_ownership(&mut self) -> Result<(), ChannelError>;

    /// Broadcasts the full state to every replica.
    fn publish(&mut self, snapshot: &QueueState) -> Result<(), ChannelError>;
}
