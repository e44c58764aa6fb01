use thiserror::Error;

use crate::channel::ChannelError;

/// Failures of the session's mutating entry points.
///
/// Guard violations are deliberately absent here: they are non-fatal and
/// reported as an `Ok(false)` by the session, per the queue's failure
/// semantics. A `SessionError` means the mutation never reached the
/// replicated state at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The host platform has not yet assigned a local participant identity;
    /// the surrounding runtime should retry once identity is available
    #[error("Local participant identity is not yet available")]
    IdentityUnavailable,

    /// The replication channel failed before the mutation was serialized
    #[error(transparent)]
    Channel(#[from] ChannelError),
}
