use thiserror::Error;

use crate::types::ParticipantId;

/// Precondition failures for queue mutations.
///
/// All of these are non-fatal: the mutation is a no-op and the replicated
/// state is left untouched. The session layer logs them and reports a plain
/// `false` to callers; they are returned as errors here so tests and callers
/// that care can observe exactly which guard rejected the operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    /// Participant is already present in the queue
    #[error("Participant {id} is already in the queue")]
    AlreadyQueued { id: ParticipantId },

    /// The queue holds `max_queue_size` entries and cannot accept another
    #[error("Queue is full ({capacity} entries)")]
    QueueFull { capacity: usize },

    /// Participant is not present in the queue
    #[error("Participant {id} is not in the queue")]
    NotQueued { id: ParticipantId },

    /// A join was attempted with an empty display name
    #[error("Display name must not be empty")]
    EmptyDisplayName,

    /// Advance was attempted on an empty queue
    #[error("Queue is empty, there is no participant to call forward")]
    QueueEmpty,

    /// Restore was attempted with no buffered removal to undo
    #[error("No removed participant is buffered to restore")]
    NothingToRestore,
}
