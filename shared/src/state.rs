use crate::types::{ChangeCounter, ParticipantId};

/// A single queued participant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueEntry {
    pub id: ParticipantId,
    pub display_name: String,
}

impl QueueEntry {
    pub fn new(id: ParticipantId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}

// QueueState

/// The authoritative, replicated aggregate.
///
/// Exactly one replica (the current owner) mutates a `QueueState`; everyone
/// else holds a read-only copy that is replaced wholesale whenever the owner
/// publishes. The aggregate is therefore a plain value type: it crosses the
/// replication boundary by clone, never by shared reference.
///
/// Invariants upheld by the mutation operations in `state_machine`:
/// - `entries` holds no duplicate participant ids and stays within capacity
/// - `change_counter` never decreases, and increments exactly once per
///   successful call-forward
/// - at most one removal is buffered in `last_removed` at a time
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueueState {
    pub(crate) entries: Vec<QueueEntry>,
    pub(crate) last_called: Option<ParticipantId>,
    pub(crate) change_counter: ChangeCounter,
    pub(crate) last_removed: Option<QueueEntry>,
}

impl QueueState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in FIFO order; index 0 is next to be called.
    pub fn entries(&self) -> &[QueueEntry] {
        &self.entries
    }

    /// The participant most recently called forward, if any.
    pub fn last_called(&self) -> Option<ParticipantId> {
        self.last_called
    }

    pub fn change_counter(&self) -> ChangeCounter {
        self.change_counter
    }

    /// The most recently removed entry, retained for a single-slot undo.
    pub fn last_removed(&self) -> Option<&QueueEntry> {
        self.last_removed.as_ref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: ParticipantId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn index_of(&self, id: ParticipantId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// 1-based queue position of a participant; 0 means "not queued".
    pub fn position_of(&self, id: ParticipantId) -> usize {
        match self.index_of(id) {
            Some(index) => index + 1,
            None => 0,
        }
    }
}
