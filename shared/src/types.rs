use std::fmt;

/// Counter incremented exactly once per call-forward event, used by replicas
/// to edge-trigger notifications out of full-state snapshots.
pub type ChangeCounter = u32;

/// Stable integer identifier the host platform assigns to each connected
/// participant for the lifetime of their session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(pub i32);

impl From<i32> for ParticipantId {
    fn from(value: i32) -> Self {
        ParticipantId(value)
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
