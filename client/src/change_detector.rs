use waitline_shared::{ChangeCounter, ParticipantId, QueueState};

/// Edge-triggers call notifications out of full-state snapshots.
///
/// Each replica keeps one detector, local and unreplicated. A snapshot fires
/// iff its change counter differs from the last counter this detector fired
/// on and a called participant is recorded. The counter is remembered only
/// when firing, so redelivery of the same snapshot (at-least-once transport)
/// cannot fire twice for one call event.
///
/// Correctness relies on snapshots arriving in non-decreasing counter order,
/// which the channel's per-owner ordering provides. Cross-owner reordering
/// would be observable here; it is an accepted risk of the full-state
/// replication model.
pub struct ChangeDetector {
    last_known_counter: Option<ChangeCounter>,
}

impl Default for ChangeDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeDetector {
    pub fn new() -> Self {
        Self {
            last_known_counter: None,
        }
    }

    /// Inspects a received snapshot and returns the participant to notify,
    /// if this snapshot carries a call event not yet seen by this replica.
    pub fn observe(&mut self, snapshot: &QueueState) -> Option<ParticipantId> {
        if self.last_known_counter == Some(snapshot.change_counter()) {
            return None;
        }
        let target = snapshot.last_called()?;
        self.last_known_counter = Some(snapshot.change_counter());
        Some(target)
    }
}
