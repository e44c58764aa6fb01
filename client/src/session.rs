use log::{info, warn};

use waitline_shared::{
    project, ButtonLabel, GuardError, ParticipantId, QueueConfig, QueueState, ToggleOutcome,
};

use crate::{
    change_detector::ChangeDetector,
    channel::ReplicationChannel,
    error::SessionError,
    sinks::{DisplaySink, NotificationSink},
};

/// The local participant's identity, as handed out by the host platform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalParticipant {
    pub id: ParticipantId,
    pub display_name: String,
}

/// One replica's view of the shared queue.
///
/// Every client in the session runs one `QueueSession`. The session holds a
/// read-only copy of the replicated state, replaced wholesale whenever a
/// snapshot arrives; mutations go through the acquire-then-mutate path,
/// which makes this replica the owner first, applies the operation, and
/// publishes the resulting snapshot to everyone, itself included.
///
/// The session is single-threaded by contract: mutations and snapshot
/// handling run to completion before the next event, so the replica copy is
/// never observed mid-mutation. Serialization of writers across clients is
/// the channel's arbitration, not anything done here.
pub struct QueueSession<C, D, N> {
    config: QueueConfig,
    channel: C,
    display: D,
    notifier: N,
    local: Option<LocalParticipant>,
    replica: QueueState,
    detector: ChangeDetector,
}

impl<C, D, N> QueueSession<C, D, N>
where
    C: ReplicationChannel,
    D: DisplaySink,
    N: NotificationSink,
{
    pub fn new(config: QueueConfig, channel: C, display: D, notifier: N) -> Self {
        Self {
            config,
            channel,
            display,
            notifier,
            local: None,
            replica: QueueState::new(),
            detector: ChangeDetector::new(),
        }
    }

    /// Assigns the local participant identity and renders the current state.
    ///
    /// Until this is called every mutating entry point fails with
    /// [`SessionError::IdentityUnavailable`].
    pub fn set_local_participant(&mut self, id: ParticipantId, display_name: impl Into<String>) {
        let display_name = display_name.into();
        info!("local participant assigned: {} ({})", display_name, id);
        self.local = Some(LocalParticipant { id, display_name });
        self.render();
    }

    pub fn local_participant(&self) -> Option<&LocalParticipant> {
        self.local.as_ref()
    }

    // Mutating entry points. Each acquires ownership once, applies one
    // state-machine operation, and publishes on success. Guard violations
    // come back as Ok(false).

    /// Adds the local participant at the tail of the queue.
    pub fn join(&mut self) -> Result<bool, SessionError> {
        let local = self.require_identity()?;
        self.mutate(move |state, config| state.join(local.id, &local.display_name, config))
    }

    /// Removes the local participant from the queue.
    pub fn leave(&mut self) -> Result<bool, SessionError> {
        let local = self.require_identity()?;
        self.mutate(move |state, _| state.leave(local.id))
    }

    /// Joins if absent, leaves if present.
    pub fn toggle(&mut self) -> Result<bool, SessionError> {
        let local = self.require_identity()?;
        self.mutate(move |state, config| {
            state
                .toggle(local.id, &local.display_name, config)
                .map(|outcome| match outcome {
                    ToggleOutcome::Joined => info!("toggle: joined the queue"),
                    ToggleOutcome::Left => info!("toggle: left the queue"),
                })
        })
    }

    /// Calls the next participant forward.
    pub fn advance(&mut self) -> Result<bool, SessionError> {
        self.require_identity()?;
        self.mutate(|state, _| state.advance().map(|_| ()))
    }

    /// Undoes the most recent removal.
    pub fn restore(&mut self) -> Result<bool, SessionError> {
        self.require_identity()?;
        self.mutate(|state, config| state.restore(config).map(|_| ()))
    }

    /// Removes another participant from the queue (operator action).
    pub fn remove_participant(&mut self, id: ParticipantId) -> Result<bool, SessionError> {
        self.require_identity()?;
        self.mutate(move |state, _| state.leave(id))
    }

    /// Handles a snapshot delivered by the replication channel.
    ///
    /// Runs identically on the owner and on observers: detect a call event,
    /// replace the replica copy, re-render. Redelivery of an already-seen
    /// snapshot is harmless; the detector will not refire and the render is
    /// derived from the state alone.
    pub fn on_snapshot_received(&mut self, snapshot: QueueState) {
        if let Some(target) = self.detector.observe(&snapshot) {
            self.notifier.notify(target);
        }
        self.replica = snapshot;
        self.render();
    }

    // Read side

    pub fn state(&self) -> &QueueState {
        &self.replica
    }

    pub fn queue_length(&self) -> usize {
        self.replica.len()
    }

    /// 1-based position of the local participant; 0 means "not queued".
    pub fn local_position(&self) -> usize {
        match &self.local {
            Some(local) => self.replica.position_of(local.id),
            None => 0,
        }
    }

    pub fn is_in_queue(&self) -> bool {
        self.local_position() > 0
    }

    pub fn is_owner(&self) -> bool {
        self.channel.is_owner()
    }

    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn display_sink(&self) -> &D {
        &self.display
    }

    pub fn notification_sink(&self) -> &N {
        &self.notifier
    }

    // Internals

    fn require_identity(&self) -> Result<LocalParticipant, SessionError> {
        self.local.clone().ok_or(SessionError::IdentityUnavailable)
    }

    /// The acquire-then-mutate path every operation funnels through.
    ///
    /// Ownership is checked exactly once, here. The operation runs against a
    /// scratch copy of the replica so that a guard violation leaves the
    /// local view untouched; on success the new state is published and then
    /// observed locally, since the owner is a replica like any other.
    fn mutate<F>(&mut self, op: F) -> Result<bool, SessionError>
    where
        F: FnOnce(&mut QueueState, &QueueConfig) -> Result<(), GuardError>,
    {
        if !self.channel.is_owner() {
            self.channel.request_ownership()?;
        }

        let mut next = self.replica.clone();
        match op(&mut next, &self.config) {
            Ok(()) => {
                self.channel.publish(&next)?;
                self.on_snapshot_received(next);
                Ok(true)
            }
            Err(guard) => {
                warn!("queue mutation rejected: {}", guard);
                Ok(false)
            }
        }
    }

    /// Projects the replica copy and drives the display sink.
    fn render(&mut self) {
        let Some(local) = &self.local else {
            // No identity yet: there is no personalized view to draw.
            return;
        };

        let display = project(self.replica.entries(), local.id, self.config.max_display_lines);
        self.display.render_status(display.local_position, display.total);
        self.display
            .render_button_label(ButtonLabel::for_membership(display.is_in_queue()));
        self.display.render_queue(&display);
    }
}
