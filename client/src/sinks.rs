use waitline_shared::{ButtonLabel, ParticipantId, QueueDisplay};

/// Consumer of the projected queue state. Rendering backends (world panels,
/// wrist monitors, terminals) implement this and hold no queue state of
/// their own; everything they need arrives with each call.
pub trait DisplaySink {
    fn render_queue(&mut self, display: &QueueDisplay);

    /// Compact status: 1-based position (0 = not queued) out of `total`.
    fn render_status(&mut self, position: usize, total: usize);

    fn render_button_label(&mut self, label: ButtonLabel);
}

/// Consumer of call-forward events. Fired exactly once per call event on
/// every replica; the sink compares `target` against its own local
/// participant id to choose personalized ("you're up") versus informational
/// copy, and plays whatever audio/visual cue it owns.
pub trait NotificationSink {
    fn notify(&mut self, target: ParticipantId);
}
