//! # Waitline Client
//! The per-replica session runtime. Wraps the shared queue state machine
//! with ownership acquisition, snapshot publication and reception, change
//! detection, and dispatch to the display and notification sinks.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use waitline_shared::{
    project, ButtonLabel, ChangeCounter, DisplayRow, GuardError, ParticipantId, QueueConfig,
    QueueDisplay, QueueEntry, QueueState, ToggleOutcome,
};

mod change_detector;
mod channel;
mod error;
mod session;
mod sinks;

pub use change_detector::ChangeDetector;
pub use channel::{ChannelError, ReplicationChannel};
pub use error::SessionError;
pub use session::{LocalParticipant, QueueSession};
pub use sinks::{DisplaySink, NotificationSink};
