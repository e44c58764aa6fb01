//! # Waitline Shared
//! Replicated waiting-queue data model and pure logic shared by every replica.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod error;
mod projector;
mod queue_config;
mod state;
mod state_machine;
mod types;

pub use error::GuardError;
pub use projector::{project, ButtonLabel, DisplayRow, QueueDisplay};
pub use queue_config::QueueConfig;
pub use state::{QueueEntry, QueueState};
pub use state_machine::ToggleOutcome;
pub use types::{ChangeCounter, ParticipantId};
