use log::info;

use crate::{
    error::GuardError,
    queue_config::QueueConfig,
    state::{QueueEntry, QueueState},
    types::ParticipantId,
};

/// Which half of a toggle actually ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    Joined,
    Left,
}

/// Mutation operations on the replicated aggregate.
///
/// These run only on the replica that currently owns the state; ownership
/// acquisition and snapshot publication are the session layer's concern.
/// Every operation either applies completely or returns a [`GuardError`]
/// and leaves the state untouched.
impl QueueState {
    /// Appends a participant at the tail of the queue.
    pub fn join(
        &mut self,
        id: ParticipantId,
        display_name: &str,
        config: &QueueConfig,
    ) -> Result<(), GuardError> {
        if display_name.is_empty() {
            return Err(GuardError::EmptyDisplayName);
        }
        if self.contains(id) {
            return Err(GuardError::AlreadyQueued { id });
        }
        if self.entries.len() >= config.max_queue_size {
            return Err(GuardError::QueueFull {
                capacity: config.max_queue_size,
            });
        }

        self.entries.push(QueueEntry::new(id, display_name));
        info!(
            "participant {} ({}) joined the queue at position {}",
            display_name,
            id,
            self.entries.len()
        );
        Ok(())
    }

    /// Removes a participant, preserving the order of everyone else.
    ///
    /// The removed entry is buffered into the single-slot undo, overwriting
    /// whatever was buffered before.
    pub fn leave(&mut self, id: ParticipantId) -> Result<(), GuardError> {
        let index = self.index_of(id).ok_or(GuardError::NotQueued { id })?;
        let removed = self.remove_at(index);
        info!(
            "participant {} ({}) left the queue",
            removed.display_name, removed.id
        );
        Ok(())
    }

    /// Leaves if present, joins otherwise.
    ///
    /// Membership is decided by a single index lookup so that the check and
    /// the mutation cannot act on two different reads of the entries.
    pub fn toggle(
        &mut self,
        id: ParticipantId,
        display_name: &str,
        config: &QueueConfig,
    ) -> Result<ToggleOutcome, GuardError> {
        match self.index_of(id) {
            Some(index) => {
                let removed = self.remove_at(index);
                info!(
                    "participant {} ({}) left the queue",
                    removed.display_name, removed.id
                );
                Ok(ToggleOutcome::Left)
            }
            None => {
                self.join(id, display_name, config)?;
                Ok(ToggleOutcome::Joined)
            }
        }
    }

    /// Calls the next participant forward and removes them from the queue.
    ///
    /// Sets `last_called`, increments the change counter, and buffers the
    /// called entry for a possible restore, all within one mutation so that
    /// a single published snapshot carries the call event together with the
    /// removal. Returns the entry that was called.
    pub fn advance(&mut self) -> Result<QueueEntry, GuardError> {
        if self.entries.is_empty() {
            return Err(GuardError::QueueEmpty);
        }

        let called = self.remove_at(0);
        self.last_called = Some(called.id);
        self.change_counter += 1;
        info!(
            "called participant {} ({}) forward",
            called.display_name, called.id
        );
        Ok(called)
    }

    /// Undoes the most recent removal, re-inserting the entry at the front.
    ///
    /// Front insertion is deliberate: a restored participant resumes the
    /// position they were about to be served from, rather than rejoining at
    /// the tail. The undo slot is cleared only on success, so a restore that
    /// loses a race with a fresh join of the same participant can be retried
    /// once that participant leaves again.
    pub fn restore(&mut self, config: &QueueConfig) -> Result<ParticipantId, GuardError> {
        let buffered = match &self.last_removed {
            Some(entry) => entry.clone(),
            None => return Err(GuardError::NothingToRestore),
        };
        if self.contains(buffered.id) {
            return Err(GuardError::AlreadyQueued { id: buffered.id });
        }
        if self.entries.len() >= config.max_queue_size {
            return Err(GuardError::QueueFull {
                capacity: config.max_queue_size,
            });
        }

        let id = buffered.id;
        info!(
            "restored participant {} ({}) to the front of the queue",
            buffered.display_name, buffered.id
        );
        self.entries.insert(0, buffered);
        self.last_removed = None;
        Ok(id)
    }

    /// Removes the entry at `index` and records it into the undo slot.
    fn remove_at(&mut self, index: usize) -> QueueEntry {
        let removed = self.entries.remove(index);
        self.last_removed = Some(removed.clone());
        removed
    }
}
