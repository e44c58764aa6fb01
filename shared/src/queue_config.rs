/// Fixed parameters of the queue core.
///
/// These are session-wide constants: every replica must run with the same
/// `max_queue_size`, since capacity guards execute on whichever replica
/// currently owns the state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueConfig {
    /// Maximum number of entries the queue will hold.
    pub max_queue_size: usize,
    /// Maximum number of rows the display projection emits before windowing.
    pub max_display_lines: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            max_queue_size: 50,
            max_display_lines: 20,
        }
    }
}
