use crate::{state::QueueEntry, types::ParticipantId};

/// Caption for the join/leave toggle button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonLabel {
    Join,
    Leave,
}

impl ButtonLabel {
    pub fn for_membership(is_in_queue: bool) -> Self {
        if is_in_queue {
            ButtonLabel::Leave
        } else {
            ButtonLabel::Join
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            ButtonLabel::Join => "Join queue",
            ButtonLabel::Leave => "Leave queue",
        }
    }
}

/// One visible row of the projected queue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayRow {
    /// 1-based queue position.
    pub position: usize,
    pub display_name: String,
    /// Whether this row is the local participant, for highlighting.
    pub is_local: bool,
}

/// Bounded render model of the queue, as seen by one participant.
///
/// Derived from the entries alone on every snapshot; display sinks can
/// render it directly without holding any state of their own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueDisplay {
    /// The visible window of rows, in queue order.
    pub rows: Vec<DisplayRow>,
    /// Entries ahead of the window that were cut off.
    pub omitted_before: usize,
    /// Entries behind the window that were cut off.
    pub omitted_after: usize,
    /// 1-based position of the local participant; 0 means "not queued".
    pub local_position: usize,
    /// Total entries in the queue, windowed or not.
    pub total: usize,
}

impl QueueDisplay {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn is_in_queue(&self) -> bool {
        self.local_position > 0
    }

    /// Plain-text rendering of the model, one string per line.
    ///
    /// Sinks with richer output (color, bold) should render from the model
    /// fields instead and use `is_local` for their own highlight.
    pub fn to_lines(&self) -> Vec<String> {
        if self.is_empty() {
            return vec!["Queue is empty".to_string()];
        }

        let mut lines = Vec::with_capacity(self.rows.len() + 3);
        lines.push("[Queue]".to_string());
        if self.omitted_before > 0 {
            lines.push(format!("... ({} omitted)", self.omitted_before));
        }
        for row in &self.rows {
            if row.is_local {
                lines.push(format!("-> {}. {} (you)", row.position, row.display_name));
            } else {
                lines.push(format!("{}. {}", row.position, row.display_name));
            }
        }
        if self.omitted_after > 0 {
            lines.push(format!("... ({} more)", self.omitted_after));
        }
        lines
    }

    /// One-line position summary for compact status displays.
    pub fn status_line(&self) -> String {
        if self.local_position > 0 {
            format!("Position {} of {}", self.local_position, self.total)
        } else {
            "Not in queue".to_string()
        }
    }
}

/// Projects the queue entries into a bounded display window.
///
/// Pure and deterministic: the same entries, local id, and line budget
/// always produce the same model. When the queue overflows the budget the
/// window is centered on the local participant (clamped so it never runs
/// past either end); when the local participant is absent the window shows
/// the head of the queue.
pub fn project(
    entries: &[QueueEntry],
    local_id: ParticipantId,
    max_display_lines: usize,
) -> QueueDisplay {
    let total = entries.len();
    let local_index = entries.iter().position(|entry| entry.id == local_id);
    let max_lines = max_display_lines.max(1);

    let (start, end) = match local_index {
        Some(index) if total > max_lines => {
            let mut start = index.saturating_sub(max_lines / 2);
            let end = (start + max_lines).min(total);
            if end == total {
                start = end.saturating_sub(max_lines);
            }
            (start, end)
        }
        _ => (0, total.min(max_lines)),
    };

    let rows = entries[start..end]
        .iter()
        .enumerate()
        .map(|(offset, entry)| DisplayRow {
            position: start + offset + 1,
            display_name: entry.display_name.clone(),
            is_local: local_index == Some(start + offset),
        })
        .collect();

    QueueDisplay {
        rows,
        omitted_before: start,
        omitted_after: total - end,
        local_position: local_index.map(|index| index + 1).unwrap_or(0),
        total,
    }
}
