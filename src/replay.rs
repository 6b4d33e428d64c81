use std::time::Duration;

use crate::paper::Paper;
use crate::stroke::Stroke;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

/// Outcome of advancing a replay
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReplayStatus {
    /// More strokes to reveal; poll again at this time (seconds)
    Pending { next_due: f64 },
    Finished,
}

/// Reveals strokes one at a time on a fixed interval.
///
/// The task is polled with the current time; dropping it cancels the replay.
/// Each stroke appears whole, and the next one is due `interval` after the
/// previous reveal.
#[derive(Debug, Clone)]
pub struct ReplayTask {
    interval: f64,
    next_index: usize,
    next_due: f64,
}

impl ReplayTask {
    /// Start a replay whose first stroke is due at `now`
    pub fn new(interval: Duration, now: f64) -> Self {
        Self {
            interval: interval.as_secs_f64(),
            next_index: 0,
            next_due: now,
        }
    }

    /// Number of strokes revealed so far
    pub fn revealed(&self) -> usize {
        self.next_index
    }

    /// Reveal the next stroke if it is due
    pub fn poll(&mut self, now: f64, strokes: &[Stroke], paper: &mut Paper) -> ReplayStatus {
        if let Some(stroke) = strokes.get(self.next_index) {
            if now >= self.next_due {
                paper.add(stroke.clone());
                self.next_index += 1;
                self.next_due = now + self.interval;
            }
        }

        if self.next_index < strokes.len() {
            ReplayStatus::Pending {
                next_due: self.next_due,
            }
        } else {
            ReplayStatus::Finished
        }
    }
}
