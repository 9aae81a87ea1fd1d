//! Debounce for terminal resize events.
//!
//! Resizes arrive in bursts while the user drags the window edge. Rebuilding
//! the grid on every event would thrash, so the runner only reacts once the
//! size has been stable for a quiet period. Last-resize-wins: a new event
//! supersedes any pending one, never queues behind it.

#[derive(Debug, Clone)]
pub struct ResizeDebounce {
    quiet_ms: u64,
    pending: Option<Pending>,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    deadline_ms: u64,
    cols: u16,
    rows: u16,
}

impl ResizeDebounce {
    pub fn new(quiet_ms: u64) -> Self {
        Self {
            quiet_ms,
            pending: None,
        }
    }

    /// Record a resize event, restarting the quiet period.
    pub fn observe(&mut self, now_ms: u64, cols: u16, rows: u16) {
        self.pending = Some(Pending {
            deadline_ms: now_ms + self.quiet_ms,
            cols,
            rows,
        });
    }

    /// Return the settled size once the quiet period has elapsed.
    ///
    /// Fires at most once per observed burst; the pending entry is consumed.
    pub fn poll(&mut self, now_ms: u64) -> Option<(u16, u16)> {
        let pending = self.pending?;
        if now_ms < pending.deadline_ms {
            return None;
        }
        self.pending = None;
        Some((pending.cols, pending.rows))
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop any pending resize. Used on teardown.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
