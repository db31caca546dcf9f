//! Interaction counter shown as "days used".
//!
//! Counts triggering interactions within one session, not calendar days.

/// Monotonic per-session counter, starting at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionCounter {
    count: u64,
}

impl SessionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one if `triggered`, then return the current count.
    pub fn increment_if_triggered(&mut self, triggered: bool) -> u64 {
        if triggered {
            self.count = self.count.saturating_add(1);
        }
        self.count
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}
