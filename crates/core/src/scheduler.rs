//! Gravity timer.
//!
//! Elapsed wall-clock time is accumulated and converted into whole ticks; the
//! remainder carries over, so ticks never drift no matter how unevenly the host
//! loop is woken.

use crate::types::DROP_INTERVAL_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTimer {
    interval_ms: u32,
    accumulated_ms: u64,
}

impl DropTimer {
    /// Timer firing every `interval_ms` (at least 1ms).
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Add `elapsed_ms` and return how many ticks are now due.
    pub fn advance(&mut self, elapsed_ms: u64) -> u64 {
        let interval = self.interval_ms as u64;
        self.accumulated_ms += elapsed_ms;
        let due = self.accumulated_ms / interval;
        self.accumulated_ms %= interval;
        due
    }

    /// Time left until the next tick.
    pub fn until_next_ms(&self) -> u64 {
        self.interval_ms as u64 - self.accumulated_ms
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }
}

impl Default for DropTimer {
    fn default() -> Self {
        Self::new(DROP_INTERVAL_MS)
    }
}
