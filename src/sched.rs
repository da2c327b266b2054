//! Deferred-effect scheduler.
//!
//! The menu's entrance delay and exit grace period are the only timed
//! effects in the app. They are modeled as explicit scheduled entries with
//! cancelable handles instead of ad-hoc timers: the owner cancels a pending
//! handle before scheduling a replacement, and a handle that was canceled
//! never fires. The tick loop calls [`Scheduler::due`] to collect expired
//! entries.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle(u64);

#[derive(Debug)]
pub struct Scheduler {
    next_id: u64,
    entries: Vec<(TimerHandle, Instant)>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub fn schedule(&mut self, delay: Duration, now: Instant) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.entries.push((handle, now + delay));
        handle
    }

    pub fn cancel(&mut self, handle: TimerHandle) {
        self.entries.retain(|(h, _)| *h != handle);
    }

    /// Remove and return every handle whose deadline has passed.
    pub fn due(&mut self, now: Instant) -> Vec<TimerHandle> {
        let mut fired = Vec::new();
        self.entries.retain(|(handle, deadline)| {
            if *deadline <= now {
                fired.push(*handle);
                false
            } else {
                true
            }
        });
        fired
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|(h, _)| *h == handle)
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
