//! Tokio-clock tick scheduler
//!
//! The engine keeps at most one tick outstanding, so the scheduler holds a
//! single slot. The event loop sleeps until [`TickScheduler::deadline`] and
//! then asks for the due handle with [`TickScheduler::take_due`].

use std::time::Duration;

use screensaver_core::{Scheduler, TimerHandle};
use tokio::time::Instant;

#[derive(Debug, Default)]
pub struct TickScheduler {
    next_id: u64,
    pending: Option<(TimerHandle, Instant)>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// When the pending tick expires, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, deadline)| deadline)
    }

    /// Hand out the pending tick if its deadline has passed
    pub fn take_due(&mut self, now: Instant) -> Option<TimerHandle> {
        match self.pending {
            Some((handle, deadline)) if deadline <= now => {
                self.pending = None;
                Some(handle)
            }
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }
}

impl Scheduler for TickScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle::new(self.next_id);
        self.pending = Some((handle, Instant::now() + delay));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if matches!(self.pending, Some((pending, _)) if pending == handle) {
            self.pending = None;
        }
    }
}
