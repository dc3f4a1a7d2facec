//! Tick Scheduling
//!
//! The engine asks for "call me again after `delay`" and receives a
//! [`TimerHandle`]. Surfaces implement [`Scheduler`] on top of their own
//! clock; [`ManualScheduler`] is a virtual clock for headless drivers and
//! tests.

use std::time::Duration;

/// Identifies one scheduled tick
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Create a handle from a raw id
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw id
    pub const fn id(&self) -> u64 {
        self.0
    }
}

/// Registers and cancels delayed ticks
pub trait Scheduler {
    /// Request a tick after `delay`
    fn schedule(&mut self, delay: Duration) -> TimerHandle;

    /// Drop a pending tick; unknown or already-fired handles are ignored
    fn cancel(&mut self, handle: TimerHandle);
}

#[derive(Clone, Copy, Debug)]
struct PendingTick {
    handle: TimerHandle,
    deadline: Duration,
}

/// Virtual-clock scheduler
///
/// Time only moves when [`ManualScheduler::fire_next`] is called, which
/// jumps the clock to the earliest deadline and returns its handle.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTick>,
    history: Vec<Duration>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed so far
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of ticks currently waiting
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Delay of every `schedule` call, in order
    pub fn scheduled_delays(&self) -> &[Duration] {
        &self.history
    }

    /// Advance to the earliest pending tick and hand it out
    pub fn fire_next(&mut self) -> Option<TimerHandle> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .min_by_key(|(_, tick)| tick.deadline)
            .map(|(idx, _)| idx)?;
        let tick = self.pending.remove(idx);
        self.now = self.now.max(tick.deadline);
        Some(tick.handle)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle::new(self.next_id);
        self.next_id += 1;
        self.history.push(delay);
        self.pending.push(PendingTick {
            handle,
            deadline: self.now + delay,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|tick| tick.handle != handle);
    }
}
