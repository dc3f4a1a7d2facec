//! Animation Engine
//!
//! The typing → blinking/panning state machine. Each tick mutates the
//! owned [`AnimationState`], pushes a frame to the surface and requests
//! the next tick from the scheduler.

use std::time::Duration;

use tracing::{debug, info};

use super::scheduler::{Scheduler, TimerHandle};
use super::surface::DisplaySurface;
use super::timing::AnimationTiming;

/// Block cursor drawn after the revealed text
pub const CURSOR_GLYPH: char = '█';

/// Mutually exclusive animation modes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing to reveal; a single static frame, no ticks
    Idle,
    /// Revealing one character per tick with an accelerating delay
    Typing,
    /// Text fully revealed and fits; cursor blinks
    Blinking,
    /// Text fully revealed but overflows; viewport pans back and forth
    Panning,
}

impl Phase {
    /// Short human-readable label (used in logs)
    pub fn description(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Typing => "typing",
            Phase::Blinking => "blinking",
            Phase::Panning => "panning",
        }
    }
}

/// The single mutable record driven by ticks
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    /// Characters of frame text shown so far
    pub revealed_length: usize,
    /// Active phase
    pub phase: Phase,
    /// Delay before the next typing tick
    pub typing_delay: Duration,
    /// Whether the cursor glyph is drawn
    pub cursor_visible: bool,
    /// Horizontal scroll position while panning
    pub pan_offset: usize,
    /// +1 scrolling right, -1 scrolling left
    pub pan_direction: i8,
    /// Panning ticks since the phase started (drives cursor blink)
    pub pan_ticks: u64,
}

impl AnimationState {
    fn new(timing: &AnimationTiming) -> Self {
        Self {
            revealed_length: 0,
            phase: Phase::Typing,
            typing_delay: timing.initial_typing_delay,
            cursor_visible: true,
            pan_offset: 0,
            pan_direction: 1,
            pan_ticks: 0,
        }
    }
}

/// Drives the reveal animation for one frame text
#[derive(Debug)]
pub struct AnimationEngine {
    frame_text: String,
    char_count: usize,
    /// Byte offset matching `state.revealed_length`
    revealed_bytes: usize,
    state: AnimationState,
    timing: AnimationTiming,
    /// The one outstanding tick, if any
    pending: Option<TimerHandle>,
}

impl AnimationEngine {
    /// Create an engine for `frame_text`; nothing happens until [`start`](Self::start)
    pub fn new(frame_text: impl Into<String>, timing: AnimationTiming) -> Self {
        let frame_text = frame_text.into();
        let timing = timing.sanitized();
        Self {
            char_count: frame_text.chars().count(),
            frame_text,
            revealed_bytes: 0,
            state: AnimationState::new(&timing),
            timing,
            pending: None,
        }
    }

    /// Reset state and begin the typing phase
    ///
    /// Empty frame text skips typing entirely: a single static frame is
    /// drawn and no tick is scheduled.
    pub fn start(&mut self, scheduler: &mut impl Scheduler, surface: &mut impl DisplaySurface) {
        self.cancel(scheduler);
        self.state = AnimationState::new(&self.timing);
        self.revealed_bytes = 0;

        if self.frame_text.is_empty() {
            self.state.phase = Phase::Idle;
            self.render(surface);
            surface.scroll_to_end();
            info!("No frame text; showing static frame");
            return;
        }

        self.render(surface);
        surface.scroll_to_end();
        debug!(chars = self.char_count, "Typing started");
        self.schedule(scheduler, self.state.typing_delay);
    }

    /// Handle an expired tick
    ///
    /// Returns `false` (and does nothing) when `handle` is not the pending
    /// tick, e.g. one that was cancelled after it had already fired.
    pub fn on_tick(
        &mut self,
        handle: TimerHandle,
        scheduler: &mut impl Scheduler,
        surface: &mut impl DisplaySurface,
    ) -> bool {
        if self.pending != Some(handle) {
            debug!(handle = handle.id(), "Ignoring stale tick");
            return false;
        }
        self.pending = None;

        match self.state.phase {
            Phase::Typing => self.tick_typing(scheduler, surface),
            Phase::Blinking => self.tick_blinking(scheduler, surface),
            Phase::Panning => self.tick_panning(scheduler, surface),
            Phase::Idle => {}
        }
        true
    }

    /// Cancel the pending tick; the engine stays frozen afterwards
    pub fn cancel(&mut self, scheduler: &mut impl Scheduler) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
    }

    fn tick_typing(&mut self, scheduler: &mut impl Scheduler, surface: &mut impl DisplaySurface) {
        if let Some(ch) = self.frame_text[self.revealed_bytes..].chars().next() {
            self.revealed_bytes += ch.len_utf8();
            self.state.revealed_length += 1;
        }

        self.render(surface);
        surface.scroll_to_end();

        if self.state.revealed_length >= self.char_count {
            self.finish_typing(scheduler, surface);
            return;
        }

        self.state.typing_delay = self.timing.next_typing_delay(self.state.typing_delay);
        self.schedule(scheduler, self.state.typing_delay);
    }

    fn finish_typing(&mut self, scheduler: &mut impl Scheduler, surface: &mut impl DisplaySurface) {
        let content = surface.content_width();
        let viewport = surface.viewport_width();

        if content > viewport {
            self.state.phase = Phase::Panning;
            self.state.pan_offset = 0;
            self.state.pan_direction = 1;
            self.state.pan_ticks = 0;
            self.schedule(scheduler, self.timing.pan_frame_interval);
        } else {
            self.state.phase = Phase::Blinking;
            self.schedule(scheduler, self.timing.blink_interval);
        }

        info!(
            phase = self.state.phase.description(),
            content, viewport, "Typing finished"
        );
    }

    fn tick_blinking(&mut self, scheduler: &mut impl Scheduler, surface: &mut impl DisplaySurface) {
        self.state.cursor_visible = !self.state.cursor_visible;
        self.render(surface);
        surface.scroll_to_end();
        self.schedule(scheduler, self.timing.blink_interval);
    }

    fn tick_panning(&mut self, scheduler: &mut impl Scheduler, surface: &mut impl DisplaySurface) {
        // Re-read extents every frame: layout may have changed since typing ended
        let max_scroll = surface.max_scroll();

        if max_scroll == 0 {
            self.state.pan_offset = 0;
            self.state.pan_direction = 1;
            self.tick_blinking(scheduler, surface);
            return;
        }

        let current = self.state.pan_offset.min(max_scroll);
        let step = self.timing.pan_speed;

        if self.state.pan_direction > 0 {
            let next = current.saturating_add(step);
            if next >= max_scroll {
                self.state.pan_offset = max_scroll;
                self.state.pan_direction = -1;
            } else {
                self.state.pan_offset = next;
            }
        } else if current <= step {
            self.state.pan_offset = 0;
            self.state.pan_direction = 1;
        } else {
            self.state.pan_offset = current - step;
        }

        self.state.pan_ticks += 1;
        if self.state.pan_ticks % u64::from(self.timing.blink_interval_frames) == 0 {
            self.state.cursor_visible = !self.state.cursor_visible;
            self.render(surface);
        }

        surface.set_scroll_offset(self.state.pan_offset);
        self.schedule(scheduler, self.timing.pan_frame_interval);
    }

    fn schedule(&mut self, scheduler: &mut impl Scheduler, delay: Duration) {
        if let Some(previous) = self.pending.take() {
            scheduler.cancel(previous);
        }
        self.pending = Some(scheduler.schedule(delay));
    }

    fn render(&self, surface: &mut impl DisplaySurface) {
        surface.set_text(&self.rendered_text());
    }

    /// Current frame: revealed text followed by the cursor (or a space)
    pub fn rendered_text(&self) -> String {
        let mut text = String::with_capacity(self.revealed_bytes + 4);
        text.push_str(self.revealed_text());
        text.push(if self.state.cursor_visible {
            CURSOR_GLYPH
        } else {
            ' '
        });
        text
    }

    /// Portion of the frame text revealed so far
    pub fn revealed_text(&self) -> &str {
        &self.frame_text[..self.revealed_bytes]
    }

    /// Full frame text
    pub fn frame_text(&self) -> &str {
        &self.frame_text
    }

    /// Frame text length in characters
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn timing(&self) -> &AnimationTiming {
        &self.timing
    }

    /// Handle of the outstanding tick
    pub fn pending(&self) -> Option<TimerHandle> {
        self.pending
    }
}
