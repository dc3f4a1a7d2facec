//! Animation System - Surface-Agnostic Typing Animation
//!
//! The screensaver reveals its frame text one character at a time, then
//! either blinks a cursor or pans horizontally across lines too wide for
//! the viewport. This module owns that sequencing and nothing else.
//!
//! # Design
//!
//! - **Owned state**: [`AnimationEngine`] owns the frame text and the one
//!   [`AnimationState`] record; nothing is global.
//! - **Explicit scheduling**: ticks are requested through a [`Scheduler`]
//!   that hands out a [`TimerHandle`]; the engine cancels the previous
//!   handle before registering a new one, so at most one tick is pending.
//! - **Opaque surface**: frames go to a [`DisplaySurface`], which also
//!   reports viewport/content widths for the pan decision.
//!
//! ```text
//! Typing ──(content fits)──────▶ Blinking ─┐
//!    │                              ▲ ─────┘ every blink_interval
//!    └──(content overflows)──▶ Panning ─┐
//!                                  ▲ ───┘ every pan_frame_interval
//! ```
//!
//! Tick handling performs no I/O: the frame text is fully prepared before
//! the first tick.

mod engine;
mod scheduler;
mod surface;
mod timing;

pub use engine::{AnimationEngine, AnimationState, Phase, CURSOR_GLYPH};
pub use scheduler::{ManualScheduler, Scheduler, TimerHandle};
pub use surface::DisplaySurface;
pub use timing::AnimationTiming;
