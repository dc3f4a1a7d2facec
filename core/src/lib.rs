//! Screensaver Core - Headless data + animation engine for csv-screensaver
//!
//! This crate holds everything the screensaver does that is independent of
//! the terminal: picking and decoding a data file, formatting it into a
//! retro banner block, and the typing/blinking/panning animation state
//! machine that reveals it.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐   ┌────────────────┐
//! │ Data Loader  │──▶│  Formatter   │──▶│ Animation Engine │──▶│ DisplaySurface │
//! │ (csv/gz/pq)  │   │ (frame text) │   │  (tick driven)   │   │   (surface)    │
//! └──────────────┘   └──────────────┘   └────────┬─────────┘   └────────────────┘
//!                                                │
//!                                         ┌──────┴──────┐
//!                                         │  Scheduler  │
//!                                         └─────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`AnimationEngine`]: owns the frame text and [`AnimationState`]
//! - [`Scheduler`] / [`DisplaySurface`]: the seams a UI surface implements
//! - [`Dataset`]: header + records of text cells
//! - [`FrameFormatter`]: dataset to frame text
//! - [`ScreensaverConfig`]: environment-driven configuration

pub mod animation;
pub mod config;
pub mod content;
pub mod data;
pub mod error;
pub mod format;

pub use animation::{
    AnimationEngine, AnimationState, AnimationTiming, DisplaySurface, ManualScheduler, Phase,
    Scheduler, TimerHandle,
};
pub use config::ScreensaverConfig;
pub use content::prepare_frame_text;
pub use data::{DataFormat, Dataset};
pub use error::{Error, Result};
pub use format::FrameFormatter;
