//! CSV Screensaver - terminal surface
//!
//! Drives the headless [`screensaver_core::AnimationEngine`] inside a
//! ratatui/crossterm full-screen terminal.
//!
//! # Architecture
//!
//! ```text
//! main.rs          load frame text (blocking, before the runtime)
//!    |
//!    v
//! App::run         tokio::select! { terminal events | next tick deadline }
//!    |                 |                       |
//!    |            quit on input          TickScheduler -> engine.on_tick
//!    v                                          |
//! TerminalSurface  <----- set_text / set_scroll_offset
//!    |
//!    v
//! TextBlock widget -> ratatui buffer
//! ```

pub mod app;
pub mod cli;
pub mod scheduler;
pub mod surface;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use cli::Cli;
pub use scheduler::TickScheduler;
pub use surface::TerminalSurface;
