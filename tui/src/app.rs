//! Main Application
//!
//! The App owns the engine, its tick scheduler and the terminal surface:
//! - Event loop (keyboard, mouse, resize)
//! - Tick dispatch into the animation engine
//! - Rendering via [`TerminalSurface`]
//!
//! Any key press or mouse button press ends the run.

use std::io;

use crossterm::event::{Event, EventStream, KeyEventKind, MouseEventKind};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::time::Instant;

use screensaver_core::{AnimationEngine, AnimationTiming, Phase};

use crate::scheduler::TickScheduler;
use crate::surface::TerminalSurface;

/// Main application state
pub struct App {
    /// Is the app still running?
    running: bool,
    engine: AnimationEngine,
    scheduler: TickScheduler,
    surface: TerminalSurface,
}

impl App {
    /// Create the app for a terminal of `size` and start typing
    pub fn new(frame_text: String, timing: AnimationTiming, size: (u16, u16)) -> Self {
        let mut app = Self {
            running: true,
            engine: AnimationEngine::new(frame_text, timing),
            scheduler: TickScheduler::new(),
            surface: TerminalSurface::new(size.0, size.1),
        };
        app.engine.start(&mut app.scheduler, &mut app.surface);
        app
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();

        self.render(terminal)?;

        while self.running {
            let deadline = self.scheduler.deadline();

            tokio::select! {
                biased;

                // Terminal input first so an exit is never starved by ticks
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_event(&event),
                    Some(Err(err)) => {
                        tracing::warn!(error = %err, "Terminal event stream failed");
                        self.quit();
                    }
                    None => self.quit(),
                },

                _ = wait_until(deadline) => {
                    self.fire_due(Instant::now());
                }
            }

            if self.running {
                self.render(terminal)?;
            }
        }

        tracing::info!(phase = self.engine.phase().description(), "Screensaver stopped");
        Ok(())
    }

    /// React to one terminal event
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            // Only Press (not Release or Repeat)
            Event::Key(key) if key.kind == KeyEventKind::Press => self.quit(),
            Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => self.quit(),
            Event::Resize(w, h) => {
                tracing::debug!(width = w, height = h, "Terminal resized");
                self.surface.resize(*w, *h);
            }
            _ => {}
        }
    }

    /// Deliver the pending tick if it is due; returns whether one fired
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.scheduler.take_due(now) {
            Some(handle) => self
                .engine
                .on_tick(handle, &mut self.scheduler, &mut self.surface),
            None => false,
        }
    }

    /// Stop the loop and cancel the outstanding tick
    pub fn quit(&mut self) {
        self.engine.cancel(&mut self.scheduler);
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    pub fn engine(&self) -> &AnimationEngine {
        &self.engine
    }

    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    pub fn surface(&self) -> &TerminalSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut TerminalSurface {
        &mut self.surface
    }

    fn render(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
        terminal.draw(|frame| {
            let area = frame.area();
            self.surface.render(area, frame.buffer_mut());
        })?;
        Ok(())
    }
}

/// Sleep until `deadline`, or forever when nothing is scheduled
async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
