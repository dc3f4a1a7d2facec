//! CSV Screensaver Entry Point
//!
//! Usage:
//!   csv-screensaver [DATA_DIR]
//!
//! The data folder defaults to `$CSV_SCREENSAVER_DATA_DIR`, then to the
//! platform data directory (`~/.local/share/csv-screensaver/data` on Linux).
//! Logs go to stderr, filtered by `RUST_LOG`.

use std::io::{self, IsTerminal};
use std::panic;

use clap::Parser;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use csv_screensaver::{App, Cli};
use screensaver_core::{prepare_frame_text, AnimationTiming, ScreensaverConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: csv-screensaver requires a terminal (TTY)");
        eprintln!();
        eprintln!("Run it directly in a terminal emulator, or use `ssh -t` for remote sessions.");
        std::process::exit(1);
    }

    let config = ScreensaverConfig::from_env().with_data_dir(cli.data_dir);
    tracing::info!(dir = %config.data_dir.display(), "Starting screensaver");

    // Blocking file work happens before the runtime exists
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let frame_text = prepare_frame_text(&config, &mut rng);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    runtime.block_on(run_terminal(frame_text, config.timing))
}

async fn run_terminal(frame_text: String, timing: AnimationTiming) -> anyhow::Result<()> {
    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal_quietly();
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, frame_text, timing).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    frame_text: String,
    timing: AnimationTiming,
) -> anyhow::Result<()> {
    let size = terminal.size()?;
    let mut app = App::new(frame_text, timing, (size.width, size.height));
    app.run(terminal).await
}

fn restore_terminal_quietly() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        DisableMouseCapture,
        LeaveAlternateScreen,
        cursor::Show
    );
}
