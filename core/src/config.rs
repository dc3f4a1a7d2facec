//! Screensaver Configuration
//!
//! Everything is read once at start-up from `CSV_SCREENSAVER_*` environment
//! variables; unset or unparsable values fall back to the defaults. The
//! data folder can additionally be overridden by the command line.

use std::path::PathBuf;
use std::time::Duration;

use crate::animation::AnimationTiming;
use crate::data::{default_data_dir, DEFAULT_MAX_ROWS};
use crate::format::FrameFormatter;

/// Runtime configuration for one screensaver run
#[derive(Clone, Debug, PartialEq)]
pub struct ScreensaverConfig {
    /// Folder scanned for data files
    pub data_dir: PathBuf,
    /// Data rows kept from the chosen file
    pub max_rows: usize,
    /// Table layout options
    pub formatter: FrameFormatter,
    /// Animation tunables
    pub timing: AnimationTiming,
    /// Fixed RNG seed (file choice + row sampling) for reproducible runs
    pub seed: Option<u64>,
}

impl Default for ScreensaverConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            max_rows: DEFAULT_MAX_ROWS,
            formatter: FrameFormatter::new(),
            timing: AnimationTiming::new(),
            seed: None,
        }
    }
}

impl ScreensaverConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment, test map, ...)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parse_u64 = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u64>().ok());
        let parse_usize = |key: &str| lookup(key).and_then(|v| v.trim().parse::<usize>().ok());

        let initial_delay = parse_u64("CSV_SCREENSAVER_TYPING_DELAY_MS")
            .map(Duration::from_millis)
            .unwrap_or(defaults.timing.initial_typing_delay);
        let min_delay = parse_u64("CSV_SCREENSAVER_MIN_TYPING_DELAY_MS")
            .map(Duration::from_millis)
            .unwrap_or(defaults.timing.min_typing_delay);
        let pan_speed =
            parse_usize("CSV_SCREENSAVER_PAN_SPEED").unwrap_or(defaults.timing.pan_speed);

        Self {
            data_dir: lookup("CSV_SCREENSAVER_DATA_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            max_rows: parse_usize("CSV_SCREENSAVER_MAX_ROWS")
                .filter(|rows| *rows > 0)
                .unwrap_or(defaults.max_rows),
            formatter: defaults
                .formatter
                .with_column_cap(parse_usize("CSV_SCREENSAVER_COLUMN_CAP").filter(|cap| *cap > 0)),
            timing: defaults
                .timing
                .with_typing_delays(initial_delay, min_delay)
                .with_pan_speed(pan_speed)
                .sanitized(),
            seed: parse_u64("CSV_SCREENSAVER_SEED"),
        }
    }

    /// Override the data folder (command-line argument)
    #[must_use]
    pub fn with_data_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.data_dir = dir;
        }
        self
    }
}
