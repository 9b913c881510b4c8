use clap::Parser;
use std::path::PathBuf;

/// Default export file name, resolved against the working directory.
pub const DEFAULT_DATA_FILE: &str = "data.json";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Summarise swipe, like and match counts from a Tinder data export
#[derive(Parser, Debug, Clone)]
#[command(
    name = "swipe-stats",
    about = "Summarise swipe, like and match counts from a Tinder data export",
    version
)]
pub struct Settings {
    /// Path to the exported JSON file
    #[arg(default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments and apply the `--debug` override.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os())
    }

    /// Same as [`Settings::load`] but accepts an explicit argument list.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut settings = Settings::parse_from(args);
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
