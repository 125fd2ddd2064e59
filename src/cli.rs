//! Command-line argument parsing
//!
//! Supports:
//! - Choosing where panel widths are stored (or not storing them at all)
//! - Resetting both panels to their default widths on startup
//! - Initial window size

use std::path::PathBuf;

use clap::Parser;

/// Resizable panel layout shell
#[derive(Parser, Debug)]
#[command(
    name = "codexmonitor-layout",
    version,
    about = "Desktop shell with a resizable sidebar and right panel"
)]
pub struct CliArgs {
    /// Storage file for panel widths (defaults to the config directory)
    #[arg(long, value_name = "PATH", conflicts_with = "ephemeral")]
    pub store: Option<PathBuf>,

    /// Keep panel widths in memory only
    #[arg(long)]
    pub ephemeral: bool,

    /// Reset both panels to their default widths on startup
    #[arg(long)]
    pub reset: bool,

    /// Initial window width in logical pixels
    #[arg(long, value_name = "PX", default_value_t = 1200)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, value_name = "PX", default_value_t = 800)]
    pub height: u32,
}

/// Where panel widths live
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// `~/.config/codexmonitor/storage.json`
    Default,
    /// Explicit file
    File(PathBuf),
    /// In-memory, discarded on exit
    Memory,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub store: StoreLocation,
    pub reset_widths: bool,
    /// Initial window size in logical pixels
    pub window_size: (u32, u32),
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if self.width == 0 || self.height == 0 {
            return Err("Window size must be non-zero".to_string());
        }

        let store = match (self.ephemeral, self.store) {
            (true, _) => StoreLocation::Memory,
            (false, Some(path)) => StoreLocation::File(path),
            (false, None) => StoreLocation::Default,
        };

        Ok(StartupConfig {
            store,
            reset_widths: self.reset,
            window_size: (self.width, self.height),
        })
    }
}
