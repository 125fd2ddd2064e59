//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! drag sessions and width changes.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=panels=debug,message=debug` - scoped filtering
//! - `RUST_LOG=codexmonitor_layout::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/codexmonitor/logs/codexmonitor.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::panel::{DragState, PanelKind, PanelResizeController};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var (default `warn`).
/// File logging writes to `~/.config/codexmonitor/logs/codexmonitor.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "codexmonitor.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of panel state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSnapshot {
    pub sidebar_width: u32,
    pub right_panel_width: u32,
    pub state: DragState,
}

impl PanelSnapshot {
    pub fn from_controller(panels: &PanelResizeController) -> Self {
        Self {
            sidebar_width: panels.sidebar_width().get(),
            right_panel_width: panels.right_panel_width().get(),
            state: panels.state(),
        }
    }

    fn width(&self, kind: PanelKind) -> u32 {
        match kind {
            PanelKind::Sidebar => self.sidebar_width,
            PanelKind::RightPanel => self.right_panel_width,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &PanelSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.state != other.state {
            changes.push(format!("state: {:?} → {:?}", self.state, other.state));
        }
        for kind in PanelKind::ALL {
            let (before, after) = (self.width(kind), other.width(kind));
            if before != after {
                changes.push(format!("{}: {} → {}", kind, before, after));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }

    /// Panic if a width escaped its bounds (debug builds only)
    pub fn assert_invariants(&self, context: &str) {
        for kind in PanelKind::ALL {
            let width = self.width(kind);
            assert!(
                kind.bounds().contains(width),
                "{} width {} out of bounds after {}",
                kind,
                width,
                context
            );
        }
    }
}
