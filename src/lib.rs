//! CodexMonitor layout - resizable sidebar and right panel
//!
//! This crate provides the core types and logic for a three-column desktop
//! layout whose side panels can be resized by dragging their borders,
//! implementing the Elm Architecture pattern. Widths are clamped to
//! per-panel bounds and persisted across sessions.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod layout;
pub mod messages;
pub mod model;
pub mod panel;
pub mod storage;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::LayoutConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use panel::{PanelKind, PanelResizeController, PanelWidth};
pub use storage::{FileStore, MemoryStore, WidthStore};
