//! Runtime module - winit/platform integration
//!
//! This module contains platform-specific code for running the layout shell:
//! - `app` - ApplicationHandler and window management
//! - `mouse` - Pointer event to panel message mapping

pub mod app;
pub mod mouse;

pub use app::App;
