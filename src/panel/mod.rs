//! Resizable side panels
//!
//! The layout has a left sidebar and a right panel around the main content.
//! Each side panel has a drag handle on its inner border.
//!
//! ## Architecture
//!
//! - `PanelKind`: Sidebar or RightPanel, with per-panel bounds and storage key
//! - `PanelBounds` / `PanelWidth`: clamped integer widths in logical pixels
//! - `DragSession`: snapshot of an in-progress drag
//! - `PanelResizeController`: widths + drag state machine + persistence
//!
//! ## Integration
//!
//! - Messages arrive as `Msg::Panel` and are handled in `update/panel.rs`
//! - Handle hit-testing lives in `layout.rs`
//! - Widths are persisted through `storage::WidthStore`

mod controller;
mod drag;
mod width;

pub use controller::{PanelLayout, PanelResizeController, ResizeAffordance};
pub use drag::{DragSession, DragState};
pub use width::{PanelBounds, PanelKind, PanelWidth, STORAGE_NAMESPACE};
