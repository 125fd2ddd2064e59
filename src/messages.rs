//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::panel::PanelKind;

/// Panel resize messages
///
/// Pointer coordinates are horizontal, in logical pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelMsg {
    /// Pointer pressed on a panel's resize handle
    BeginResize { panel: PanelKind, pointer_x: f64 },
    /// Pointer moved anywhere in the window
    PointerMoved { x: f64 },
    /// Pointer released anywhere in the window
    PointerReleased,
    /// Window lost focus; a release may never arrive
    FocusLost,
    /// Set a width directly (clamped)
    SetWidth { panel: PanelKind, width: f64 },
    /// Restore a panel to its default width (double-click on handle)
    ResetWidth(PanelKind),
    /// Hover state of the resize handles changed while idle
    HoverHandle(Option<PanelKind>),
}

/// Application-level messages (window)
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Window resized (physical pixels)
    Resize(u32, u32),
    /// Display scale factor changed (e.g., moving between monitors)
    ScaleFactorChanged(f64),
    /// Quit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Panel resize messages
    Panel(PanelMsg),
    /// App messages (window)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a begin-resize message
    pub fn begin_resize(panel: PanelKind, pointer_x: f64) -> Self {
        Msg::Panel(PanelMsg::BeginResize { panel, pointer_x })
    }

    /// Create a pointer-move message
    pub fn pointer_moved(x: f64) -> Self {
        Msg::Panel(PanelMsg::PointerMoved { x })
    }

    /// Create a pointer-release message
    pub fn pointer_released() -> Self {
        Msg::Panel(PanelMsg::PointerReleased)
    }

    /// Create a resize message
    pub fn resize(width: u32, height: u32) -> Self {
        Msg::App(AppMsg::Resize(width, height))
    }
}
