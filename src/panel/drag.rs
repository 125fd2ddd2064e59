//! Drag session state for an in-progress resize gesture

use super::width::{PanelKind, PanelWidth};

/// Snapshot taken when a resize handle is grabbed
///
/// Moves are always measured against the start of the gesture rather than
/// the previous move, so clamping at a limit never accumulates drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub target: PanelKind,
    pub start_pointer_x: f64,
    pub start_width: PanelWidth,
}

impl DragSession {
    pub fn new(target: PanelKind, start_pointer_x: f64, start_width: PanelWidth) -> Self {
        Self {
            target,
            start_pointer_x,
            start_width,
        }
    }

    /// Clamped width of the target panel with the pointer at `pointer_x`
    pub fn width_at(&self, pointer_x: f64) -> PanelWidth {
        let delta = pointer_x - self.start_pointer_x;
        self.target
            .bounds()
            .clamp(self.target.candidate_width(self.start_width, delta))
    }
}

/// Observable controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging(PanelKind),
    /// Terminal; reached only through `dispose()`
    Disposed,
}
