//! Panel resize update handlers
//!
//! Handles drag start/move/release, focus loss, hover feedback, and direct
//! width changes for the sidebar and right panel.

use crate::commands::{Cmd, CursorStyle};
use crate::messages::PanelMsg;
use crate::model::AppModel;

/// Cursor + redraw after the affordance may have changed
fn affordance_changed(model: &AppModel) -> Cmd {
    let cursor = if model.panels.is_dragging() || model.hovered_handle.is_some() {
        CursorStyle::ColResize
    } else {
        CursorStyle::Default
    };
    Cmd::batch(vec![Cmd::SetCursor(cursor), Cmd::Redraw])
}

/// Update function for panel messages
pub fn update_panel(model: &mut AppModel, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::BeginResize { panel, pointer_x } => {
            if !model.panels.begin_resize(panel, pointer_x) {
                return None;
            }
            model.hovered_handle = None;
            Some(affordance_changed(model))
        }

        PanelMsg::PointerMoved { x } => {
            // Routed on every move; a no-op unless a drag is active
            model.panels.on_pointer_move(x).then_some(Cmd::Redraw)
        }

        PanelMsg::PointerReleased => {
            if !model.panels.end_resize() {
                return None;
            }
            Some(affordance_changed(model))
        }

        PanelMsg::FocusLost => {
            if !model.config.end_drag_on_focus_loss {
                return None;
            }
            let had_hover = model.hovered_handle.take().is_some();
            let ended = model.panels.end_resize();
            if ended {
                tracing::debug!("Drag ended by focus loss");
            }
            (ended || had_hover).then(|| affordance_changed(model))
        }

        // Ignored mid-drag: the next pointer move would overwrite the width
        PanelMsg::SetWidth { panel, width } => {
            if model.panels.is_dragging() {
                return None;
            }
            model.panels.set_width(panel, width).then_some(Cmd::Redraw)
        }

        PanelMsg::ResetWidth(panel) => {
            if model.panels.is_dragging() {
                return None;
            }
            model.panels.reset_width(panel).then_some(Cmd::Redraw)
        }

        PanelMsg::HoverHandle(handle) => {
            if model.panels.is_dragging()
                || model.panels.is_disposed()
                || model.hovered_handle == handle
            {
                return None;
            }
            model.hovered_handle = handle;
            Some(affordance_changed(model))
        }
    }
}
