//! Pointer event handling for the resize handles
//!
//! Translates physical window coordinates into panel messages:
//! - press on a handle begins a drag (double-click resets the panel)
//! - every move is forwarded; the controller ignores it unless dragging
//! - release anywhere ends the drag

use std::time::{Duration, Instant};

use codexmonitor_layout::commands::Cmd;
use codexmonitor_layout::messages::{Msg, PanelMsg};
use codexmonitor_layout::model::AppModel;
use codexmonitor_layout::panel::PanelKind;
use codexmonitor_layout::update::update;

const DOUBLE_CLICK_TIME: Duration = Duration::from_millis(300);

/// Click tracking state for double-click detection on handles
pub struct ClickTracker {
    pub last_click_time: Instant,
    pub last_handle: Option<PanelKind>,
    pub click_count: u32,
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self {
            last_click_time: Instant::now()
                .checked_sub(Duration::from_secs(10))
                .unwrap_or_else(Instant::now),
            last_handle: None,
            click_count: 0,
        }
    }
}

impl ClickTracker {
    /// Register a click on `handle` at `now`; returns the click count (1 or 2)
    pub fn track_handle_click(&mut self, handle: PanelKind, now: Instant) -> u32 {
        let is_rapid_click = now.duration_since(self.last_click_time) < DOUBLE_CLICK_TIME;
        let is_same_handle = self.last_handle == Some(handle);

        self.click_count = if is_rapid_click && is_same_handle && self.click_count == 1 {
            2
        } else {
            1
        };
        self.last_click_time = now;
        self.last_handle = Some(handle);

        self.click_count
    }
}

/// Left button pressed at physical `x`
pub fn handle_mouse_down(
    model: &mut AppModel,
    x: f64,
    click_tracker: &mut ClickTracker,
    now: Instant,
) -> Option<Cmd> {
    let handle = model.handle_at(x)?;

    if click_tracker.track_handle_click(handle, now) >= 2 {
        return update(model, Msg::Panel(PanelMsg::ResetWidth(handle)));
    }

    let pointer_x = model.to_logical(x);
    update(model, Msg::begin_resize(handle, pointer_x))
}

/// Pointer moved to physical `x`
pub fn handle_mouse_move(model: &mut AppModel, x: f64) -> Option<Cmd> {
    if model.panels.is_dragging() {
        let pointer_x = model.to_logical(x);
        return update(model, Msg::pointer_moved(pointer_x));
    }

    let hovered = model.handle_at(x);
    update(model, Msg::Panel(PanelMsg::HoverHandle(hovered)))
}

/// Left button released anywhere
pub fn handle_mouse_up(model: &mut AppModel) -> Option<Cmd> {
    update(model, Msg::pointer_released())
}

#[cfg(test)]
mod tests {
    use super::*;
    use codexmonitor_layout::commands::CursorStyle;
    use codexmonitor_layout::config::LayoutConfig;
    use codexmonitor_layout::storage::MemoryStore;

    fn model() -> AppModel {
        AppModel::new(
            1200,
            800,
            Box::new(MemoryStore::new()),
            LayoutConfig::default(),
        )
    }

    #[test]
    fn test_press_outside_handles_is_ignored() {
        let mut model = model();
        let mut tracker = ClickTracker::default();
        assert!(handle_mouse_down(&mut model, 600.0, &mut tracker, Instant::now()).is_none());
        assert!(!model.panels.is_dragging());
    }

    #[test]
    fn test_drag_sidebar_border() {
        let mut model = model();
        let mut tracker = ClickTracker::default();

        let cmd = handle_mouse_down(&mut model, 280.0, &mut tracker, Instant::now()).unwrap();
        assert_eq!(cmd.cursor(), Some(CursorStyle::ColResize));

        handle_mouse_move(&mut model, 330.0);
        assert_eq!(model.panels.sidebar_width().get(), 330);

        let cmd = handle_mouse_up(&mut model).unwrap();
        assert_eq!(cmd.cursor(), Some(CursorStyle::Default));
        assert!(!model.panels.is_dragging());
    }

    #[test]
    fn test_drag_uses_logical_coordinates() {
        let mut model = AppModel::new(
            2400,
            1600,
            Box::new(MemoryStore::new()),
            LayoutConfig::default(),
        );
        model.set_scale_factor(2.0);
        let mut tracker = ClickTracker::default();

        // Right panel border at 2400 - 460 = 1940 physical
        handle_mouse_down(&mut model, 1940.0, &mut tracker, Instant::now()).unwrap();
        handle_mouse_move(&mut model, 1840.0);
        assert_eq!(model.panels.right_panel_width().get(), 280);
    }

    #[test]
    fn test_double_click_resets_width() {
        let mut model = model();
        model.panels.set_width(PanelKind::Sidebar, 400.0);
        let mut tracker = ClickTracker::default();
        let t0 = Instant::now();

        handle_mouse_down(&mut model, 400.0, &mut tracker, t0);
        handle_mouse_up(&mut model);
        handle_mouse_down(&mut model, 400.0, &mut tracker, t0 + Duration::from_millis(100));

        assert_eq!(model.panels.sidebar_width().get(), 280);
        assert!(!model.panels.is_dragging());
    }

    #[test]
    fn test_fresh_tracker_counts_first_click_once() {
        let mut tracker = ClickTracker::default();
        assert!(tracker.last_click_time <= Instant::now());
        assert_eq!(tracker.track_handle_click(PanelKind::Sidebar, Instant::now()), 1);
    }

    #[test]
    fn test_slow_second_click_starts_new_drag() {
        let mut tracker = ClickTracker::default();
        let t0 = Instant::now();
        assert_eq!(tracker.track_handle_click(PanelKind::Sidebar, t0), 1);
        assert_eq!(
            tracker.track_handle_click(PanelKind::Sidebar, t0 + Duration::from_millis(500)),
            1
        );
        assert_eq!(
            tracker.track_handle_click(PanelKind::RightPanel, t0 + Duration::from_millis(550)),
            1
        );
    }

    #[test]
    fn test_hover_changes_cursor_only_on_transition() {
        let mut model = model();
        let cmd = handle_mouse_move(&mut model, 281.0).unwrap();
        assert_eq!(cmd.cursor(), Some(CursorStyle::ColResize));
        assert!(handle_mouse_move(&mut model, 282.0).is_none());

        let cmd = handle_mouse_move(&mut model, 600.0).unwrap();
        assert_eq!(cmd.cursor(), Some(CursorStyle::Default));
    }
}
