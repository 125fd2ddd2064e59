//! Window geometry for the three-column layout
//!
//! Computes the sidebar, main content, and right panel rectangles from the
//! current panel widths, and hit-tests the two resize handles. All inputs
//! and outputs are in physical pixels unless stated otherwise.

use crate::panel::{PanelKind, PanelLayout};

/// Axis-aligned rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Resolved column rectangles for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnRects {
    pub sidebar: Rect,
    pub main: Rect,
    pub right_panel: Rect,
}

impl ColumnRects {
    /// Lay out the columns in a window of `window_size` physical pixels.
    ///
    /// Side panels keep their width even when the window is too narrow for
    /// both; the main column shrinks to zero and the right panel is clipped
    /// by the frame.
    pub fn compute(layout: &PanelLayout, window_size: (u32, u32), scale_factor: f64) -> Self {
        let (window_width, window_height) = (window_size.0 as f32, window_size.1 as f32);
        let sidebar_width = layout.sidebar_width.physical(scale_factor);
        let right_width = layout.right_panel_width.physical(scale_factor);

        let right_x = (window_width - right_width).max(sidebar_width);
        let main_width = (right_x - sidebar_width).max(0.0);

        Self {
            sidebar: Rect::new(0.0, 0.0, sidebar_width, window_height),
            main: Rect::new(sidebar_width, 0.0, main_width, window_height),
            right_panel: Rect::new(right_x, 0.0, right_width, window_height),
        }
    }

    /// X coordinate of the border a panel's handle sits on
    pub fn border_x(&self, kind: PanelKind) -> f32 {
        match kind {
            PanelKind::Sidebar => self.sidebar.right(),
            PanelKind::RightPanel => self.right_panel.x,
        }
    }

    /// Rectangle drawn for a panel's handle, `thickness` pixels wide and
    /// centered on its border
    pub fn handle_rect(&self, kind: PanelKind, thickness: f32) -> Rect {
        Rect::new(
            self.border_x(kind) - thickness / 2.0,
            0.0,
            thickness,
            self.sidebar.height,
        )
    }
}

/// Hit-test the resize handles.
///
/// Returns the panel whose border lies within `hit_zone` pixels of `x`.
/// When the two borders overlap (very narrow window) the closer one wins,
/// with the sidebar taking ties.
pub fn hit_test_resize_handle(rects: &ColumnRects, x: f64, hit_zone: f64) -> Option<PanelKind> {
    PanelKind::ALL
        .into_iter()
        .map(|kind| (kind, (x - f64::from(rects.border_x(kind))).abs()))
        .filter(|&(_, distance)| distance <= hit_zone)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(kind, _)| kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::PanelBounds;

    fn default_layout() -> PanelLayout {
        PanelLayout {
            sidebar_width: PanelBounds::SIDEBAR.default_width(),
            right_panel_width: PanelBounds::RIGHT_PANEL.default_width(),
        }
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains(10.0, 10.0));
        assert!(r.contains(29.9, 29.9));
        assert!(!r.contains(30.0, 15.0));
        assert!(!r.contains(9.9, 15.0));
    }

    #[test]
    fn test_compute_columns_at_scale_one() {
        let rects = ColumnRects::compute(&default_layout(), (1200, 800), 1.0);
        assert_eq!(rects.sidebar, Rect::new(0.0, 0.0, 280.0, 800.0));
        assert_eq!(rects.right_panel, Rect::new(970.0, 0.0, 230.0, 800.0));
        assert_eq!(rects.main, Rect::new(280.0, 0.0, 690.0, 800.0));
    }

    #[test]
    fn test_compute_columns_applies_scale_factor() {
        let rects = ColumnRects::compute(&default_layout(), (2400, 1600), 2.0);
        assert_eq!(rects.sidebar.width, 560.0);
        assert_eq!(rects.right_panel.x, 1940.0);
    }

    #[test]
    fn test_narrow_window_collapses_main() {
        let rects = ColumnRects::compute(&default_layout(), (400, 300), 1.0);
        assert_eq!(rects.main.width, 0.0);
        assert_eq!(rects.right_panel.x, 280.0);
    }

    #[test]
    fn test_hit_test_handles() {
        let rects = ColumnRects::compute(&default_layout(), (1200, 800), 1.0);
        assert_eq!(
            hit_test_resize_handle(&rects, 282.0, 4.0),
            Some(PanelKind::Sidebar)
        );
        assert_eq!(
            hit_test_resize_handle(&rects, 967.0, 4.0),
            Some(PanelKind::RightPanel)
        );
        assert_eq!(hit_test_resize_handle(&rects, 600.0, 4.0), None);
        assert_eq!(hit_test_resize_handle(&rects, 285.0, 4.0), None);
    }

    #[test]
    fn test_hit_test_overlapping_borders_prefers_closer() {
        // Main column collapsed: both borders sit at x=280
        let rects = ColumnRects::compute(&default_layout(), (400, 300), 1.0);
        assert_eq!(
            hit_test_resize_handle(&rects, 280.0, 4.0),
            Some(PanelKind::Sidebar)
        );
    }

    #[test]
    fn test_handle_rect_centered_on_border() {
        let rects = ColumnRects::compute(&default_layout(), (1200, 800), 1.0);
        let handle = rects.handle_rect(PanelKind::Sidebar, 4.0);
        assert_eq!(handle, Rect::new(278.0, 0.0, 4.0, 800.0));
    }
}
