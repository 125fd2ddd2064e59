//! Application model - the complete state of the layout shell
//!
//! Follows the Elm Architecture pattern: the model is only mutated by
//! `update::update` in response to messages.

use crate::config::LayoutConfig;
use crate::layout::{hit_test_resize_handle, ColumnRects};
use crate::panel::{PanelKind, PanelResizeController};
use crate::storage::WidthStore;

/// Top-level application state
#[derive(Debug)]
pub struct AppModel {
    /// Panel widths and drag state
    pub panels: PanelResizeController,
    /// User configuration
    pub config: LayoutConfig,
    /// Window dimensions in physical pixels
    pub window_size: (u32, u32),
    /// Display scale factor (physical / logical)
    pub scale_factor: f64,
    /// Handle under the pointer while idle, for hover highlighting
    pub hovered_handle: Option<PanelKind>,
}

impl AppModel {
    /// Create a model for a window of the given physical size
    pub fn new(
        window_width: u32,
        window_height: u32,
        store: Box<dyn WidthStore>,
        config: LayoutConfig,
    ) -> Self {
        Self {
            panels: PanelResizeController::new(store),
            config,
            window_size: (window_width, window_height),
            scale_factor: 1.0,
            hovered_handle: None,
        }
    }

    /// Update window dimensions
    pub fn resize(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
    }

    /// Update the scale factor; non-positive or non-finite values are ignored
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor.is_finite() && scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        } else {
            tracing::warn!("Ignoring invalid scale factor {}", scale_factor);
        }
    }

    /// Column rectangles for the current widths, in physical pixels
    pub fn column_rects(&self) -> ColumnRects {
        ColumnRects::compute(&self.panels.layout(), self.window_size, self.scale_factor)
    }

    /// Resize handle under a physical x coordinate
    pub fn handle_at(&self, physical_x: f64) -> Option<PanelKind> {
        hit_test_resize_handle(
            &self.column_rects(),
            physical_x,
            self.config.handle_hit_zone * self.scale_factor,
        )
    }

    /// Convert a physical x coordinate to logical pixels
    pub fn to_logical(&self, physical_x: f64) -> f64 {
        physical_x / self.scale_factor
    }
}
