//! View module - software rendering of the three-column layout
//!
//! Draws the sidebar, main area, right panel and the two resize handles
//! into a softbuffer surface.

pub mod frame;

pub use frame::Frame;

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::Result;
use softbuffer::Surface;
use winit::window::Window;

use codexmonitor_layout::model::AppModel;
use codexmonitor_layout::panel::{DragState, PanelKind};

const BACKGROUND: u32 = 0xFF1E1F22;
const SIDEBAR_BG: u32 = 0xFF2B2D30;
const RIGHT_PANEL_BG: u32 = 0xFF2B2D30;
const HANDLE: u32 = 0xFF393B40;
const HANDLE_HOVER: u32 = 0xFF4E5157;
const HANDLE_ACTIVE: u32 = 0xFF3574F0;

/// Handle thickness in logical pixels
const HANDLE_THICKNESS: f32 = 2.0;

pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Softbuffer doesn't guarantee buffer contents are preserved between
    /// frames, so we draw into our own buffer and copy on present.
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &softbuffer::Context<Rc<Window>>) -> Result<Self> {
        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;
        resize_surface(&mut surface, width, height)?;

        Ok(Self {
            surface,
            back_buffer: vec![0u32; (width as usize) * (height as usize)],
            width,
            height,
        })
    }

    pub fn render(&mut self, model: &AppModel) -> Result<()> {
        let (width, height) = (model.window_size.0.max(1), model.window_size.1.max(1));
        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.back_buffer
                .resize((width as usize) * (height as usize), 0);
            resize_surface(&mut self.surface, width, height)?;
        }

        {
            let mut frame = Frame::new(&mut self.back_buffer, width as usize, height as usize);
            let rects = model.column_rects();

            frame.clear(BACKGROUND);
            frame.fill_rect(rects.sidebar, SIDEBAR_BG);
            frame.fill_rect(rects.right_panel, RIGHT_PANEL_BG);

            let thickness = HANDLE_THICKNESS * model.scale_factor as f32;
            for kind in PanelKind::ALL {
                frame.fill_rect(rects.handle_rect(kind, thickness), handle_color(model, kind));
            }
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;
        buffer.copy_from_slice(&self.back_buffer);
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;

        Ok(())
    }
}

fn resize_surface(
    surface: &mut Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
        anyhow::bail!("Surface size must be non-zero, got {}x{}", width, height);
    };
    surface
        .resize(w, h)
        .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))
}

fn handle_color(model: &AppModel, kind: PanelKind) -> u32 {
    if model.panels.state() == DragState::Dragging(kind) {
        HANDLE_ACTIVE
    } else if model.hovered_handle == Some(kind) {
        HANDLE_HOVER
    } else {
        HANDLE
    }
}
