//! Panel resize controller
//!
//! Owns the sidebar and right panel widths, the (at most one) active drag
//! session, and the global resize affordance. Every width change is written
//! straight through to the backing `WidthStore`.
//!
//! Pointer moves and releases are routed here for the controller's whole
//! lifetime and are ignored unless a drag is active. `dispose()` ends that
//! routing deterministically.

use std::fmt;

use super::drag::{DragSession, DragState};
use super::width::{PanelKind, PanelWidth};
use crate::commands::CursorStyle;
use crate::storage::WidthStore;

/// Global "resize in progress" flag consumed by the view layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResizeAffordance {
    active: bool,
}

impl ResizeAffordance {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Cursor the whole window should show
    pub fn cursor(&self) -> CursorStyle {
        if self.active {
            CursorStyle::ColResize
        } else {
            CursorStyle::Default
        }
    }

    /// Text selection is suppressed while a border is being dragged
    pub fn allows_text_selection(&self) -> bool {
        !self.active
    }
}

/// Widths handed to the view layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub sidebar_width: PanelWidth,
    pub right_panel_width: PanelWidth,
}

pub struct PanelResizeController {
    sidebar_width: PanelWidth,
    right_panel_width: PanelWidth,
    active_drag: Option<DragSession>,
    affordance: ResizeAffordance,
    disposed: bool,
    store: Box<dyn WidthStore>,
}

impl fmt::Debug for PanelResizeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelResizeController")
            .field("sidebar_width", &self.sidebar_width)
            .field("right_panel_width", &self.right_panel_width)
            .field("active_drag", &self.active_drag)
            .field("affordance", &self.affordance)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

impl PanelResizeController {
    /// Restore both widths from `store`.
    ///
    /// Stored records that are missing, malformed or out of range are
    /// normalized and written back, so the store always ends up holding
    /// the widths actually in use.
    pub fn new(store: Box<dyn WidthStore>) -> Self {
        let mut controller = Self {
            sidebar_width: PanelKind::Sidebar.bounds().default_width(),
            right_panel_width: PanelKind::RightPanel.bounds().default_width(),
            active_drag: None,
            affordance: ResizeAffordance::default(),
            disposed: false,
            store,
        };

        for kind in PanelKind::ALL {
            let raw = controller.store.get(kind.storage_key());
            let width = kind.bounds().from_stored(raw.as_deref());
            *controller.width_slot(kind) = width;

            if raw.as_deref() != Some(width.to_stored().as_str()) {
                tracing::debug!(
                    "Normalizing stored {} width {:?} -> {}",
                    kind,
                    raw,
                    width
                );
                controller.persist(kind, width);
            }
        }

        tracing::info!(
            "Restored panel widths: sidebar={}, right panel={}",
            controller.sidebar_width,
            controller.right_panel_width
        );
        controller
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn sidebar_width(&self) -> PanelWidth {
        self.sidebar_width
    }

    pub fn right_panel_width(&self) -> PanelWidth {
        self.right_panel_width
    }

    pub fn width(&self, kind: PanelKind) -> PanelWidth {
        match kind {
            PanelKind::Sidebar => self.sidebar_width,
            PanelKind::RightPanel => self.right_panel_width,
        }
    }

    pub fn layout(&self) -> PanelLayout {
        PanelLayout {
            sidebar_width: self.sidebar_width,
            right_panel_width: self.right_panel_width,
        }
    }

    pub fn state(&self) -> DragState {
        if self.disposed {
            DragState::Disposed
        } else {
            match self.active_drag {
                Some(session) => DragState::Dragging(session.target),
                None => DragState::Idle,
            }
        }
    }

    pub fn active_drag(&self) -> Option<&DragSession> {
        self.active_drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.active_drag.is_some()
    }

    pub fn affordance(&self) -> ResizeAffordance {
        self.affordance
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Read-only access to the backing store
    pub fn store(&self) -> &dyn WidthStore {
        self.store.as_ref()
    }

    // =========================================================================
    // Drag lifecycle
    // =========================================================================

    /// Start dragging the border of `target`.
    ///
    /// Any existing session is replaced: only one handle can be held at a
    /// time. Returns `false` once the controller has been disposed.
    pub fn begin_resize(&mut self, target: PanelKind, pointer_x: f64) -> bool {
        if self.disposed {
            return false;
        }
        if let Some(previous) = self.active_drag {
            tracing::debug!("Replacing {} drag session", previous.target);
        }

        let session = DragSession::new(target, pointer_x, self.width(target));
        tracing::debug!(
            "Begin {} resize at x={} from {}",
            target,
            pointer_x,
            session.start_width
        );
        self.active_drag = Some(session);
        self.affordance.active = true;
        true
    }

    /// Handler for the sidebar's drag handle
    pub fn on_sidebar_resize_start(&mut self, pointer_x: f64) -> bool {
        self.begin_resize(PanelKind::Sidebar, pointer_x)
    }

    /// Handler for the right panel's drag handle
    pub fn on_right_panel_resize_start(&mut self, pointer_x: f64) -> bool {
        self.begin_resize(PanelKind::RightPanel, pointer_x)
    }

    /// Track the pointer during a drag. Returns whether a width changed.
    pub fn on_pointer_move(&mut self, pointer_x: f64) -> bool {
        let Some(session) = self.active_drag else {
            return false;
        };
        self.write_width(session.target, session.width_at(pointer_x))
    }

    /// Finish the current drag. Returns whether a session was active.
    pub fn end_resize(&mut self) -> bool {
        let Some(session) = self.active_drag.take() else {
            return false;
        };
        self.affordance.active = false;
        tracing::debug!(
            "End {} resize at {}",
            session.target,
            self.width(session.target)
        );
        true
    }

    // =========================================================================
    // External updates
    // =========================================================================

    /// Set a width from outside a drag; the value is clamped.
    pub fn set_width(&mut self, kind: PanelKind, value: f64) -> bool {
        if self.disposed {
            return false;
        }
        self.write_width(kind, kind.bounds().clamp(value))
    }

    /// Restore a panel to its default width
    pub fn reset_width(&mut self, kind: PanelKind) -> bool {
        if self.disposed {
            return false;
        }
        self.write_width(kind, kind.bounds().default_width())
    }

    /// Tear down: drop any drag, clear the affordance and stop reacting to
    /// further input. Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.end_resize();
        self.disposed = true;
        tracing::debug!("Panel resize controller disposed");
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn width_slot(&mut self, kind: PanelKind) -> &mut PanelWidth {
        match kind {
            PanelKind::Sidebar => &mut self.sidebar_width,
            PanelKind::RightPanel => &mut self.right_panel_width,
        }
    }

    fn write_width(&mut self, kind: PanelKind, width: PanelWidth) -> bool {
        let slot = self.width_slot(kind);
        if *slot == width {
            return false;
        }
        *slot = width;
        self.persist(kind, width);
        true
    }

    fn persist(&mut self, kind: PanelKind, width: PanelWidth) {
        if let Err(e) = self.store.set(kind.storage_key(), &width.to_stored()) {
            tracing::warn!("Failed to persist {} width {}: {}", kind, width, e);
        }
    }
}
