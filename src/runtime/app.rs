use std::rc::Rc;
use std::time::Instant;

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{CursorIcon, Window, WindowId};

use codexmonitor_layout::cli::{StartupConfig, StoreLocation};
use codexmonitor_layout::commands::{Cmd, CursorStyle};
use codexmonitor_layout::config::LayoutConfig;
use codexmonitor_layout::messages::{AppMsg, Msg, PanelMsg};
use codexmonitor_layout::model::AppModel;
use codexmonitor_layout::panel::PanelKind;
use codexmonitor_layout::storage::{FileStore, MemoryStore, WidthStore};
use codexmonitor_layout::update::update;

use super::mouse::{handle_mouse_down, handle_mouse_move, handle_mouse_up, ClickTracker};
use crate::view::Renderer;

pub struct App {
    model: AppModel,
    initial_size: (u32, u32),
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    /// Last physical cursor x, tracked from `CursorMoved`
    cursor_x: Option<f64>,
    click_tracker: ClickTracker,
}

/// Open the width store selected on the command line
fn open_store(location: &StoreLocation) -> Box<dyn WidthStore> {
    match location {
        StoreLocation::Memory => Box::new(MemoryStore::new()),
        StoreLocation::File(path) => Box::new(FileStore::open(path)),
        StoreLocation::Default => match FileStore::open_default() {
            Ok(store) => Box::new(store),
            Err(e) => {
                tracing::warn!("Falling back to in-memory panel widths: {}", e);
                Box::new(MemoryStore::new())
            }
        },
    }
}

fn cursor_icon(style: CursorStyle) -> CursorIcon {
    match style {
        CursorStyle::Default => CursorIcon::Default,
        CursorStyle::ColResize => CursorIcon::ColResize,
    }
}

impl App {
    pub fn new(startup_config: StartupConfig, config: LayoutConfig) -> Self {
        let (width, height) = startup_config.window_size;
        let store = open_store(&startup_config.store);
        let mut model = AppModel::new(width, height, store, config);

        if startup_config.reset_widths {
            for kind in PanelKind::ALL {
                update(&mut model, Msg::Panel(PanelMsg::ResetWidth(kind)));
            }
        }

        Self {
            model,
            initial_size: startup_config.window_size,
            renderer: None,
            window: None,
            context: None,
            cursor_x: None,
            click_tracker: ClickTracker::default(),
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (width, height) = self.initial_size;
        let window_attributes = Window::default_attributes()
            .with_title("CodexMonitor")
            .with_inner_size(LogicalSize::new(width, height));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create softbuffer context: {}", e))?;

        let size = window.inner_size();
        update(
            &mut self.model,
            Msg::App(AppMsg::ScaleFactorChanged(window.scale_factor())),
        );
        update(&mut self.model, Msg::resize(size.width, size.height));

        self.renderer = Some(Renderer::new(Rc::clone(&window), &context)?);
        window.request_redraw();
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => update(
                &mut self.model,
                Msg::App(AppMsg::Resize(size.width, size.height)),
            ),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => update(
                &mut self.model,
                Msg::App(AppMsg::ScaleFactorChanged(*scale_factor)),
            ),
            WindowEvent::CursorMoved { position, .. } => {
                handle_mouse_move(&mut self.model, position.x)
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    let x = self.cursor_x?;
                    handle_mouse_down(&mut self.model, x, &mut self.click_tracker, Instant::now())
                }
                ElementState::Released => handle_mouse_up(&mut self.model),
            },
            WindowEvent::Focused(false) => {
                update(&mut self.model, Msg::Panel(PanelMsg::FocusLost))
            }
            WindowEvent::CloseRequested => update(&mut self.model, Msg::App(AppMsg::Quit)),
            _ => None,
        }
    }

    fn render(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&self.model)?;
        }
        Ok(())
    }

    /// Apply side effects; returns true when the event loop should exit
    fn process_cmd(&self, cmd: Cmd) -> bool {
        match cmd {
            Cmd::None | Cmd::Redraw => false,
            Cmd::SetCursor(style) => {
                if let Some(window) = &self.window {
                    window.set_cursor(cursor_icon(style));
                }
                false
            }
            Cmd::Batch(cmds) => cmds
                .into_iter()
                .fold(false, |quit, cmd| self.process_cmd(cmd) || quit),
            Cmd::Quit => true,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("Failed to create window: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };
        if window_id != window.id() {
            return;
        }

        if let WindowEvent::CursorMoved { position, .. } = &event {
            self.cursor_x = Some(position.x);
        }

        if let WindowEvent::RedrawRequested = event {
            if let Err(e) = self.render() {
                tracing::error!("Render failed: {:#}", e);
            }
            return;
        }

        if let Some(cmd) = self.handle_event(&event) {
            let needs_redraw = cmd.needs_redraw();
            if self.process_cmd(cmd) {
                event_loop.exit();
                return;
            }
            if needs_redraw {
                window.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Purely input-driven: nothing animates between events
        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.model.panels.dispose();
    }
}
