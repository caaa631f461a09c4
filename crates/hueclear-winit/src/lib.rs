//! Winit graphical back-end for hueclear.
//!
//! Paints the [`Scene`](hueclear_core::Scene) in a native window using:
//! - [`winit`] for window creation and input events
//! - [`softbuffer`] for CPU-based pixel rendering
//!
//! The status text of each scene is shown in the window title.
//!
//! # Usage
//!
//! ```rust,no_run
//! use hueclear_winit::{WinitDriver, WinitConfig};
//! use hueclear_core::app::{AppRunner, EventLoopDriver};
//!
//! let driver = WinitDriver::new(WinitConfig::default());
//! // let runner = AppRunner::new(Box::new(my_model));
//! // driver.run(runner).unwrap();
//! ```

mod input;
mod renderer;

use std::num::NonZeroU32;
use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalPosition, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::ModifiersState,
    window::{Window, WindowId},
};

use hueclear_core::{
    app::{AppRunner, EventLoopDriver},
    geom::Viewport,
    messages::Msg,
};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for the winit driver.
pub struct WinitConfig {
    /// Window title; the scene status is appended to it.
    pub title: String,
    /// Initial inner width in logical pixels.
    pub width: u32,
    /// Initial inner height in logical pixels.
    pub height: u32,
}

impl Default for WinitConfig {
    fn default() -> Self {
        Self {
            title: "hueclear".into(),
            width: 600,
            height: 600,
        }
    }
}

// ---------------------------------------------------------------------------
// WinitDriver
// ---------------------------------------------------------------------------

/// Winit-based graphical driver.
///
/// Implements [`EventLoopDriver`]: it owns the main-thread event loop and
/// drives an [`AppRunner`].
pub struct WinitDriver {
    config: WinitConfig,
}

impl WinitDriver {
    pub fn new(config: WinitConfig) -> Self {
        Self { config }
    }
}

impl EventLoopDriver for WinitDriver {
    fn run(self, runner: AppRunner) -> Result<(), Box<dyn std::error::Error>> {
        let event_loop = EventLoop::new()?;
        let mut app = WinitApp::new(self.config, runner);
        event_loop.run_app(&mut app)?;
        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// WinitApp — ApplicationHandler
// ---------------------------------------------------------------------------

struct WinitApp {
    config: WinitConfig,
    runner: AppRunner,
    state: Option<WinitState>,
    cursor: Option<PhysicalPosition<f64>>,
    modifiers: ModifiersState,
    /// Fatal error raised inside a callback, reported once the loop exits.
    error: Option<Box<dyn std::error::Error>>,
}

struct WinitState {
    window: Arc<Window>,
    surface: softbuffer::Surface<Arc<Window>, Arc<Window>>,
    viewport: Viewport,
    title: String,
}

impl WinitApp {
    fn new(config: WinitConfig, runner: AppRunner) -> Self {
        Self {
            config,
            runner,
            state: None,
            cursor: None,
            modifiers: ModifiersState::empty(),
            error: None,
        }
    }

    fn create_state(
        &self,
        event_loop: &ActiveEventLoop,
    ) -> Result<WinitState, Box<dyn std::error::Error>> {
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height))
            .with_resizable(true);
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let context = softbuffer::Context::new(window.clone())?;
        let mut surface = softbuffer::Surface::new(&context, window.clone())?;

        let PhysicalSize { width, height } = window.inner_size();
        resize_surface(&mut surface, width, height);

        Ok(WinitState {
            window,
            surface,
            viewport: Viewport::new(width, height),
            title: self.config.title.clone(),
        })
    }

    fn render(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        if self.runner.should_quit() {
            return;
        }

        self.runner.draw_frame();
        let scene = self.runner.scene();

        let title = if scene.status.is_empty() {
            self.config.title.clone()
        } else {
            format!("{} | {}", self.config.title, scene.status)
        };
        if title != state.title {
            state.window.set_title(&title);
            state.title = title;
        }

        if state.viewport.is_empty() {
            return;
        }
        let mut buf = match state.surface.buffer_mut() {
            Ok(b) => b,
            Err(e) => {
                log::warn!("softbuffer surface unavailable: {e}");
                return;
            }
        };
        renderer::paint(scene, state.viewport, &mut buf);
        if let Err(e) = buf.present() {
            log::warn!("failed to present frame: {e}");
        }
    }

    fn request_redraw(&self) {
        if let Some(state) = self.state.as_ref() {
            state.window.request_redraw();
        }
    }

    /// Forward a message, leaving the loop once the model asks to stop.
    fn dispatch(&mut self, msg: Msg, event_loop: &ActiveEventLoop) {
        self.runner.handle_msg(msg);
        if self.runner.should_quit() {
            event_loop.exit();
            return;
        }
        self.request_redraw();
    }
}

fn resize_surface(
    surface: &mut softbuffer::Surface<Arc<Window>, Arc<Window>>,
    width: u32,
    height: u32,
) {
    let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
        return;
    };
    if let Err(e) = surface.resize(w, h) {
        log::warn!("failed to resize surface to {width}x{height}: {e}");
    }
}

impl ApplicationHandler for WinitApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return; // already initialized
        }

        match self.create_state(event_loop) {
            Ok(state) => {
                log::debug!(
                    "window created at {}x{}",
                    state.viewport.width,
                    state.viewport.height
                );
                self.state = Some(state);
            }
            Err(e) => {
                log::error!("failed to open window: {e}");
                self.error = Some(e);
                event_loop.exit();
                return;
            }
        }

        self.runner.init();
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.runner.handle_msg(Msg::Quit);
                event_loop.exit();
            }

            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if let Some(state) = self.state.as_mut() {
                    resize_surface(&mut state.surface, width, height);
                    state.viewport = Viewport::new(width, height);
                }
                self.dispatch(Msg::Resize, event_loop);
            }

            WindowEvent::RedrawRequested => {
                self.render();
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(msg) = input::translate_keyboard(&event, self.modifiers) {
                    self.dispatch(msg, event_loop);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(position);
            }

            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
            }

            WindowEvent::MouseInput {
                state: btn_state,
                button,
                ..
            } => {
                let viewport = self.state.as_ref().map(|s| s.viewport).unwrap_or_default();
                if let Some(msg) =
                    input::translate_mouse_button(btn_state, button, self.cursor, viewport)
                {
                    self.dispatch(msg, event_loop);
                }
            }

            _ => {}
        }
    }
}
