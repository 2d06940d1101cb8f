//! Desktop runner: a winit window with a `pixels` framebuffer.
//!
//! The runtime's frame waker posts a user event to the event loop, which
//! turns it into a redraw. Each redraw drains one frame of animation
//! callbacks, rebuilds the scene from the screen's current state and
//! rasterises it.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use cadence_platform_desktop_winit::DesktopWinitPlatform;
use cadence_render_pixels::PixelsRenderer;
use cadence_runtime_std::StdRuntime;
use log::{debug, error, info};
use pixels::{Pixels, SurfaceTexture};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::app::AnimationScreen;
use crate::config::ScreenConfig;

/// Posted by the runtime whenever it wants another frame.
#[derive(Debug, Clone, Copy)]
struct FrameRequest;

pub struct AppLauncher {
    title: String,
    initial_size: (u32, u32),
    font_path: Option<PathBuf>,
}

impl Default for AppLauncher {
    fn default() -> Self {
        Self {
            title: "Cadence".to_string(),
            initial_size: (480, 900),
            font_path: None,
        }
    }
}

impl AppLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Initial window size in logical pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.initial_size = (width, height);
        self
    }

    /// Font used for all text, overriding `CADENCE_FONT` and the system font search.
    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(path.into());
        self
    }

    pub fn run(self) -> Result<()> {
        let event_loop = EventLoop::<FrameRequest>::with_user_event()
            .build()
            .context("failed to create event loop")?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let renderer = match &self.font_path {
            Some(path) => PixelsRenderer::with_font_file(path)
                .with_context(|| format!("failed to load font {}", path.display()))?,
            None => PixelsRenderer::new(),
        };

        let runtime = StdRuntime::new();
        runtime.set_frame_waker({
            let proxy = event_loop.create_proxy();
            move || {
                let _ = proxy.send_event(FrameRequest);
            }
        });
        let screen = AnimationScreen::new(ScreenConfig::default(), &runtime.runtime_handle());

        let mut app = LanesApp {
            title: self.title,
            initial_size: self.initial_size,
            runtime,
            screen,
            renderer,
            platform: DesktopWinitPlatform::default(),
            window: None,
            pixels: None,
            error: None,
        };
        info!("starting {}", app.title);
        event_loop
            .run_app(&mut app)
            .context("event loop terminated abnormally")?;
        match app.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

struct LanesApp {
    title: String,
    initial_size: (u32, u32),
    runtime: StdRuntime,
    screen: AnimationScreen,
    renderer: PixelsRenderer,
    platform: DesktopWinitPlatform,
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    error: Option<anyhow::Error>,
}

impl LanesApp {
    fn create_surface(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (width, height) = self.initial_size;
        let attributes = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(width as f64, height as f64));
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("failed to create window")?,
        );

        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, Arc::clone(&window));
        let pixels = Pixels::new(size.width.max(1), size.height.max(1), surface_texture)
            .context("failed to create pixel buffer")?;

        self.platform.set_scale_factor(window.scale_factor());
        debug!(
            "surface {}x{} at scale {}",
            size.width,
            size.height,
            window.scale_factor()
        );
        window.request_redraw();
        self.window = Some(window);
        self.pixels = Some(pixels);
        Ok(())
    }

    fn resize(&mut self, size: PhysicalSize<u32>) -> Result<()> {
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }
        let Some(pixels) = self.pixels.as_mut() else {
            return Ok(());
        };
        pixels
            .resize_surface(size.width, size.height)
            .map_err(|err| anyhow!("failed to resize surface: {err}"))?;
        pixels
            .resize_buffer(size.width, size.height)
            .map_err(|err| anyhow!("failed to resize buffer: {err}"))?;
        self.request_redraw();
        Ok(())
    }

    fn redraw(&mut self) -> Result<()> {
        let (Some(window), Some(pixels)) = (self.window.as_ref(), self.pixels.as_mut()) else {
            return Ok(());
        };
        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }

        // Re-arms the waker before callbacks queue the next frame.
        self.runtime.take_frame_request();
        self.runtime.drain_frame();
        let background = self.screen.config().background;
        let context = self.platform.render_context(size, background);
        self.renderer.rebuild_scene(&self.screen.build_tree(), &context);

        let texture = pixels.texture();
        let (width, height) = (texture.width(), texture.height());
        self.renderer.draw(pixels.frame_mut(), width, height);
        pixels.render().context("failed to present frame")?;
        Ok(())
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        error!("{err:#}");
        self.error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler<FrameRequest> for LanesApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.create_surface(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, _event: FrameRequest) {
        self.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Err(err) = self.resize(size) {
                    self.fail(event_loop, err);
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.platform.set_scale_factor(scale_factor);
                self.request_redraw();
            }
            WindowEvent::CursorMoved { position, .. } => {
                let event = self.platform.cursor_moved(position);
                self.renderer.scene().dispatch(event);
            }
            WindowEvent::CursorLeft { .. } => self.platform.cursor_left(),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                if let Some(event) = self.platform.button_event(state) {
                    if self.renderer.scene().dispatch(event) {
                        self.request_redraw();
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.redraw() {
                    self.fail(event_loop, err);
                }
            }
            _ => {}
        }
    }
}
