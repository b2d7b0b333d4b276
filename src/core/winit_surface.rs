use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalSize, Size};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowAttributes, WindowId};

use super::pixel_buffer::PixelBuffer;
use super::surface_renderer::SurfaceRenderer;
use super::timer::FrameLimiter;
use crate::config::WindowConfig;
use crate::error::{PixelWindowError, Result};
use crate::traits::Presenter;

/// Pumps spent waiting for the platform to hand us a window
const OPEN_ATTEMPTS: u32 = 500;
const OPEN_POLL: Duration = Duration::from_millis(10);

/// Presenter backed by a winit window and a wgpu surface
///
/// The event loop is pumped once per iteration instead of being handed
/// control, so the pixel window loop stays in charge of timing.
pub struct WinitSurface {
    event_loop: EventLoop<()>,
    window: Arc<Window>,
    renderer: SurfaceRenderer,
    limiter: FrameLimiter,
    last_present: Instant,
    open: bool,
}

/// Event handler for one pump call
struct Pump<'a> {
    pending: Option<WindowAttributes>,
    window: Option<Arc<Window>>,
    error: Option<PixelWindowError>,
    resized: Option<PhysicalSize<u32>>,
    sink: &'a mut dyn FnMut(WindowEvent),
}

impl<'a> Pump<'a> {
    fn new(sink: &'a mut dyn FnMut(WindowEvent)) -> Self {
        Self {
            pending: None,
            window: None,
            error: None,
            resized: None,
            sink,
        }
    }
}

impl ApplicationHandler for Pump<'_> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(attributes) = self.pending.take() else {
            return;
        };

        match event_loop.create_window(attributes) {
            Ok(window) => self.window = Some(Arc::new(window)),
            Err(e) => {
                self.error = Some(PixelWindowError::presentation(format!(
                    "failed to create window: {}",
                    e
                )))
            }
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if let WindowEvent::Resized(size) = event {
            self.resized = Some(size);
        }
        (self.sink)(event);
    }
}

impl WinitSurface {
    /// Open a window of `config.width x config.height` physical pixels
    pub fn new(config: &WindowConfig) -> Result<Self> {
        config.validate()?;

        let mut event_loop = EventLoop::new()
            .map_err(|e| PixelWindowError::presentation(format!("failed to create event loop: {}", e)))?;

        let attributes = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(Size::Physical(PhysicalSize::new(config.width, config.height)))
            .with_resizable(false);

        let mut ignore = |_event: WindowEvent| {};
        let mut pump = Pump::new(&mut ignore);
        pump.pending = Some(attributes);

        let mut attempts = 0;
        while pump.window.is_none() && pump.error.is_none() {
            if let PumpStatus::Exit(code) = event_loop.pump_app_events(Some(OPEN_POLL), &mut pump) {
                return Err(PixelWindowError::presentation(format!(
                    "event loop exited with code {} before the window opened",
                    code
                )));
            }

            attempts += 1;
            if attempts >= OPEN_ATTEMPTS {
                return Err(PixelWindowError::presentation("timed out waiting for the window to open"));
            }
        }

        if let Some(err) = pump.error.take() {
            return Err(err);
        }
        let window = pump
            .window
            .take()
            .ok_or_else(|| PixelWindowError::presentation("window was not created"))?;

        let renderer = SurfaceRenderer::new(window.clone(), config.render_size(), config.pixel_scale)?;

        log::info!(
            "opened {}x{} window at scale {}",
            config.width,
            config.height,
            config.pixel_scale
        );

        Ok(Self {
            event_loop,
            window,
            renderer,
            limiter: FrameLimiter::new(config.framerate_limit),
            last_present: Instant::now(),
            open: true,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl Presenter for WinitSurface {
    fn pump_events(&mut self, sink: &mut dyn FnMut(WindowEvent)) -> Result<()> {
        if !self.open {
            return Ok(());
        }

        let mut pump = Pump::new(sink);
        let status = self.event_loop.pump_app_events(Some(Duration::ZERO), &mut pump);
        let resized = pump.resized;

        if let Some(size) = resized {
            self.renderer.resize(size.width, size.height);
        }
        if let PumpStatus::Exit(code) = status {
            log::debug!("event loop exited with code {}", code);
            self.open = false;
        }
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn close(&mut self) {
        if self.open {
            self.open = false;
            self.window.set_visible(false);
        }
    }

    fn pre_render(&mut self) -> Result<()> {
        if !self.open {
            return Ok(());
        }
        self.renderer.acquire()?;
        Ok(())
    }

    fn present(&mut self, pixels: &PixelBuffer) -> Result<()> {
        if !self.open {
            return Ok(());
        }
        self.renderer.render(pixels)?;

        if let Some(wait) = self.limiter.remaining(self.last_present.elapsed().as_secs_f64() * 1000.0) {
            std::thread::sleep(wait);
        }
        self.last_present = Instant::now();
        Ok(())
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }
}
