use std::fmt;

use winit::event::WindowEvent;

use crate::config::WindowConfig;

/// Passed to event handlers so they can ask for the surface to close
#[derive(Debug, Default)]
pub struct EventCtx {
    close_requested: bool,
}

impl EventCtx {
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }
}

type EventHandler = Box<dyn FnMut(&WindowEvent, &mut EventCtx)>;

/// Host-facing view of the surface, handed to `PixelApp::on_load`
///
/// Handlers registered with `on_event` see every pumped window event in
/// registration order. `CloseRequested` always closes the surface after the
/// handlers have run.
pub struct SurfaceHandle {
    title: String,
    surface_size: (u32, u32),
    render_size: (u32, u32),
    pixel_scale: u32,
    handlers: Vec<EventHandler>,
    close_requested: bool,
}

impl SurfaceHandle {
    pub fn new(config: &WindowConfig) -> Self {
        Self {
            title: config.title.clone(),
            surface_size: (config.width, config.height),
            render_size: config.render_size(),
            pixel_scale: config.pixel_scale,
            handlers: Vec::new(),
            close_requested: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Surface size in screen pixels
    pub fn surface_size(&self) -> (u32, u32) {
        self.surface_size
    }

    /// Pixel buffer size
    pub fn render_size(&self) -> (u32, u32) {
        self.render_size
    }

    pub fn pixel_scale(&self) -> u32 {
        self.pixel_scale
    }

    /// Register a window event handler
    pub fn on_event(&mut self, handler: impl FnMut(&WindowEvent, &mut EventCtx) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Close the surface at the end of the current event pump
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Run handlers for one event; returns true once a close has been requested
    pub fn dispatch(&mut self, event: &WindowEvent) -> bool {
        let mut ctx = EventCtx::default();
        for handler in &mut self.handlers {
            handler(event, &mut ctx);
        }

        if ctx.close_requested || matches!(event, WindowEvent::CloseRequested) {
            self.close_requested = true;
        }
        self.close_requested
    }
}

impl fmt::Debug for SurfaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceHandle")
            .field("title", &self.title)
            .field("surface_size", &self.surface_size)
            .field("render_size", &self.render_size)
            .field("pixel_scale", &self.pixel_scale)
            .field("handlers", &self.handlers.len())
            .field("close_requested", &self.close_requested)
            .finish()
    }
}
