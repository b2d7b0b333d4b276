use winit::event::WindowEvent;

use crate::core::PixelBuffer;
use crate::error::Result;

/// Display backend that owns the surface and puts the pixel buffer on screen
pub trait Presenter {
    /// Deliver pending window events to `sink` without blocking
    fn pump_events(&mut self, sink: &mut dyn FnMut(WindowEvent)) -> Result<()>;

    /// False once the surface has been closed
    fn is_open(&self) -> bool;

    /// Close the surface; `is_open` returns false afterwards
    fn close(&mut self);

    /// Prepare the presentation target for a new frame
    fn pre_render(&mut self) -> Result<()>;

    /// Upload the buffer and display it
    fn present(&mut self, pixels: &PixelBuffer) -> Result<()>;

    fn set_title(&mut self, title: &str);
}
