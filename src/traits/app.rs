use crate::core::{PixelBuffer, SurfaceHandle};
use crate::error::Result;

/// Host application driven by the pixel window loop
///
/// All four callbacks run on the loop thread, one after another. Returning an
/// error stops the loop and hands the error back to the caller of `run`.
pub trait PixelApp {
    /// Called once after the surface exists and before the first iteration.
    /// Register event handlers on `surface` here.
    fn on_load(&mut self, _surface: &mut SurfaceHandle) -> Result<()> {
        Ok(())
    }

    /// Called once per iteration with the measured frame time in ms
    fn update(&mut self, _frame_time_ms: f32) -> Result<()> {
        Ok(())
    }

    /// Called zero or more times per iteration, always with the configured timestep in ms
    fn fixed_update(&mut self, _timestep_ms: f32) -> Result<()> {
        Ok(())
    }

    /// Write this frame's pixels. The buffer is not cleared between frames;
    /// call `pixels.clear()` first for a blank frame. The borrow ends when
    /// this returns, after which the buffer is presented.
    fn render(&mut self, pixels: &mut PixelBuffer, frame_time_ms: f32) -> Result<()>;
}
