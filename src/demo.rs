use rand::Rng;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::core::{PixelBuffer, SurfaceHandle};
use crate::error::Result;
use crate::traits::PixelApp;

/// Fills every pixel with a random colour each frame; Escape closes the window
pub struct RandomPixels<R: Rng> {
    rng: R,
    fixed_updates: u64,
    frames: u64,
}

impl RandomPixels<rand::rngs::ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for RandomPixels<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomPixels<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            fixed_updates: 0,
            frames: 0,
        }
    }

    pub fn fixed_updates(&self) -> u64 {
        self.fixed_updates
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl<R: Rng> PixelApp for RandomPixels<R> {
    fn on_load(&mut self, surface: &mut SurfaceHandle) -> Result<()> {
        surface.on_event(|event, ctx| {
            if let WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } = event
            {
                ctx.request_close();
            }
        });

        log::info!(
            "random pixels on a {}x{} buffer, Escape to quit",
            surface.render_size().0,
            surface.render_size().1
        );
        Ok(())
    }

    fn fixed_update(&mut self, _timestep_ms: f32) -> Result<()> {
        self.fixed_updates += 1;
        Ok(())
    }

    fn render(&mut self, pixels: &mut PixelBuffer, _frame_time_ms: f32) -> Result<()> {
        pixels.clear();
        for y in 0..pixels.height() {
            for x in 0..pixels.width() {
                let colour = (self.rng.gen(), self.rng.gen(), self.rng.gen());
                pixels.set(x, y, colour)?;
            }
        }
        self.frames += 1;
        Ok(())
    }
}
