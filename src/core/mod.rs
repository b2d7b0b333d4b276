pub mod clock;
pub mod driver;
pub mod gpu_context;
pub mod perf;
pub mod pixel_buffer;
pub mod surface;
pub mod surface_renderer;
pub mod timer;
pub mod winit_surface;

pub use clock::FrameClock;
pub use driver::{IterationOutcome, LoopState, PixelWindow};
pub use gpu_context::GpuContext;
pub use perf::{PerfReport, PerfStats, Phase, DIAGNOSTIC_INTERVAL_MS};
pub use pixel_buffer::{PixelBuffer, Rgb, BYTES_PER_PIXEL};
pub use surface::{EventCtx, SurfaceHandle};
pub use surface_renderer::SurfaceRenderer;
pub use timer::{FixedStep, FrameLimiter};
pub use winit_surface::WinitSurface;
