pub mod cli;
pub mod config;
pub mod core;
pub mod demo;
pub mod error;
pub mod logging;
pub mod traits;

pub use config::WindowConfig;
pub use crate::core::{LoopState, PixelBuffer, PixelWindow, SurfaceHandle, WinitSurface};
pub use error::{PixelWindowError, Result};
pub use traits::{FrameSource, PixelApp, Presenter};
