pub type Result<T> = std::result::Result<T, PixelWindowError>;

/// Errors raised while configuring, drawing into, or presenting a pixel window
#[derive(thiserror::Error, Debug)]
pub enum PixelWindowError {
    /// Invalid construction parameters, rejected before the window exists
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Pixel coordinate outside the buffer
    #[error("pixel ({x}, {y}) out of range for {width}x{height} buffer")]
    OutOfRange { x: u32, y: u32, width: u32, height: u32 },

    /// The display backend could not create or update the surface
    #[error("presentation error: {0}")]
    Presentation(String),
}

impl PixelWindowError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn presentation(msg: impl Into<String>) -> Self {
        Self::Presentation(msg.into())
    }
}
