use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PixelWindowError, Result};

pub const DEFAULT_TITLE: &str = "Title";
pub const DEFAULT_FIXED_TIMESTEP_MS: f32 = 20.0;
pub const DEFAULT_FRAMERATE_LIMIT: u32 = 300;
pub const DEFAULT_MAX_FIXED_STEPS: u8 = 10;

/// Construction parameters for a pixel window
///
/// `width`/`height` are the surface size in screen pixels. Each texel of the
/// pixel buffer covers `pixel_scale x pixel_scale` screen pixels, so the buffer
/// is `width / pixel_scale` by `height / pixel_scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub pixel_scale: u32,
    pub title: String,
    pub fixed_timestep_ms: f32,
    /// Frames per second cap, 0 = unlimited
    pub framerate_limit: u32,
    pub max_fixed_steps: u8,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 576,
            pixel_scale: 8,
            title: "Big pixels".to_string(),
            fixed_timestep_ms: DEFAULT_FIXED_TIMESTEP_MS,
            framerate_limit: DEFAULT_FRAMERATE_LIMIT,
            max_fixed_steps: DEFAULT_MAX_FIXED_STEPS,
        }
    }
}

impl WindowConfig {
    pub fn new(width: u32, height: u32, pixel_scale: u32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            pixel_scale,
            ..Self::default()
        }
        .with_title(title)
    }

    /// Replace the title; empty falls back to the default
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = if title.is_empty() { DEFAULT_TITLE.to_string() } else { title };
        self
    }

    pub fn fixed_timestep_ms(mut self, timestep: f32) -> Self {
        self.fixed_timestep_ms = timestep;
        self
    }

    pub fn framerate_limit(mut self, fps: u32) -> Self {
        self.framerate_limit = fps;
        self
    }

    pub fn max_fixed_steps(mut self, steps: u8) -> Self {
        self.max_fixed_steps = steps;
        self
    }

    /// Load from a JSON file; missing fields keep their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            PixelWindowError::configuration(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(text)
            .map_err(|e| PixelWindowError::configuration(format!("invalid config json: {}", e)))?;
        if config.title.is_empty() {
            config.title = DEFAULT_TITLE.to_string();
        }
        Ok(config)
    }

    /// Buffer resolution; any remainder of the surface is left unrendered
    pub fn render_size(&self) -> (u32, u32) {
        if self.pixel_scale == 0 {
            return (0, 0);
        }
        (self.width / self.pixel_scale, self.height / self.pixel_scale)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PixelWindowError::configuration(format!(
                "surface size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.pixel_scale == 0 {
            return Err(PixelWindowError::configuration("pixel scale must be at least 1"));
        }
        let (render_width, render_height) = self.render_size();
        if render_width == 0 || render_height == 0 {
            return Err(PixelWindowError::configuration(format!(
                "pixel scale {} leaves no pixels on a {}x{} surface",
                self.pixel_scale, self.width, self.height
            )));
        }
        if !self.fixed_timestep_ms.is_finite() || self.fixed_timestep_ms <= 0.0 {
            return Err(PixelWindowError::configuration(format!(
                "fixed timestep must be a positive number of ms, got {}",
                self.fixed_timestep_ms
            )));
        }
        if self.max_fixed_steps == 0 {
            return Err(PixelWindowError::configuration(
                "at least one fixed step per frame is required",
            ));
        }
        Ok(())
    }
}
