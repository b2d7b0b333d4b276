// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::WindowConfig;
use crate::error::Result;

#[derive(Parser, Debug, Clone)]
#[command(name = "pixel-window")]
#[command(about = "Fixed-timestep pixel window showing random pixels", long_about = None)]
pub struct Cli {
    /// JSON file with window settings; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Window width in screen pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in screen pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Screen pixels per buffer pixel along each axis
    #[arg(long)]
    pub scale: Option<u32>,

    #[arg(long)]
    pub title: Option<String>,

    /// Fixed update interval in ms
    #[arg(long = "fixed-timestep")]
    pub fixed_timestep: Option<f32>,

    /// Framerate cap, 0 for unlimited
    #[arg(long)]
    pub fps: Option<u32>,

    /// Most fixed updates run in a single frame
    #[arg(long = "max-fixed-steps")]
    pub max_fixed_steps: Option<u8>,

    /// Log filter, env_logger syntax (defaults to RUST_LOG, then "info")
    #[arg(long)]
    pub log: Option<String>,
}

impl Cli {
    /// Merge the config file (if any) with command-line overrides
    pub fn window_config(&self) -> Result<WindowConfig> {
        let mut config = match &self.config {
            Some(path) => WindowConfig::from_json_file(path)?,
            None => WindowConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(scale) = self.scale {
            config.pixel_scale = scale;
        }
        if let Some(title) = &self.title {
            config = config.with_title(title.clone());
        }
        if let Some(timestep) = self.fixed_timestep {
            config.fixed_timestep_ms = timestep;
        }
        if let Some(fps) = self.fps {
            config.framerate_limit = fps;
        }
        if let Some(steps) = self.max_fixed_steps {
            config.max_fixed_steps = steps;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn log_filter(&self) -> Option<&str> {
        self.log.as_deref()
    }
}
