use anyhow::Context;
use clap::Parser;

use pixel_window::cli::Cli;
use pixel_window::demo::RandomPixels;
use pixel_window::logging::init_logging;
use pixel_window::{PixelWindow, WinitSurface};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_filter());

    let config = cli.window_config().context("invalid window settings")?;
    let surface = WinitSurface::new(&config).context("failed to open window")?;
    let mut window = PixelWindow::new(config, surface)?;

    let mut app = RandomPixels::new();
    window.run(&mut app)?;

    log::info!("{} frames, {} fixed updates", app.frames(), app.fixed_updates());
    Ok(())
}
