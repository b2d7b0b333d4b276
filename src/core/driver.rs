use winit::event::WindowEvent;

use crate::config::WindowConfig;
use crate::error::{PixelWindowError, Result};
use crate::traits::{FrameSource, PixelApp, Presenter};

use super::clock::FrameClock;
use super::perf::{PerfStats, Phase};
use super::pixel_buffer::PixelBuffer;
use super::surface::SurfaceHandle;
use super::timer::FixedStep;

/// Lifecycle of the loop; `Closed` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Closed,
}

/// What one iteration did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IterationOutcome {
    pub fixed_steps: u8,
    /// The per-iteration step cap stopped the drain with time still banked
    pub cap_engaged: bool,
}

/// Fixed-timestep loop driver that owns the pixel buffer and the presenter
///
/// Each iteration pumps events, calls `update` once, drains the fixed-step
/// accumulator (at most `max_fixed_steps` times), then renders and presents.
/// Averaged phase timings are appended to the surface title every 500ms of
/// loop time.
pub struct PixelWindow<P: Presenter> {
    config: WindowConfig,
    presenter: P,
    surface: SurfaceHandle,
    pixels: PixelBuffer,
    fixed_step: FixedStep,
    perf: PerfStats,
    fixed_updates: u64,
    loop_time_ms: f64,
    state: LoopState,
    loaded: bool,
}

impl<P: Presenter> PixelWindow<P> {
    pub fn new(config: WindowConfig, presenter: P) -> Result<Self> {
        config.validate()?;

        let (render_width, render_height) = config.render_size();

        Ok(Self {
            surface: SurfaceHandle::new(&config),
            pixels: PixelBuffer::new(render_width, render_height),
            fixed_step: FixedStep::new(config.fixed_timestep_ms, config.max_fixed_steps),
            perf: PerfStats::default(),
            fixed_updates: 0,
            loop_time_ms: 0.0,
            state: LoopState::Running,
            loaded: false,
            config,
            presenter,
        })
    }

    /// Call `on_load` once; `run` does this itself if it has not happened yet
    ///
    /// A failed load closes the loop like any other callback error.
    pub fn load<A: PixelApp + ?Sized>(&mut self, app: &mut A) -> Result<()> {
        if self.loaded || self.state == LoopState::Closed {
            return Ok(());
        }

        if let Err(err) = app.on_load(&mut self.surface) {
            self.terminate(&err);
            return Err(err);
        }
        self.loaded = true;

        if self.surface.close_requested() {
            self.presenter.close();
        }
        Ok(())
    }

    /// Run until the surface closes, timing frames with the wall clock
    pub fn run<A: PixelApp + ?Sized>(&mut self, app: &mut A) -> Result<()> {
        let mut clock = FrameClock::new();
        self.run_with(app, &mut clock)
    }

    /// Run until the surface closes, taking frame times from `frames`
    pub fn run_with<A, F>(&mut self, app: &mut A, frames: &mut F) -> Result<()>
    where
        A: PixelApp + ?Sized,
        F: FrameSource + ?Sized,
    {
        self.load(app)?;

        log::info!(
            "running '{}': {}x{} buffer, {}ms fixed step, max {} steps/frame",
            self.config.title,
            self.pixels.width(),
            self.pixels.height(),
            self.config.fixed_timestep_ms,
            self.config.max_fixed_steps
        );

        while self.state == LoopState::Running {
            let frame_ms = frames.next_frame_ms();
            self.step(app, frame_ms)?;
        }

        log::info!("'{}' closed after {} fixed updates", self.config.title, self.fixed_updates);
        Ok(())
    }

    /// Run exactly one iteration with an explicit frame time
    ///
    /// An error from the presenter or the app closes the loop and is returned.
    pub fn step<A: PixelApp + ?Sized>(&mut self, app: &mut A, frame_ms: f64) -> Result<IterationOutcome> {
        if self.state == LoopState::Closed {
            return Ok(IterationOutcome::default());
        }

        match self.iterate(app, frame_ms) {
            Ok(outcome) => {
                if !self.presenter.is_open() {
                    self.state = LoopState::Closed;
                }
                Ok(outcome)
            }
            Err(err) => {
                self.terminate(&err);
                Err(err)
            }
        }
    }

    fn terminate(&mut self, err: &PixelWindowError) {
        log::error!("loop terminated: {}", err);
        self.state = LoopState::Closed;
        self.presenter.close();
    }

    fn iterate<A: PixelApp + ?Sized>(&mut self, app: &mut A, frame_ms: f64) -> Result<IterationOutcome> {
        let frame_ms = if frame_ms.is_finite() && frame_ms >= 0.0 {
            frame_ms
        } else {
            log::warn!("ignoring invalid frame time {}", frame_ms);
            0.0
        };
        self.fixed_step.accumulate(frame_ms);
        self.loop_time_ms += frame_ms;

        let surface = &mut self.surface;
        self.presenter.pump_events(&mut |event: WindowEvent| {
            surface.dispatch(&event);
        })?;
        if self.surface.close_requested() {
            self.presenter.close();
        }
        if !self.presenter.is_open() {
            return Ok(IterationOutcome::default());
        }

        let frame_time = frame_ms as f32;
        self.perf.measure(Phase::Update, || app.update(frame_time))?;

        let timestep = self.fixed_step.timestep_ms();
        let mut steps = 0u8;
        while self.fixed_step.try_step(steps) {
            self.perf.measure(Phase::FixedUpdate, || app.fixed_update(timestep))?;
            steps += 1;
            self.fixed_updates += 1;
        }

        let cap_engaged = steps == self.fixed_step.max_steps()
            && self.fixed_step.accumulator_ms() >= timestep as f64;
        if cap_engaged {
            log::trace!(
                "fixed step cap hit, {:.1}ms left in accumulator",
                self.fixed_step.accumulator_ms()
            );
        }

        let presenter = &mut self.presenter;
        let pixels = &mut self.pixels;
        self.perf.measure(Phase::PreRender, || presenter.pre_render())?;
        self.perf.measure(Phase::Render, || app.render(pixels, frame_time))?;
        self.perf.measure(Phase::PostRender, || presenter.present(pixels))?;

        if let Some(report) = self.perf.flush_if_due(self.loop_time_ms) {
            log::debug!("{}", report);
            self.presenter
                .set_title(&format!("{} - {}", self.config.title, report));
        }

        Ok(IterationOutcome {
            fixed_steps: steps,
            cap_engaged,
        })
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Simulation time carried into the next iteration
    pub fn accumulator_ms(&self) -> f64 {
        self.fixed_step.accumulator_ms()
    }

    /// Total fixed updates run so far
    pub fn fixed_update_count(&self) -> u64 {
        self.fixed_updates
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn perf(&self) -> &PerfStats {
        &self.perf
    }

    pub fn surface(&self) -> &SurfaceHandle {
        &self.surface
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
