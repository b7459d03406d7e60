use tracing::{debug, info, trace};

use crate::controllers::engine::commands::{EngineCommand, GradientEdit, SettingEdit};
use crate::controllers::engine::ports::uniform_sink::UniformSink;
use crate::controllers::engine::queue::CommandQueue;
use crate::controllers::engine::snapshot::EngineSnapshot;
use crate::core::accumulation::controller::AccumulationController;
use crate::core::colour::gradient::{Gradient, GradientError};
use crate::core::config::EngineConfig;
use crate::core::settings::render_settings::RenderSettings;
use crate::core::viewport::transform::ViewportTransform;

/// Owns all view state and turns queued commands into one snapshot per frame.
#[derive(Debug)]
pub struct Engine {
    viewport: ViewportTransform,
    gradient: Gradient,
    settings: RenderSettings,
    accumulation: AccumulationController,
    queue: CommandQueue,
}

impl Engine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let viewport = ViewportTransform::new(config.resolution, config.mode)
            .with_zoom_limits(config.zoom_sensitivity, config.min_zoom_factor);
        let accumulation = AccumulationController::new(config.settings.temporal());

        Self {
            viewport,
            gradient: config.gradient,
            settings: config.settings,
            accumulation,
            queue: CommandQueue::new(),
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportTransform {
        &self.viewport
    }

    #[must_use]
    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    #[must_use]
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    #[must_use]
    pub fn accumulation(&self) -> &AccumulationController {
        &self.accumulation
    }

    #[must_use]
    pub fn pending_commands(&self) -> usize {
        self.queue.len()
    }

    /// Queues a command for the next frame boundary.
    pub fn submit(&mut self, command: EngineCommand) {
        self.queue.push(command);
    }

    pub fn submit_all<I: IntoIterator<Item = EngineCommand>>(&mut self, commands: I) {
        self.queue.extend(commands);
    }

    /// Applies a command immediately. Returns whether any state changed; a change
    /// restarts accumulation.
    pub fn apply(&mut self, command: EngineCommand) -> bool {
        let changed = match command {
            EngineCommand::Resize { width, height } => {
                self.viewport.set_resolution(width, height);
                true
            }
            EngineCommand::Pan { dx, dy } => {
                self.viewport.pan(dx, dy);
                true
            }
            EngineCommand::Zoom { scroll_delta } => {
                self.viewport.zoom(scroll_delta);
                true
            }
            EngineCommand::CenterOn { x, y } => {
                self.viewport.center_on(x, y);
                true
            }
            EngineCommand::SetMode(mode) => {
                info!(%mode, "switching fractal mode");
                self.viewport.set_mode(mode);
                true
            }
            EngineCommand::ResetView => {
                info!(mode = %self.viewport.mode(), "resetting view");
                self.viewport.reset();
                true
            }
            EngineCommand::Gradient(edit) => match self.edit_gradient(edit) {
                Ok(()) => true,
                Err(err) => {
                    debug!(?edit, %err, "gradient edit rejected");
                    false
                }
            },
            EngineCommand::Setting(edit) => self.edit_setting(edit),
        };

        if changed {
            debug!(?command, "invalidating accumulation");
            self.accumulation.invalidate();
        }

        changed
    }

    /// Applies every queued command, then advances accumulation and captures the frame.
    pub fn next_frame(&mut self) -> EngineSnapshot {
        let pending: Vec<EngineCommand> = self.queue.drain().collect();
        for command in pending {
            self.apply(command);
        }

        let frame_count = self.accumulation.frame_count();
        let temporal = self.accumulation.on_frame_rendered();

        let snapshot = self.capture(frame_count, temporal);
        trace!(frame_count, temporal, "frame captured");
        snapshot
    }

    /// [`Engine::next_frame`] followed by publishing the snapshot to `sink`.
    pub fn render_frame<S: UniformSink + ?Sized>(&mut self, sink: &mut S) -> EngineSnapshot {
        let snapshot = self.next_frame();
        snapshot.publish(sink);
        snapshot
    }

    fn capture(&self, frame_count: u32, temporal: bool) -> EngineSnapshot {
        let settings = &self.settings;

        EngineSnapshot {
            resolution: self.viewport.resolution().to_ivec2(),
            dimensions: self.viewport.resolved_dimensions(),
            center: self.viewport.center(),
            scale: self.viewport.scale(),
            gradient: self.gradient.stops().to_vec(),
            temporal,
            frame_count,
            sampling_method: settings.sampling_method(),
            samples_per_pixel: settings.samples_per_pixel(),
            mode: self.viewport.mode(),
            max_iterations: settings.max_iterations(),
            shaping_exponent: settings.shaping_exponent(),
            test: settings.test(),
            pixel_sampling: settings.pixel_sampling(),
            gamma_correction: settings.gamma_correction(),
            smooth_colouring: settings.smooth_colouring(),
        }
    }

    fn edit_gradient(&mut self, edit: GradientEdit) -> Result<(), GradientError> {
        match edit {
            GradientEdit::Insert(colour) => self.gradient.insert(colour),
            GradientEdit::Remove(index) => self.gradient.remove(index),
            GradientEdit::Set { index, colour } => self.gradient.set(index, colour),
            GradientEdit::SwapForward(index) => self.gradient.swap_forward(index),
            GradientEdit::SwapBackward(index) => self.gradient.swap_backward(index),
        }
    }

    fn edit_setting(&mut self, edit: SettingEdit) -> bool {
        let settings = &mut self.settings;

        let changed = match edit {
            SettingEdit::MaxIterations(value) => settings.set_max_iterations(value),
            SettingEdit::SamplesPerPixel(value) => settings.set_samples_per_pixel(value),
            SettingEdit::SamplingMethod(method) => settings.set_sampling_method(method),
            SettingEdit::ShapingExponent(value) => settings.set_shaping_exponent(value),
            SettingEdit::Temporal(enabled) => settings.set_temporal(enabled),
            SettingEdit::PixelSampling(enabled) => settings.set_pixel_sampling(enabled),
            SettingEdit::GammaCorrection(enabled) => settings.set_gamma_correction(enabled),
            SettingEdit::SmoothColouring(enabled) => settings.set_smooth_colouring(enabled),
            SettingEdit::Test(enabled) => settings.set_test(enabled),
        };

        if !changed {
            debug!(?edit, "setting edit left state unchanged");
        }

        self.accumulation.set_temporal_enabled(self.settings.temporal());
        changed
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
