use crate::core::colour::gradient::Gradient;
use crate::core::data::resolution::Resolution;
use crate::core::settings::render_settings::RenderSettings;
use crate::core::viewport::fractal_mode::FractalMode;
use crate::core::viewport::transform::{DEFAULT_MIN_ZOOM_FACTOR, DEFAULT_ZOOM_SENSITIVITY};

pub const DEFAULT_MAX_GRADIENT_SIZE: usize = 16;

/// Start-up state of the engine. There is no config file; every run starts here.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub resolution: Resolution,
    pub mode: FractalMode,
    pub zoom_sensitivity: f64,
    pub min_zoom_factor: f64,
    pub gradient: Gradient,
    pub settings: RenderSettings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            resolution: Resolution::new(800, 600),
            mode: FractalMode::default(),
            zoom_sensitivity: DEFAULT_ZOOM_SENSITIVITY,
            min_zoom_factor: DEFAULT_MIN_ZOOM_FACTOR,
            gradient: Gradient::fire(DEFAULT_MAX_GRADIENT_SIZE),
            settings: RenderSettings::default(),
        }
    }
}
