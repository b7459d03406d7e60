use crate::core::colour::rgb::Rgb;
use crate::core::settings::sampling_method::SamplingMethod;
use crate::core::viewport::fractal_mode::FractalMode;

/// Every way the outside world may change engine state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineCommand {
    Resize { width: u32, height: u32 },
    /// Screen-space drag in pixels, y pointing down.
    Pan { dx: f64, dy: f64 },
    Zoom { scroll_delta: f64 },
    /// Recentre on the plane point under a pixel.
    CenterOn { x: f64, y: f64 },
    SetMode(FractalMode),
    ResetView,
    Gradient(GradientEdit),
    Setting(SettingEdit),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientEdit {
    Insert(Rgb),
    Remove(usize),
    Set { index: usize, colour: Rgb },
    SwapForward(usize),
    SwapBackward(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingEdit {
    MaxIterations(u32),
    SamplesPerPixel(u32),
    SamplingMethod(SamplingMethod),
    ShapingExponent(f32),
    Temporal(bool),
    PixelSampling(bool),
    GammaCorrection(bool),
    SmoothColouring(bool),
    Test(bool),
}

impl From<GradientEdit> for EngineCommand {
    fn from(edit: GradientEdit) -> Self {
        Self::Gradient(edit)
    }
}

impl From<SettingEdit> for EngineCommand {
    fn from(edit: SettingEdit) -> Self {
        Self::Setting(edit)
    }
}
