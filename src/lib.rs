pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;
pub mod storage;

pub use crate::controllers::engine::{
    Engine, EngineCommand, EngineSnapshot, GradientEdit, SettingEdit, UniformSink,
};
pub use crate::core::colour::{Gradient, GradientError, GradientPreview, GradientPreviewError, Rgb};
pub use crate::core::config::EngineConfig;
pub use crate::core::data::dvec2::DVec2;
pub use crate::core::data::resolution::Resolution;
pub use crate::core::settings::{RenderSettings, SamplingMethod};
pub use crate::core::viewport::{FractalMode, ViewportTransform};
pub use crate::input::{InputEvent, PointerTracker};
pub use crate::presenters::uniforms::TracingUniformSink;
pub use crate::storage::write_ppm;
