//! Everything the render stage may read for one frame.
//!
//! A snapshot is assembled after the frame's commands are applied and is never
//! mutated afterwards. `publish` writes it to a [`UniformSink`] in a single pass.

use crate::controllers::engine::ports::uniform_sink::UniformSink;
use crate::core::colour::rgb::Rgb;
use crate::core::data::dvec2::DVec2;
use crate::core::settings::sampling_method::SamplingMethod;
use crate::core::viewport::fractal_mode::FractalMode;

pub mod uniform_names {
    pub const RESOLUTION: &str = "resolution";
    pub const DIMENSIONS: &str = "dimensions";
    pub const CENTER: &str = "centerCoords";
    pub const SCALE: &str = "scale";
    pub const GRADIENT: &str = "gradient";
    pub const GRADIENT_SIZE: &str = "gradientSize";
    pub const TEST: &str = "test";
    pub const PIXEL_SAMPLING: &str = "doPixelSampling";
    pub const GAMMA_CORRECTION: &str = "doGammaCorrection";
    pub const TEMPORAL: &str = "doTemporalAntiAliasing";
    pub const SMOOTH_COLOURING: &str = "doSmoothColouring";
    pub const FRAME_COUNT: &str = "renderedFrameCount";
    pub const SAMPLING_METHOD: &str = "samplingMethod";
    pub const SAMPLES_PER_PIXEL: &str = "samplesPerPixel";
    pub const FRACTAL_MODE: &str = "fractalMode";
    pub const MAX_ITERATIONS: &str = "maxIterations";
    pub const GRADIENT_EXPONENT: &str = "gradientExponent";
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineSnapshot {
    pub resolution: [i32; 2],
    pub dimensions: DVec2,
    pub center: DVec2,
    pub scale: DVec2,
    pub gradient: Vec<Rgb>,
    /// Whether this frame may blend with the accumulated history.
    pub temporal: bool,
    /// Frames already blended into the history since the last invalidation.
    pub frame_count: u32,
    pub sampling_method: SamplingMethod,
    pub samples_per_pixel: u32,
    pub mode: FractalMode,
    pub max_iterations: u32,
    pub shaping_exponent: f32,
    pub test: bool,
    pub pixel_sampling: bool,
    pub gamma_correction: bool,
    pub smooth_colouring: bool,
}

fn to_int<T: TryInto<i32>>(value: T) -> i32 {
    value.try_into().unwrap_or(i32::MAX)
}

impl EngineSnapshot {
    #[must_use]
    pub fn gradient_size(&self) -> usize {
        self.gradient.len()
    }

    pub fn publish<S: UniformSink + ?Sized>(&self, sink: &mut S) {
        use self::uniform_names::*;

        sink.set_ivec2(RESOLUTION, self.resolution);
        sink.set_dvec2(DIMENSIONS, self.dimensions.to_array());
        sink.set_dvec2(CENTER, self.center.to_array());
        sink.set_dvec2(SCALE, self.scale.to_array());

        let stops: Vec<[f32; 3]> = self.gradient.iter().map(|stop| stop.to_array()).collect();
        sink.set_vec3_array(GRADIENT, &stops);
        sink.set_int(GRADIENT_SIZE, to_int(self.gradient_size()));

        sink.set_bool(TEST, self.test);
        sink.set_bool(PIXEL_SAMPLING, self.pixel_sampling);
        sink.set_bool(GAMMA_CORRECTION, self.gamma_correction);
        sink.set_bool(TEMPORAL, self.temporal);
        sink.set_bool(SMOOTH_COLOURING, self.smooth_colouring);

        sink.set_int(FRAME_COUNT, to_int(self.frame_count));
        sink.set_int(SAMPLING_METHOD, self.sampling_method.shader_index());
        sink.set_int(SAMPLES_PER_PIXEL, to_int(self.samples_per_pixel));
        sink.set_int(FRACTAL_MODE, self.mode.shader_index());
        sink.set_int(MAX_ITERATIONS, to_int(self.max_iterations));

        sink.set_float(GRADIENT_EXPONENT, self.shaping_exponent);
    }
}
