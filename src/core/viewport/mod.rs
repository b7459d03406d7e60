pub mod fractal_mode;
pub mod transform;

pub use fractal_mode::FractalMode;
pub use transform::ViewportTransform;
