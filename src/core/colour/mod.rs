pub mod gradient;
pub mod hsl;
pub mod preview;
pub mod rgb;

pub use gradient::{Gradient, GradientError};
pub use preview::{GradientPreview, GradientPreviewError};
pub use rgb::Rgb;
