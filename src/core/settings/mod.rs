pub mod render_settings;
pub mod sampling_method;

pub use render_settings::RenderSettings;
pub use sampling_method::SamplingMethod;
