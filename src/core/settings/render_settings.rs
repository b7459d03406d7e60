//! User-editable render settings.
//!
//! Setters clamp into range and return `true` only when the stored value changed, which
//! is the caller's cue to invalidate accumulation. Temporal accumulation constrains the
//! sampling settings: it needs pixel sampling on and a randomised sample pattern.

use crate::core::settings::sampling_method::SamplingMethod;

pub const MAX_SAMPLES_PER_PIXEL: u32 = 20;
pub const MAX_SHAPING_EXPONENT: f32 = 10.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 256;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    max_iterations: u32,
    samples_per_pixel: u32,
    sampling_method: SamplingMethod,
    shaping_exponent: f32,
    temporal: bool,
    pixel_sampling: bool,
    gamma_correction: bool,
    smooth_colouring: bool,
    test: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            samples_per_pixel: 1,
            sampling_method: SamplingMethod::RandomPoint,
            shaping_exponent: 1.0,
            temporal: true,
            pixel_sampling: true,
            gamma_correction: true,
            smooth_colouring: true,
            test: false,
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }

    *slot = value;
    true
}

impl RenderSettings {
    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }

    #[must_use]
    pub fn sampling_method(&self) -> SamplingMethod {
        self.sampling_method
    }

    #[must_use]
    pub fn shaping_exponent(&self) -> f32 {
        self.shaping_exponent
    }

    #[must_use]
    pub fn temporal(&self) -> bool {
        self.temporal
    }

    #[must_use]
    pub fn pixel_sampling(&self) -> bool {
        self.pixel_sampling
    }

    #[must_use]
    pub fn gamma_correction(&self) -> bool {
        self.gamma_correction
    }

    #[must_use]
    pub fn smooth_colouring(&self) -> bool {
        self.smooth_colouring
    }

    #[must_use]
    pub fn test(&self) -> bool {
        self.test
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> bool {
        replace(&mut self.max_iterations, max_iterations.max(1))
    }

    pub fn set_samples_per_pixel(&mut self, samples: u32) -> bool {
        replace(&mut self.samples_per_pixel, samples.clamp(1, MAX_SAMPLES_PER_PIXEL))
    }

    /// `Grid` is refused while temporal accumulation is on.
    pub fn set_sampling_method(&mut self, method: SamplingMethod) -> bool {
        if self.temporal && !method.supports_temporal() {
            return false;
        }

        replace(&mut self.sampling_method, method)
    }

    /// NaN is ignored.
    pub fn set_shaping_exponent(&mut self, exponent: f32) -> bool {
        if exponent.is_nan() {
            return false;
        }

        replace(&mut self.shaping_exponent, exponent.clamp(0.0, MAX_SHAPING_EXPONENT))
    }

    /// Turning temporal on also turns pixel sampling on and drops a fixed grid pattern.
    pub fn set_temporal(&mut self, enabled: bool) -> bool {
        let mut changed = replace(&mut self.temporal, enabled);

        if enabled {
            changed |= replace(&mut self.pixel_sampling, true);

            if !self.sampling_method.supports_temporal() {
                changed |= replace(&mut self.sampling_method, SamplingMethod::RandomPoint);
            }
        }

        changed
    }

    /// Pixel sampling cannot be switched off while temporal accumulation is on.
    pub fn set_pixel_sampling(&mut self, enabled: bool) -> bool {
        if self.temporal && !enabled {
            return false;
        }

        replace(&mut self.pixel_sampling, enabled)
    }

    pub fn set_gamma_correction(&mut self, enabled: bool) -> bool {
        replace(&mut self.gamma_correction, enabled)
    }

    pub fn set_smooth_colouring(&mut self, enabled: bool) -> bool {
        replace(&mut self.smooth_colouring, enabled)
    }

    pub fn set_test(&mut self, enabled: bool) -> bool {
        replace(&mut self.test, enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = RenderSettings::default();

        assert_eq!(settings.max_iterations(), 256);
        assert_eq!(settings.samples_per_pixel(), 1);
        assert_eq!(settings.sampling_method(), SamplingMethod::RandomPoint);
        assert_eq!(settings.shaping_exponent(), 1.0);
        assert!(settings.temporal());
        assert!(settings.pixel_sampling());
        assert!(settings.gamma_correction());
        assert!(settings.smooth_colouring());
        assert!(!settings.test());
    }

    #[test]
    fn test_setters_report_change_only_once() {
        let mut settings = RenderSettings::default();

        assert!(settings.set_max_iterations(512));
        assert!(!settings.set_max_iterations(512));
        assert!(settings.set_gamma_correction(false));
        assert!(!settings.set_gamma_correction(false));
    }

    #[test]
    fn test_numeric_setters_clamp() {
        let mut settings = RenderSettings::default();

        settings.set_max_iterations(0);
        settings.set_samples_per_pixel(99);
        settings.set_shaping_exponent(-3.0);

        assert_eq!(settings.max_iterations(), 1);
        assert_eq!(settings.samples_per_pixel(), MAX_SAMPLES_PER_PIXEL);
        assert_eq!(settings.shaping_exponent(), 0.0);

        settings.set_samples_per_pixel(0);
        settings.set_shaping_exponent(42.0);

        assert_eq!(settings.samples_per_pixel(), 1);
        assert_eq!(settings.shaping_exponent(), MAX_SHAPING_EXPONENT);
    }

    #[test]
    fn test_nan_exponent_is_ignored() {
        let mut settings = RenderSettings::default();

        assert!(!settings.set_shaping_exponent(f32::NAN));
        assert_eq!(settings.shaping_exponent(), 1.0);
    }

    #[test]
    fn test_pixel_sampling_locked_on_while_temporal() {
        let mut settings = RenderSettings::default();

        assert!(!settings.set_pixel_sampling(false));
        assert!(settings.pixel_sampling());

        settings.set_temporal(false);
        assert!(settings.set_pixel_sampling(false));
        assert!(!settings.pixel_sampling());
    }

    #[test]
    fn test_enabling_temporal_forces_pixel_sampling() {
        let mut settings = RenderSettings::default();
        settings.set_temporal(false);
        settings.set_pixel_sampling(false);

        assert!(settings.set_temporal(true));

        assert!(settings.pixel_sampling());
    }

    #[test]
    fn test_grid_rejected_while_temporal() {
        let mut settings = RenderSettings::default();

        assert!(!settings.set_sampling_method(SamplingMethod::Grid));
        assert_eq!(settings.sampling_method(), SamplingMethod::RandomPoint);

        assert!(settings.set_sampling_method(SamplingMethod::JitteredGrid));
    }

    #[test]
    fn test_enabling_temporal_drops_grid() {
        let mut settings = RenderSettings::default();
        settings.set_temporal(false);
        assert!(settings.set_sampling_method(SamplingMethod::Grid));

        settings.set_temporal(true);

        assert_eq!(settings.sampling_method(), SamplingMethod::RandomPoint);
    }

    #[test]
    fn test_disabling_temporal_keeps_sampling_state() {
        let mut settings = RenderSettings::default();
        settings.set_sampling_method(SamplingMethod::JitteredGrid);

        assert!(settings.set_temporal(false));

        assert!(settings.pixel_sampling());
        assert_eq!(settings.sampling_method(), SamplingMethod::JitteredGrid);
    }
}
