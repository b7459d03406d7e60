//! Editable colour gradient mapping a scalar alpha in `[0, 1]` to a colour.
//!
//! Stops are evenly spaced: index 0 sits at alpha 0 and the last index at alpha 1.
//! Neighbouring stops are blended in HSL so hues sweep instead of greying out.

use thiserror::Error;

use crate::core::colour::hsl::{hsl_to_rgb, rgb_to_hsl};
use crate::core::colour::rgb::Rgb;

pub const MIN_GRADIENT_SIZE: usize = 2;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum GradientError {
    #[error("gradient must keep at least two stops")]
    AtMinimumSize,
    #[error("gradient is full ({max_size} stops)")]
    AtMaximumSize { max_size: usize },
    #[error("stop index {index} is out of range for {len} stops")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("stop {index} has no neighbour in that direction")]
    AtBoundary { index: usize },
    #[error("gradient needs between two and {max_size} stops, got {len}")]
    InvalidSize { len: usize, max_size: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<Rgb>,
    max_size: usize,
}

impl Gradient {
    #[must_use]
    pub fn new(first: Rgb, second: Rgb, max_size: usize) -> Self {
        Self {
            stops: vec![first.clamped(), second.clamped()],
            max_size: max_size.max(MIN_GRADIENT_SIZE),
        }
    }

    /// Black, red, yellow, white.
    #[must_use]
    pub fn fire(max_size: usize) -> Self {
        Self {
            stops: vec![Rgb::BLACK, Rgb::RED, Rgb::YELLOW, Rgb::WHITE],
            max_size: max_size.max(4),
        }
    }

    pub fn from_stops(stops: Vec<Rgb>, max_size: usize) -> Result<Self, GradientError> {
        let max_size = max_size.max(MIN_GRADIENT_SIZE);

        if stops.len() < MIN_GRADIENT_SIZE || stops.len() > max_size {
            return Err(GradientError::InvalidSize {
                len: stops.len(),
                max_size,
            });
        }

        Ok(Self {
            stops: stops.into_iter().map(Rgb::clamped).collect(),
            max_size,
        })
    }

    #[must_use]
    pub fn stops(&self) -> &[Rgb] {
        &self.stops
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false; a gradient never holds fewer than two stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn insert(&mut self, colour: Rgb) -> Result<(), GradientError> {
        if self.stops.len() >= self.max_size {
            return Err(GradientError::AtMaximumSize {
                max_size: self.max_size,
            });
        }

        self.stops.push(colour.clamped());
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<(), GradientError> {
        self.check_index(index)?;

        if self.stops.len() <= MIN_GRADIENT_SIZE {
            return Err(GradientError::AtMinimumSize);
        }

        self.stops.remove(index);
        Ok(())
    }

    /// Replaces the colour of an existing stop.
    pub fn set(&mut self, index: usize, colour: Rgb) -> Result<(), GradientError> {
        self.check_index(index)?;

        self.stops[index] = colour.clamped();
        Ok(())
    }

    /// Swaps stop `index` with the one after it.
    pub fn swap_forward(&mut self, index: usize) -> Result<(), GradientError> {
        self.check_index(index)?;

        if index + 1 >= self.stops.len() {
            return Err(GradientError::AtBoundary { index });
        }

        self.stops.swap(index, index + 1);
        Ok(())
    }

    /// Swaps stop `index` with the one before it.
    pub fn swap_backward(&mut self, index: usize) -> Result<(), GradientError> {
        self.check_index(index)?;

        if index == 0 {
            return Err(GradientError::AtBoundary { index });
        }

        self.stops.swap(index - 1, index);
        Ok(())
    }

    /// Colour at `alpha`. Out of range alphas are clamped and NaN reads as 0.
    #[must_use]
    pub fn value(&self, alpha: f32) -> Rgb {
        let alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
        let last = self.stops.len() - 1;

        if alpha == 1.0 {
            return self.stops[last];
        }

        let step = 1.0 / last as f32;
        let index = ((alpha / step) as usize).min(last - 1);
        let local_alpha = (alpha - index as f32 * step) / step;

        let from = rgb_to_hsl(self.stops[index]);
        let to = rgb_to_hsl(self.stops[index + 1]);

        hsl_to_rgb(from.lerp(to, local_alpha))
    }

    fn check_index(&self, index: usize) -> Result<(), GradientError> {
        if index >= self.stops.len() {
            return Err(GradientError::IndexOutOfRange {
                index,
                len: self.stops.len(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour::hsl::Hsl;

    const EPSILON: f32 = 1e-4;

    fn fire() -> Gradient {
        Gradient::fire(16)
    }

    fn assert_rgb_close(actual: Rgb, expected: Rgb) {
        assert!(
            (actual.r - expected.r).abs() < EPSILON
                && (actual.g - expected.g).abs() < EPSILON
                && (actual.b - expected.b).abs() < EPSILON,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_value_at_zero_is_first_stop() {
        let gradient = Gradient::new(Rgb::new(0.2, 0.4, 0.6), Rgb::WHITE, 8);

        assert_rgb_close(gradient.value(0.0), Rgb::new(0.2, 0.4, 0.6));
    }

    #[test]
    fn test_value_at_one_is_last_stop_exactly() {
        let last = Rgb::new(0.3, 0.7, 0.11);
        let gradient = Gradient::from_stops(vec![Rgb::BLACK, Rgb::RED, last], 8).unwrap();

        assert_eq!(gradient.value(1.0), last);
    }

    #[test]
    fn test_value_half_of_fire_is_hsl_midpoint_of_red_and_yellow() {
        let gradient = fire();

        let expected = hsl_to_rgb(rgb_to_hsl(Rgb::RED).lerp(rgb_to_hsl(Rgb::YELLOW), 0.5));

        assert_rgb_close(gradient.value(0.5), expected);
        assert_rgb_close(gradient.value(0.5), Rgb::new(1.0, 0.5, 0.0));
    }

    #[test]
    fn test_value_blends_hue_not_rgb() {
        let gradient = Gradient::new(Rgb::RED, Rgb::new(0.0, 0.0, 1.0), 8);

        // an RGB lerp would give purple; hue 0 -> 240 passes through green at 120
        assert_rgb_close(gradient.value(0.5), Rgb::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_value_hits_interior_stops() {
        let gradient = fire();

        assert_rgb_close(gradient.value(1.0 / 3.0), Rgb::RED);
        assert_rgb_close(gradient.value(2.0 / 3.0), Rgb::YELLOW);
    }

    #[test]
    fn test_value_clamps_alpha() {
        let gradient = fire();

        assert_eq!(gradient.value(4.0), Rgb::WHITE);
        assert_rgb_close(gradient.value(-1.0), Rgb::BLACK);
        assert_rgb_close(gradient.value(f32::NAN), Rgb::BLACK);
    }

    #[test]
    fn test_value_just_below_one_stays_in_last_segment() {
        let gradient = fire();
        let colour = gradient.value(0.999_999);

        let lightness = rgb_to_hsl(colour).l;
        assert!(lightness > 99.0, "lightness was {}", lightness);
    }

    #[test]
    fn test_insert_appends() {
        let mut gradient = Gradient::new(Rgb::BLACK, Rgb::WHITE, 4);

        gradient.insert(Rgb::RED).unwrap();

        assert_eq!(gradient.stops(), &[Rgb::BLACK, Rgb::WHITE, Rgb::RED]);
    }

    #[test]
    fn test_insert_rejected_when_full() {
        let mut gradient = Gradient::new(Rgb::BLACK, Rgb::WHITE, 2);

        let result = gradient.insert(Rgb::RED);

        assert_eq!(result, Err(GradientError::AtMaximumSize { max_size: 2 }));
        assert_eq!(gradient.len(), 2);
    }

    #[test]
    fn test_remove_on_two_stops_is_noop() {
        let mut gradient = Gradient::new(Rgb::BLACK, Rgb::WHITE, 8);

        assert_eq!(gradient.remove(0), Err(GradientError::AtMinimumSize));
        assert_eq!(gradient.len(), 2);
        assert_eq!(gradient.stops(), &[Rgb::BLACK, Rgb::WHITE]);
    }

    #[test]
    fn test_remove_shifts_later_stops_down() {
        let mut gradient = fire();

        gradient.remove(1).unwrap();

        assert_eq!(gradient.stops(), &[Rgb::BLACK, Rgb::YELLOW, Rgb::WHITE]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut gradient = fire();

        assert_eq!(
            gradient.remove(9),
            Err(GradientError::IndexOutOfRange { index: 9, len: 4 })
        );
        assert_eq!(gradient.len(), 4);
    }

    #[test]
    fn test_swap_forward_and_backward() {
        let mut gradient = fire();

        gradient.swap_forward(0).unwrap();
        assert_eq!(gradient.stops()[0], Rgb::RED);
        assert_eq!(gradient.stops()[1], Rgb::BLACK);

        gradient.swap_backward(1).unwrap();
        assert_eq!(gradient.stops(), fire().stops());
    }

    #[test]
    fn test_swaps_at_boundaries_are_noops() {
        let mut gradient = fire();

        assert_eq!(gradient.swap_forward(3), Err(GradientError::AtBoundary { index: 3 }));
        assert_eq!(gradient.swap_backward(0), Err(GradientError::AtBoundary { index: 0 }));
        assert_eq!(
            gradient.swap_forward(10),
            Err(GradientError::IndexOutOfRange { index: 10, len: 4 })
        );
        assert_eq!(gradient.stops(), fire().stops());
    }

    #[test]
    fn test_set_replaces_and_clamps() {
        let mut gradient = fire();

        gradient.set(2, Rgb::new(2.0, 0.5, -1.0)).unwrap();

        assert_eq!(gradient.stops()[2], Rgb::new(1.0, 0.5, 0.0));
    }

    #[test]
    fn test_from_stops_rejects_bad_sizes() {
        assert_eq!(
            Gradient::from_stops(vec![Rgb::BLACK], 8),
            Err(GradientError::InvalidSize { len: 1, max_size: 8 })
        );
        assert_eq!(
            Gradient::from_stops(vec![Rgb::BLACK; 5], 4),
            Err(GradientError::InvalidSize { len: 5, max_size: 4 })
        );
    }

    #[test]
    fn test_fire_has_room_for_its_own_stops() {
        let gradient = Gradient::fire(1);

        assert_eq!(gradient.len(), 4);
        assert_eq!(gradient.max_size(), 4);
    }

    #[test]
    fn test_max_size_never_below_two() {
        let gradient = Gradient::new(Rgb::BLACK, Rgb::WHITE, 0);

        assert_eq!(gradient.max_size(), 2);
    }

    #[test]
    fn test_lightness_of_grey_ramp_is_linear() {
        let gradient = Gradient::new(Rgb::BLACK, Rgb::WHITE, 2);

        let quarter = rgb_to_hsl(gradient.value(0.25));

        assert!((quarter.l - 25.0).abs() < EPSILON);
        assert_eq!(quarter.s, Hsl::default().s);
    }
}
