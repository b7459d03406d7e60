use crate::core::data::dvec2::DVec2;

/// Pixel size of the render target. Both sides are always at least 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    /// Builds a resolution, raising zero sides to 1 so scale never divides by zero.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Same as [`Resolution::new`] for signed sources such as cast window sizes.
    #[must_use]
    pub fn from_signed(width: i64, height: i64) -> Self {
        let clamp = |side: i64| side.clamp(1, i64::from(u32::MAX)) as u32;

        Self::new(clamp(width), clamp(height))
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(f64::from(self.width), f64::from(self.height))
    }

    #[must_use]
    pub fn to_ivec2(&self) -> [i32; 2] {
        let narrow = |side: u32| i32::try_from(side).unwrap_or(i32::MAX);

        [narrow(self.width), narrow(self.height)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_positive_sides() {
        let resolution = Resolution::new(1920, 1080);

        assert_eq!(resolution.width(), 1920);
        assert_eq!(resolution.height(), 1080);
    }

    #[test]
    fn test_zero_sides_clamp_to_one() {
        let resolution = Resolution::new(0, 0);

        assert_eq!(resolution.width(), 1);
        assert_eq!(resolution.height(), 1);
    }

    #[test]
    fn test_from_signed_clamps_negative_sides() {
        let resolution = Resolution::from_signed(-20, 480);

        assert_eq!(resolution, Resolution::new(1, 480));
    }

    #[test]
    fn test_ivec2_saturates() {
        let resolution = Resolution::new(u32::MAX, 2);

        assert_eq!(resolution.to_ivec2(), [i32::MAX, 2]);
    }
}
