/// Linear RGB colour, each channel in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0);

    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Clamps every channel into `[0, 1]`; NaN channels become 0.
    #[must_use]
    pub fn clamped(self) -> Self {
        let clamp = |c: f32| if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) };

        Self {
            r: clamp(self.r),
            g: clamp(self.g),
            b: clamp(self.b),
        }
    }

    #[must_use]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    #[must_use]
    pub fn from_array(rgb: [f32; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }

    #[must_use]
    pub fn to_bytes(self) -> [u8; 3] {
        let quantise = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;

        [quantise(self.r), quantise(self.g), quantise(self.b)]
    }
}
