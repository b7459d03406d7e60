use std::ops::{Add, AddAssign, Div, Sub, SubAssign};

/// Double-precision 2D vector in plane coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct DVec2 {
    pub x: f64,
    pub y: f64,
}

impl DVec2 {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    #[must_use]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl Add for DVec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl AddAssign for DVec2 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for DVec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl SubAssign for DVec2 {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

// component-wise
impl Div for DVec2 {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        Self {
            x: self.x / other.x,
            y: self.y / other.y,
        }
    }
}

impl Div<f64> for DVec2 {
    type Output = Self;

    fn div(self, divisor: f64) -> Self {
        Self {
            x: self.x / divisor,
            y: self.y / divisor,
        }
    }
}
