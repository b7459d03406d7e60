//! Cylindrical colour space used for gradient interpolation.
//!
//! Hue is in degrees `[0, 360)`, saturation and lightness are percentages `[0, 100]`.

use crate::core::colour::rgb::Rgb;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    #[must_use]
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Component-wise linear interpolation from `self` (t = 0) to `other` (t = 1).
    ///
    /// Hue is treated as a plain scalar, so red (0°) to blue (240°) passes through green.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;

        Self {
            h: mix(self.h, other.h),
            s: mix(self.s, other.s),
            l: mix(self.l, other.l),
        }
    }
}

#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let Rgb { r, g, b } = rgb;

    let max = r.max(g.max(b));
    let min = r.min(g.min(b));
    let delta = max - min;

    let mut h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    h *= 60.0;

    if h < 0.0 {
        h += 360.0;
    }
    // rem_euclid may round up to exactly 6.0 for tiny negative inputs
    if h >= 360.0 {
        h -= 360.0;
    }

    let l = (max + min) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    Hsl::new(h, s * 100.0, l * 100.0)
}

#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h.rem_euclid(360.0);
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(r + m, g + m, b + m)
}
