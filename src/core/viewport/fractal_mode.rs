use crate::core::data::dvec2::DVec2;

/// Which fractal the render stage evaluates. Each mode has its own home view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalMode {
    #[default]
    Mandelbrot,
    Julia,
    BurningShip,
}

impl FractalMode {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia, Self::BurningShip];

    /// Plane extent shown at zoom factor 1.
    #[must_use]
    pub const fn default_dimensions(self) -> DVec2 {
        match self {
            Self::Mandelbrot => DVec2::new(3.5, 2.0),
            Self::Julia => DVec2::new(3.2, 2.4),
            Self::BurningShip => DVec2::new(3.5, 2.5),
        }
    }

    #[must_use]
    pub const fn default_center(self) -> DVec2 {
        match self {
            Self::Mandelbrot => DVec2::new(-0.75, 0.0),
            Self::Julia => DVec2::new(0.0, 0.0),
            Self::BurningShip => DVec2::new(-0.4, -0.5),
        }
    }

    /// Integer id the render stage switches on.
    #[must_use]
    pub const fn shader_index(self) -> i32 {
        match self {
            Self::Mandelbrot => 0,
            Self::Julia => 1,
            Self::BurningShip => 2,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::BurningShip => "Burning ship",
        }
    }
}

impl std::fmt::Display for FractalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
