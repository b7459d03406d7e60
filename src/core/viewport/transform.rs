//! Pan/zoom state mapping screen pixels onto the fractal plane.
//!
//! `dimensions` and `scale` are derived from `zoom_factor`, the mode defaults and the
//! resolution on every read, so they can never go stale relative to each other.
//! Every mutator returns after the state is final; the caller is responsible for
//! invalidating accumulation.

use crate::core::data::dvec2::DVec2;
use crate::core::data::resolution::Resolution;
use crate::core::viewport::fractal_mode::FractalMode;

pub const DEFAULT_ZOOM_SENSITIVITY: f64 = 0.3;
pub const DEFAULT_MIN_ZOOM_FACTOR: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewportTransform {
    resolution: Resolution,
    mode: FractalMode,
    zoom_factor: f64,
    center: DVec2,
    zoom_sensitivity: f64,
    min_zoom_factor: f64,
}

impl ViewportTransform {
    #[must_use]
    pub fn new(resolution: Resolution, mode: FractalMode) -> Self {
        Self {
            resolution,
            mode,
            zoom_factor: 1.0,
            center: mode.default_center(),
            zoom_sensitivity: DEFAULT_ZOOM_SENSITIVITY,
            min_zoom_factor: DEFAULT_MIN_ZOOM_FACTOR,
        }
    }

    #[must_use]
    pub fn with_zoom_limits(mut self, sensitivity: f64, min_zoom_factor: f64) -> Self {
        self.zoom_sensitivity = sensitivity;
        self.min_zoom_factor = if min_zoom_factor > 0.0 {
            min_zoom_factor
        } else {
            DEFAULT_MIN_ZOOM_FACTOR
        };
        self
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn mode(&self) -> FractalMode {
        self.mode
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    #[must_use]
    pub fn center(&self) -> DVec2 {
        self.center
    }

    /// Plane extent currently on screen: mode default divided by the zoom factor.
    #[must_use]
    pub fn resolved_dimensions(&self) -> DVec2 {
        self.mode.default_dimensions() / self.zoom_factor
    }

    /// Pixels per plane unit along each axis.
    #[must_use]
    pub fn scale(&self) -> DVec2 {
        self.resolution.as_dvec2() / self.resolved_dimensions()
    }

    pub fn set_resolution(&mut self, width: u32, height: u32) {
        self.resolution = Resolution::new(width, height);
    }

    /// Drags the view by a screen-space delta (y grows downward on screen, upward on the plane).
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.center -= DVec2::new(dx, -dy) / self.scale();
    }

    pub fn zoom(&mut self, scroll_delta: f64) {
        let zoomed = self.zoom_factor * (1.0 + scroll_delta * self.zoom_sensitivity);

        self.zoom_factor = if zoomed.is_finite() && zoomed > self.min_zoom_factor {
            zoomed
        } else if zoomed.is_infinite() && zoomed > 0.0 {
            f64::MAX
        } else {
            self.min_zoom_factor
        };
    }

    /// Moves the centre to the plane point under pixel `(x, y)`.
    pub fn center_on(&mut self, x: f64, y: f64) {
        let half = self.resolution.as_dvec2().scaled(0.5);

        self.center += DVec2::new(x - half.x, -(y - half.y)) / self.scale();
    }

    pub fn set_mode(&mut self, mode: FractalMode) {
        self.mode = mode;
        self.reset();
    }

    /// Restores the current mode's home view.
    pub fn reset(&mut self) {
        self.zoom_factor = 1.0;
        self.center = self.mode.default_center();
    }
}
