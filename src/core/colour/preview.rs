use rayon::prelude::*;
use thiserror::Error;

use crate::core::colour::gradient::Gradient;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum GradientPreviewError {
    #[error("preview strip needs at least 2 columns, got {width}")]
    TooNarrow { width: u32 },
}

/// One row of 8-bit RGB samples taken evenly across a gradient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientPreview {
    width: u32,
    row: Vec<u8>,
}

impl GradientPreview {
    /// Samples `gradient` at `x / (width - 1)` for every column, in parallel.
    pub fn bake(gradient: &Gradient, width: u32) -> Result<Self, GradientPreviewError> {
        if width < 2 {
            return Err(GradientPreviewError::TooNarrow { width });
        }

        let last = (width - 1) as f32;
        let row = (0..width)
            .into_par_iter()
            .flat_map_iter(|x| gradient.value(x as f32 / last).to_bytes())
            .collect();

        Ok(Self { width, row })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Packed RGB bytes for the single row, `width * 3` long.
    #[must_use]
    pub fn row(&self) -> &[u8] {
        &self.row
    }

    /// The row repeated `height` times, ready for an image writer.
    #[must_use]
    pub fn to_strip(&self, height: u32) -> Vec<u8> {
        self.row.repeat(height as usize)
    }
}
