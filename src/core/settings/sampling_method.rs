/// How the render stage distributes sub-pixel samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingMethod {
    #[default]
    RandomPoint,
    JitteredGrid,
    Grid,
}

impl SamplingMethod {
    pub const ALL: &'static [Self] = &[Self::RandomPoint, Self::JitteredGrid, Self::Grid];

    #[must_use]
    pub const fn shader_index(self) -> i32 {
        match self {
            Self::RandomPoint => 0,
            Self::JitteredGrid => 1,
            Self::Grid => 2,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::RandomPoint => "Random point",
            Self::JitteredGrid => "Jittered grid",
            Self::Grid => "Grid",
        }
    }

    /// Temporal accumulation needs a different sample pattern every frame; a fixed
    /// grid would add the same samples over and over.
    #[must_use]
    pub const fn supports_temporal(self) -> bool {
        !matches!(self, Self::Grid)
    }

    /// Jittered grids take `n` per axis, so the effective sample count is `n²`.
    #[must_use]
    pub const fn samples_suffix(self) -> &'static str {
        match self {
            Self::JitteredGrid => "²",
            Self::RandomPoint | Self::Grid => "",
        }
    }
}

impl std::fmt::Display for SamplingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(SamplingMethod::ALL.first(), Some(&SamplingMethod::default()));
    }

    #[test]
    fn only_grid_is_incompatible_with_temporal() {
        assert!(SamplingMethod::RandomPoint.supports_temporal());
        assert!(SamplingMethod::JitteredGrid.supports_temporal());
        assert!(!SamplingMethod::Grid.supports_temporal());
    }

    #[test]
    fn shader_indices_follow_declaration_order() {
        for (i, method) in SamplingMethod::ALL.iter().enumerate() {
            assert_eq!(method.shader_index(), i as i32);
        }
    }
}
