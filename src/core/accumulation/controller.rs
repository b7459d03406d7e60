//! Temporal accumulation bookkeeping.
//!
//! After any visual change the previous frames no longer describe the image, so the
//! controller restarts the sample count and suppresses temporal blending for a short
//! settling window before handing control back to the user toggle.

/// Frames after an invalidation during which temporal blending is forced off.
pub const SETTLE_FRAMES: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccumulationPhase {
    Settling,
    Accumulating,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccumulationController {
    frame_count: u32,
    skip_count: u8,
    temporal_enabled: bool,
}

impl AccumulationController {
    /// Starts in the settling phase, as if the initial state had just been invalidated.
    #[must_use]
    pub fn new(temporal_enabled: bool) -> Self {
        Self {
            frame_count: 0,
            skip_count: SETTLE_FRAMES,
            temporal_enabled,
        }
    }

    #[must_use]
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    #[must_use]
    pub fn skip_count(&self) -> u8 {
        self.skip_count
    }

    #[must_use]
    pub fn temporal_enabled(&self) -> bool {
        self.temporal_enabled
    }

    #[must_use]
    pub fn phase(&self) -> AccumulationPhase {
        if self.skip_count > 0 {
            AccumulationPhase::Settling
        } else {
            AccumulationPhase::Accumulating
        }
    }

    /// Mirrors the user's temporal toggle. Does not invalidate on its own.
    pub fn set_temporal_enabled(&mut self, enabled: bool) {
        self.temporal_enabled = enabled;
    }

    pub fn invalidate(&mut self) {
        self.frame_count = 0;
        self.skip_count = SETTLE_FRAMES;
    }

    /// Records one render call and reports whether it may blend with previous frames.
    pub fn on_frame_rendered(&mut self) -> bool {
        self.frame_count = self.frame_count.saturating_add(1);

        if self.skip_count > 0 {
            self.skip_count -= 1;
            return false;
        }

        self.temporal_enabled
    }
}

impl Default for AccumulationController {
    fn default() -> Self {
        Self::new(true)
    }
}
