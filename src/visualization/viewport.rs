//! World-to-screen mapping for renderers
//!
//! The window size is configuration passed in by the caller; the physics
//! core has no notion of pixels.

use crate::simulation::states::NVec2;

/// Default ratio between the fitted view and the widest body separation
pub const DEFAULT_MARGIN: f64 = 2.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,  // pixels (or character cells)
    pub height: f64,
    pub margin: f64, // view spans `margin * max_distance`
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: DEFAULT_MARGIN,
        }
    }

    /// Pixels per metre so that `margin * max_distance` fits the short side.
    /// Falls back to 1.0 when there is nothing to fit.
    pub fn fit_scale(&self, max_distance: f64) -> f64 {
        let span = self.margin * max_distance;
        if span > 0.0 && span.is_finite() {
            self.width.min(self.height) / span
        } else {
            1.0
        }
    }

    /// Screen coordinates of a world position, origin at the viewport
    /// center and y pointing down
    pub fn to_screen(&self, position: &NVec2, scale: f64) -> (f64, f64) {
        (
            self.width / 2.0 + position.x * scale,
            self.height / 2.0 - position.y * scale,
        )
    }
}
