//! Schematic-map coordinate type.
//!
//! All venue coordinates live in a fixed virtual canvas of 900×400 units.
//! Presentation layers rescale into their own drawing surface with
//! [`CanvasPoint::scaled_to`]; the engine itself never deals in pixels.
//! The y axis grows downward, screen-style — "up" on the schematic is
//! negative Δy.

/// Width of the virtual reference canvas, in canvas units.
pub const FRAME_WIDTH: f32 = 900.0;

/// Height of the virtual reference canvas, in canvas units.
pub const FRAME_HEIGHT: f32 = 400.0;

/// A position on the schematic reference canvas.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasPoint {
    pub x: f32,
    pub y: f32,
}

impl CanvasPoint {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Rescale into a render surface of `width`×`height`.
    ///
    /// Each axis scales independently (scale = surface dimension ÷ frame
    /// dimension), so non-4.5:2 surfaces stretch rather than letterbox —
    /// matching how the kiosk map fills its container.
    #[inline]
    pub fn scaled_to(self, width: f32, height: f32) -> (f32, f32) {
        (self.x * width / FRAME_WIDTH, self.y * height / FRAME_HEIGHT)
    }

    /// Straight-line distance in canvas units.  Used for tap-to-select
    /// thresholds, not for routing (edge weights are authored costs).
    #[inline]
    pub fn distance(self, other: CanvasPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for CanvasPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
