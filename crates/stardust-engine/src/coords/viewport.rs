use glam::Vec2;

/// Parking position for retired ring slots.
///
/// Far outside clip space on both axes: a backend that draws every slot of a
/// fixed-capacity buffer never shows an instance translated here.
pub const OFFSCREEN: Vec2 = Vec2::new(100.0, 100.0);

/// Device viewport extent in pixels.
///
/// Pointer events are reported relative to this extent. The simulation
/// itself works in NDC only; [`Viewport::ndc_from_device`] is the one place
/// pixels are converted.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Converts a pointer position in device pixels to NDC.
    ///
    /// Device space has its origin at the top-left corner with +Y down; NDC
    /// has its origin at the center with +Y up. The center maps to `(0, 0)`,
    /// the top-left corner to `(-1, 1)`, the bottom-right to `(1, -1)`.
    #[inline]
    pub fn ndc_from_device(self, x: f32, y: f32) -> Vec2 {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        Vec2::new((x - half_w) / half_w, (half_h - y) / half_h)
    }
}
