use glam::Vec2;

use crate::paint::ColorRgba;

/// One spawned star: fixed NDC position, shrinking scale, spawn-time color.
///
/// The position is set once at spawn and never moves while the star lives.
/// A ring pool parks the *slot* off-screen after expiry; that is slot state,
/// not a change to any live star.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Star {
    /// Spawn position in NDC.
    pub position: Vec2,

    /// Current uniform scale, decremented once per tick until expiry.
    pub scale: f32,

    /// Tint written to the packed color block (when the layout carries one).
    pub color: ColorRgba,
}

impl Star {
    /// A white star at `position` with the given initial scale.
    #[inline]
    pub fn new(position: Vec2, scale: f32) -> Self {
        Self {
            position,
            scale,
            color: ColorRgba::white(),
        }
    }

    #[inline]
    pub fn with_color(mut self, color: ColorRgba) -> Self {
        self.color = color;
        self
    }
}
