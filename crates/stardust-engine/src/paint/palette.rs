use glam::Vec2;
use rand::Rng;

use super::ColorRgba;

/// Fixed palette keyed by NDC quadrant: +x+y, -x+y, -x-y, +x-y.
const QUADRANT_PALETTE: [ColorRgba; 4] = [
    ColorRgba::new(1.0, 0.84, 0.25, 1.0),
    ColorRgba::new(0.35, 0.62, 1.0, 1.0),
    ColorRgba::new(0.72, 0.35, 1.0, 1.0),
    ColorRgba::new(1.0, 0.42, 0.35, 1.0),
];

/// Spawn-time color assignment policy.
///
/// `Random` draws each RGB channel uniformly from `[0, 1)` and leaves the
/// star opaque. `Quadrant` keys a fixed palette on the NDC quadrant of the
/// spawn point; points on an axis resolve toward the positive side.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum SpawnColor {
    #[default]
    Random,
    Quadrant,
}

impl SpawnColor {
    pub fn pick<R: Rng + ?Sized>(self, rng: &mut R, position: Vec2) -> ColorRgba {
        match self {
            SpawnColor::Random => ColorRgba::new(rng.random(), rng.random(), rng.random(), 1.0),
            SpawnColor::Quadrant => {
                let idx = match (position.x >= 0.0, position.y >= 0.0) {
                    (true, true) => 0,
                    (false, true) => 1,
                    (false, false) => 2,
                    (true, false) => 3,
                };
                QUADRANT_PALETTE[idx]
            }
        }
    }
}
