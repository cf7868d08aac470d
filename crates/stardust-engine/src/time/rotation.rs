use std::time::Duration;

/// Integrates the rotation angle shared by every live star in a pool.
///
/// The angle advances by `step * elapsed` and wraps into `[0, 360)`. It is
/// pool state, not process state: a pool reads it when packing and advances
/// it exactly once per tick.
#[derive(Debug, Clone)]
pub struct RotationClock {
    angle_deg: f32,
    step_deg_per_sec: f32,
}

impl RotationClock {
    pub fn new(step_deg_per_sec: f32) -> Self {
        Self {
            angle_deg: 0.0,
            step_deg_per_sec,
        }
    }

    /// Current angle in degrees, within `[0, 360)`.
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle_deg
    }

    /// Advances the angle by `elapsed` and returns the new value.
    pub fn advance(&mut self, elapsed: Duration) -> f32 {
        let step = self.step_deg_per_sec * elapsed.as_secs_f32();
        self.angle_deg = (self.angle_deg + step).rem_euclid(360.0);
        self.angle_deg
    }
}
