/// Slot count used by the interactive demos.
pub const MAX_STARS: usize = 30;

/// Pool tuning shared by both lifecycle policies.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Maximum number of live stars; also the slot count of the packed arena.
    pub capacity: usize,

    /// Scale decrement applied once per tick.
    ///
    /// Deliberately per-tick rather than per-second: the demos shrink a star
    /// by a fixed amount each animation frame regardless of frame duration,
    /// so star lifetime is measured in frames.
    pub scale_delta: f32,

    /// Shared rotation speed in degrees per second (the demos use 45 to 60).
    pub angle_step_deg_per_sec: f32,

    /// Whether the packed arena carries a per-slot color block.
    pub colors: bool,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            capacity: MAX_STARS,
            scale_delta: 0.003,
            angle_step_deg_per_sec: 60.0,
            colors: true,
        }
    }
}
