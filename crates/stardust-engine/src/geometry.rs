//! Base star mesh shared by every instance.
//!
//! A twelve-vertex triangle fan: the center first, then the outline walked
//! clockwise from the top point, closed by repeating the top point. The top
//! point sits at unit distance from the center, so a star at scale `s`
//! reaches `s` NDC units from center to tip.
//!
//! Backends upload this once; per-instance rotation, translation and scale
//! come from the packed pool buffer.

use glam::Vec2;

pub const STAR_FAN: [Vec2; 12] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(0.22, 0.31),
    Vec2::new(0.95, 0.31),
    Vec2::new(0.36, -0.12),
    Vec2::new(0.59, -0.81),
    Vec2::new(0.0, -0.38),
    Vec2::new(-0.59, -0.81),
    Vec2::new(-0.36, -0.12),
    Vec2::new(-0.95, 0.31),
    Vec2::new(-0.22, 0.31),
    Vec2::new(0.0, 1.0),
];
