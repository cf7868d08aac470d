//! Frame timing and animation clocks.
//!
//! Two separate concerns:
//! - [`FrameClock`] measures elapsed wall time between frames. One clock per
//!   driving loop, never shared; its sample is what gets handed to
//!   `StarPool::tick`.
//! - [`RotationClock`] integrates the rotation angle shared by every live
//!   star in a pool. Each pool owns one, so two pools ticked at different
//!   rates never interfere.

mod frame_clock;
mod rotation;

pub use frame_clock::{FrameClock, FrameTime};
pub use rotation::RotationClock;
