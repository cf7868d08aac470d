//! Coordinate conventions shared by the simulation and its backends.
//!
//! Canonical simulation space is normalized device coordinates (NDC):
//! `[-1, 1]` on both axes, origin at the viewport center, +X right, +Y up.
//! Pointer input arrives in device pixels (top-left origin, +Y down);
//! [`Viewport`] performs the conversion at the input boundary so nothing
//! past it ever sees a pixel coordinate.

mod viewport;

pub use viewport::{OFFSCREEN, Viewport};
