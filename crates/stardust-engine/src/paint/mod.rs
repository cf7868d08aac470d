//! Color types and spawn-time color assignment.

mod color;
mod palette;

pub use color::ColorRgba;
pub use palette::SpawnColor;
