//! Stardust engine crate.
//!
//! Simulation core of the instanced star demos: fixed-capacity pools pack
//! per-star transforms and colors into one contiguous buffer, shaped for a
//! single batched draw. Rendering backends only consume a
//! [`pool::PoolSnapshot`] plus the base mesh in [`geometry`].

pub mod pool;
pub mod geometry;
pub mod time;

pub mod coords;
pub mod paint;
pub mod logging;
