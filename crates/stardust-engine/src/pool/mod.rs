//! Fixed-capacity star pools.
//!
//! A pool owns up to `capacity` star records plus a packed [`InstanceArena`]
//! sized for one batched draw. Two lifecycle policies cover the demos:
//!
//! - [`CompactingPool`]: dense live list, expired stars swap-removed, the
//!   arena repacked densely every tick. The backend draws `len()` instances
//!   from the front of the buffer.
//! - [`RingPool`]: fixed slots recycled FIFO through `front`/`rear`, expired
//!   slots parked off-screen. The backend always draws the full slot range,
//!   so per-slot buffer offsets stay stable while stars come and go.
//!
//! Both implement [`StarPool`] and produce the same [`PoolSnapshot`].

mod api;
mod arena;
mod compacting;
mod config;
mod error;
mod ring;
mod star;


pub use api::{PoolSnapshot, StarPool};
pub use arena::{COLOR_FLOATS, InstanceArena, MAT4_FLOATS, SlotLayout};
pub use compacting::CompactingPool;
pub use config::{MAX_STARS, PoolConfig};
pub use error::PoolError;
pub use ring::RingPool;
pub use star::Star;
