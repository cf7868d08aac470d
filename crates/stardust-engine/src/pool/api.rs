use std::time::Duration;

use glam::Vec2;

use super::{PoolError, SlotLayout, Star};
use crate::paint::ColorRgba;

/// Read-only view of a pool's packed buffer for one instanced draw.
///
/// `live` counts live stars; `instances` is how many instances the backend
/// must draw. The two differ under the ring policy, which keeps retired
/// slots in the draw range (parked off-screen) so slot offsets stay fixed.
///
/// The view borrows the pool: its contents cannot change until the next
/// mutating call, and consecutive snapshots with no tick in between are
/// identical.
#[derive(Debug, Copy, Clone)]
pub struct PoolSnapshot<'a> {
    pub floats: &'a [f32],
    pub layout: SlotLayout,
    pub live: usize,
    pub instances: usize,
}

impl<'a> PoolSnapshot<'a> {
    /// Byte view of the packed buffer, for backends that upload bytes.
    #[inline]
    pub fn bytes(self) -> &'a [u8] {
        bytemuck::cast_slice(self.floats)
    }

    /// Reads `slot`'s translation out of its packed matrix.
    pub fn translation(&self, slot: usize) -> Vec2 {
        let t = &self.floats[self.layout.translation(slot)];
        Vec2::new(t[12], t[13])
    }

    /// Reads `slot`'s uniform scale factor off its matrix diagonal.
    pub fn scale(&self, slot: usize) -> f32 {
        self.floats[self.layout.scale(slot)][0]
    }

    /// Reads `slot`'s color, if the layout carries colors.
    pub fn color(&self, slot: usize) -> Option<ColorRgba> {
        let c = &self.floats[self.layout.color(slot)?];
        Some(ColorRgba::new(c[0], c[1], c[2], c[3]))
    }
}

/// Contract shared by both lifecycle policies.
///
/// The driving loop calls `tick` exactly once per animation frame before the
/// backend consumes `snapshot`; input events land between frames and reach
/// the pool only through `spawn`.
pub trait StarPool {
    /// Admits a new star, or reports [`PoolError::Full`] with state
    /// unchanged.
    fn spawn(&mut self, star: Star) -> Result<(), PoolError>;

    /// Advances the shared rotation angle by `elapsed`, shrinks every live
    /// star by the configured per-tick delta, expires what has shrunk away
    /// and repacks the arena.
    fn tick(&mut self, elapsed: Duration);

    /// Packed state as of the most recent mutation.
    fn snapshot(&self) -> PoolSnapshot<'_>;

    /// Number of live stars.
    fn len(&self) -> usize;

    /// Slot capacity.
    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::InstanceArena;

    #[test]
    fn byte_view_covers_the_whole_buffer() {
        let arena = InstanceArena::new(SlotLayout::new(4, true));
        let snap = PoolSnapshot {
            floats: arena.floats(),
            layout: arena.layout(),
            live: 0,
            instances: 4,
        };
        assert_eq!(snap.bytes().len(), arena.layout().byte_len());
    }

    #[test]
    fn helpers_read_back_what_the_writers_packed() {
        let mut arena = InstanceArena::new(SlotLayout::new(2, true));
        arena.write_translation(1, Vec2::new(0.5, -0.25));
        arena.write_scale(1, 0.75);
        arena.write_color(1, ColorRgba::new(0.2, 0.4, 0.6, 0.8));

        let snap = PoolSnapshot {
            floats: arena.floats(),
            layout: arena.layout(),
            live: 2,
            instances: 2,
        };
        assert_eq!(snap.translation(1), Vec2::new(0.5, -0.25));
        assert_eq!(snap.scale(1), 0.75);
        assert_eq!(snap.color(1), Some(ColorRgba::new(0.2, 0.4, 0.6, 0.8)));
    }

    #[test]
    fn color_read_is_none_without_a_color_block() {
        let arena = InstanceArena::new(SlotLayout::new(2, false));
        let snap = PoolSnapshot {
            floats: arena.floats(),
            layout: arena.layout(),
            live: 0,
            instances: 2,
        };
        assert_eq!(snap.color(0), None);
    }
}
