use std::time::Duration;

use super::{InstanceArena, PoolConfig, PoolError, PoolSnapshot, SlotLayout, Star, StarPool};
use crate::coords::OFFSCREEN;
use crate::time::RotationClock;

/// FIFO ring pool.
///
/// Slots are fixed: `rear` admits, `front` retires, `len` is the live count
/// and lives here in the pool, never anywhere ambient. The backend always
/// draws the full slot range, which keeps per-slot buffer offsets stable
/// while stars come and go; slots outside `front..front+len` are parked at
/// [`OFFSCREEN`] where clip space never sees them.
///
/// `spawn` packs its slot immediately with the current shared angle. A tick
/// retires at most one star, and only the oldest, once its scale has gone
/// negative; a front star sitting at exactly zero survives the tick.
pub struct RingPool {
    config: PoolConfig,
    clock: RotationClock,
    slots: Box<[Star]>,
    front: usize,
    rear: usize,
    len: usize,
    arena: InstanceArena,
}

impl RingPool {
    pub fn new(config: PoolConfig) -> Self {
        let layout = SlotLayout::new(config.capacity, config.colors);
        let mut arena = InstanceArena::new(layout);
        // Park everything up front; a backend drawing the full slot range
        // must never see an unparked empty slot.
        for slot in 0..config.capacity {
            arena.write_translation(slot, OFFSCREEN);
        }
        Self {
            clock: RotationClock::new(config.angle_step_deg_per_sec),
            slots: vec![Star::new(OFFSCREEN, 0.0); config.capacity].into_boxed_slice(),
            front: 0,
            rear: 0,
            len: 0,
            arena,
            config,
        }
    }

    /// Retires the oldest star: parks its slot off-screen and advances
    /// `front`. Reports [`PoolError::Empty`] with state unchanged when
    /// nothing is live.
    pub fn dequeue(&mut self) -> Result<(), PoolError> {
        if self.len == 0 {
            return Err(PoolError::Empty);
        }
        self.retire_front();
        Ok(())
    }

    fn retire_front(&mut self) {
        log::trace!("retiring slot {}, {} live", self.front, self.len - 1);
        self.slots[self.front].position = OFFSCREEN;
        self.arena.write_translation(self.front, OFFSCREEN);
        self.front = (self.front + 1) % self.config.capacity;
        self.len -= 1;
    }

    fn pack_slot(&mut self, slot: usize, angle: f32) {
        let star = self.slots[slot];
        self.arena.write_rotation_z(slot, angle);
        self.arena.write_translation(slot, star.position);
        self.arena.write_scale(slot, star.scale);
        self.arena.write_color(slot, star.color);
    }
}

impl StarPool for RingPool {
    fn spawn(&mut self, star: Star) -> Result<(), PoolError> {
        debug_assert!(
            star.position.is_finite() && star.scale.is_finite() && star.color.is_finite(),
            "spawned star must be finite",
        );
        // Checked before any write: a rejected spawn leaves slots, indices
        // and the packed buffer untouched.
        if self.len == self.config.capacity {
            return Err(PoolError::Full {
                capacity: self.config.capacity,
            });
        }
        let slot = self.rear;
        self.slots[slot] = star;
        self.pack_slot(slot, self.clock.angle());
        self.rear = (self.rear + 1) % self.config.capacity;
        self.len += 1;
        Ok(())
    }

    fn tick(&mut self, elapsed: Duration) {
        let angle = self.clock.advance(elapsed);

        for i in 0..self.len {
            let slot = (self.front + i) % self.config.capacity;
            self.slots[slot].scale -= self.config.scale_delta;
            self.pack_slot(slot, angle);
        }

        // At most one retirement per tick, strictly oldest-first. Younger
        // slots keep their (possibly negative) scale until they reach the
        // front.
        if self.len > 0 && self.slots[self.front].scale < 0.0 {
            self.retire_front();
        }
    }

    fn snapshot(&self) -> PoolSnapshot<'_> {
        PoolSnapshot {
            floats: self.arena.floats(),
            layout: self.arena.layout(),
            live: self.len,
            instances: self.config.capacity,
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.config.capacity
    }
}
