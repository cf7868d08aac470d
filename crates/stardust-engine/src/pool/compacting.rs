use std::time::Duration;

use super::{InstanceArena, PoolConfig, PoolError, PoolSnapshot, SlotLayout, Star, StarPool};
use crate::time::RotationClock;

/// Dense age-out pool.
///
/// Live stars sit in an order-irrelevant dense list. A tick shrinks every
/// star, swap-removes the ones that have shrunk to zero or below, then
/// repacks the arena densely, so the backend draws exactly `len()` instances
/// from the front of the buffer and never sees an expired star.
///
/// `spawn` only appends the record; the new star reaches the packed buffer
/// on the next tick.
pub struct CompactingPool {
    config: PoolConfig,
    clock: RotationClock,
    live: Vec<Star>,
    arena: InstanceArena,
}

impl CompactingPool {
    pub fn new(config: PoolConfig) -> Self {
        let layout = SlotLayout::new(config.capacity, config.colors);
        Self {
            clock: RotationClock::new(config.angle_step_deg_per_sec),
            live: Vec::with_capacity(config.capacity),
            arena: InstanceArena::new(layout),
            config,
        }
    }

    /// Repacks slots `0..live.len()` from the live list.
    fn pack(&mut self) {
        let angle = self.clock.angle();
        for (slot, star) in self.live.iter().enumerate() {
            self.arena.write_rotation_z(slot, angle);
            self.arena.write_translation(slot, star.position);
            self.arena.write_scale(slot, star.scale);
            self.arena.write_color(slot, star.color);
        }
    }
}

impl StarPool for CompactingPool {
    fn spawn(&mut self, star: Star) -> Result<(), PoolError> {
        debug_assert!(
            star.position.is_finite() && star.scale.is_finite() && star.color.is_finite(),
            "spawned star must be finite",
        );
        if self.live.len() == self.config.capacity {
            return Err(PoolError::Full {
                capacity: self.config.capacity,
            });
        }
        self.live.push(star);
        Ok(())
    }

    fn tick(&mut self, elapsed: Duration) {
        self.clock.advance(elapsed);

        for star in &mut self.live {
            star.scale -= self.config.scale_delta;
        }

        // Survivor order is irrelevant to the draw, so swap_remove is fine.
        let mut i = 0;
        let before = self.live.len();
        while i < self.live.len() {
            if self.live[i].scale <= 0.0 {
                self.live.swap_remove(i);
            } else {
                i += 1;
            }
        }
        let expired = before - self.live.len();
        if expired > 0 {
            log::trace!("{expired} stars expired, {} live", self.live.len());
        }

        self.pack();
    }

    fn snapshot(&self) -> PoolSnapshot<'_> {
        PoolSnapshot {
            floats: self.arena.floats(),
            layout: self.arena.layout(),
            live: self.live.len(),
            instances: self.live.len(),
        }
    }

    fn len(&self) -> usize {
        self.live.len()
    }

    fn capacity(&self) -> usize {
        self.config.capacity
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::paint::ColorRgba;

    const EPS: f32 = 1e-6;

    fn pool(capacity: usize, scale_delta: f32) -> CompactingPool {
        CompactingPool::new(PoolConfig {
            capacity,
            scale_delta,
            ..PoolConfig::default()
        })
    }

    /// 500ms at the default 60 deg/s is a 30 degree step.
    const HALF_SEC: Duration = Duration::from_millis(500);

    // ── spawn ───────────────────────────────────────────────────────────────

    #[test]
    fn spawn_appends_until_full() {
        let mut p = pool(3, 0.25);
        for i in 0..3 {
            assert_eq!(p.len(), i);
            p.spawn(Star::new(Vec2::ZERO, 0.5)).unwrap();
        }
        assert!(p.is_full());
        assert_eq!(
            p.spawn(Star::new(Vec2::ZERO, 0.5)),
            Err(PoolError::Full { capacity: 3 }),
        );
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn rejected_spawn_leaves_the_buffer_untouched() {
        let mut p = pool(2, 0.25);
        p.spawn(Star::new(Vec2::new(0.1, 0.2), 1.0)).unwrap();
        p.spawn(Star::new(Vec2::new(-0.3, 0.4), 1.0)).unwrap();
        p.tick(HALF_SEC);

        let before = p.snapshot().floats.to_vec();
        assert!(p.spawn(Star::new(Vec2::ZERO, 1.0)).is_err());
        assert_eq!(p.snapshot().floats, &before[..]);
        assert_eq!(p.len(), 2);
    }

    // ── tick ────────────────────────────────────────────────────────────────

    #[test]
    fn tick_shrinks_every_live_star() {
        let mut p = pool(4, 0.25);
        p.spawn(Star::new(Vec2::ZERO, 1.0)).unwrap();
        p.spawn(Star::new(Vec2::ZERO, 0.5)).unwrap();
        p.tick(HALF_SEC);
        assert_eq!(p.snapshot().scale(0), 0.75);
        assert_eq!(p.snapshot().scale(1), 0.25);
    }

    #[test]
    fn shrink_is_per_tick_not_per_elapsed_time() {
        let mut fast = pool(2, 0.25);
        let mut slow = pool(2, 0.25);
        fast.spawn(Star::new(Vec2::ZERO, 1.0)).unwrap();
        slow.spawn(Star::new(Vec2::ZERO, 1.0)).unwrap();

        fast.tick(Duration::from_millis(16));
        slow.tick(Duration::from_millis(160));

        assert_eq!(fast.snapshot().scale(0), slow.snapshot().scale(0));
    }

    #[test]
    fn star_expires_at_exactly_zero() {
        let mut p = pool(2, 0.25);
        p.spawn(Star::new(Vec2::ZERO, 0.5)).unwrap();
        p.tick(HALF_SEC);
        assert_eq!(p.len(), 1);
        p.tick(HALF_SEC);
        // 0.5 - 0.25 - 0.25 is exactly zero, which counts as expired.
        assert_eq!(p.len(), 0);
        assert_eq!(p.snapshot().instances, 0);
    }

    #[test]
    fn batch_survives_small_positive_scales_then_expires_together() {
        let mut p = pool(3, 0.5);
        for _ in 0..3 {
            p.spawn(Star::new(Vec2::ZERO, 0.6)).unwrap();
        }

        p.tick(HALF_SEC);
        assert_eq!(p.len(), 3);
        for slot in 0..3 {
            assert!((p.snapshot().scale(slot) - 0.1).abs() < EPS);
        }

        // Second tick takes everything negative at once.
        p.tick(HALF_SEC);
        assert_eq!(p.len(), 0);
    }

    #[test]
    fn snapshot_is_stable_without_a_tick() {
        let mut p = pool(2, 0.25);
        p.spawn(Star::new(Vec2::new(0.3, 0.3), 0.5)).unwrap();
        p.tick(HALF_SEC);

        let first = p.snapshot().floats.to_vec();
        let again = p.snapshot();
        assert_eq!(again.floats, &first[..]);
        assert_eq!(again.live, 1);
    }

    #[test]
    fn survivors_repack_densely_after_an_expiry() {
        let mut p = pool(4, 0.25);
        let keep = Vec2::new(0.5, -0.5);
        p.spawn(Star::new(Vec2::new(-0.1, 0.1), 0.25)).unwrap();
        p.spawn(Star::new(keep, 1.0).with_color(ColorRgba::new(0.2, 0.4, 0.6, 1.0)))
            .unwrap();

        p.tick(HALF_SEC);

        let snap = p.snapshot();
        assert_eq!(snap.live, 1);
        assert_eq!(snap.instances, 1);
        assert_eq!(snap.translation(0), keep);
        assert_eq!(snap.scale(0), 0.75);
        assert_eq!(snap.color(0), Some(ColorRgba::new(0.2, 0.4, 0.6, 1.0)));
    }

    #[test]
    fn shared_angle_rotates_every_slot_identically() {
        let mut p = pool(3, 0.003);
        p.spawn(Star::new(Vec2::new(0.1, 0.0), 0.5)).unwrap();
        p.spawn(Star::new(Vec2::new(-0.1, 0.0), 0.5)).unwrap();
        p.tick(HALF_SEC);

        let snap = p.snapshot();
        let r0 = &snap.floats[snap.layout.rotation(0)];
        let r1 = &snap.floats[snap.layout.rotation(1)];
        assert_eq!(r0, r1);
        assert!((r0[0] - 30f32.to_radians().cos()).abs() < EPS);
        assert!((r0[1] - 30f32.to_radians().sin()).abs() < EPS);
    }

    #[test]
    fn angle_accumulates_across_empty_ticks() {
        let mut p = pool(2, 0.003);
        p.tick(Duration::from_secs(1));
        assert!(p.is_empty());

        p.spawn(Star::new(Vec2::ZERO, 0.5)).unwrap();
        p.tick(HALF_SEC);

        // 60 + 30 degrees by now.
        let snap = p.snapshot();
        let r = &snap.floats[snap.layout.rotation(0)];
        assert!((r[1] - 90f32.to_radians().sin()).abs() < EPS);
    }

    #[test]
    fn drained_pool_accepts_new_spawns() {
        let mut p = pool(2, 0.25);
        p.spawn(Star::new(Vec2::ZERO, 0.25)).unwrap();
        p.spawn(Star::new(Vec2::ZERO, 0.25)).unwrap();
        p.tick(HALF_SEC);
        assert!(p.is_empty());

        p.spawn(Star::new(Vec2::ZERO, 0.5)).unwrap();
        assert_eq!(p.len(), 1);
    }
}
