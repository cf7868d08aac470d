mod ascii;

use std::time::Duration;

use anyhow::{Result, bail};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stardust_engine::coords::Viewport;
use stardust_engine::logging::{LoggingConfig, init_logging};
use stardust_engine::paint::SpawnColor;
use stardust_engine::pool::{CompactingPool, PoolConfig, RingPool, Star, StarPool};
use stardust_engine::time::FrameClock;

const VIEWPORT: Viewport = Viewport::new(640.0, 480.0);
const INITIAL_SCALE: f32 = 0.5;
const FRAMES: u64 = 360;
const RENDER_EVERY: u64 = 60;
const GRID_COLS: usize = 64;
const GRID_ROWS: usize = 20;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║        STARDUST FIELD SESSION          ║");
    println!("  ║   packed instance pool · 30 slots      ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let policy = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "compacting".to_owned());
    match policy.as_str() {
        "compacting" => {
            run_session(CompactingPool::new(PoolConfig::default()));
        }
        "ring" => {
            let mut pool = run_session(RingPool::new(PoolConfig {
                angle_step_deg_per_sec: 45.0,
                colors: false,
                ..PoolConfig::default()
            }));
            drain(&mut pool);
        }
        other => bail!("unknown policy {other:?} (expected \"compacting\" or \"ring\")"),
    }

    Ok(())
}

/// Drives one pool through the scripted click session and returns it.
fn run_session<P: StarPool>(mut pool: P) -> P {
    let mut rng = StdRng::seed_from_u64(0x51A2);
    let script = click_script(&mut rng, pool.capacity());
    let mut clock = FrameClock::new();
    let mut next_click = 0;
    let mut spawned = 0u32;
    let mut dropped = 0u32;

    for frame in 0..FRAMES {
        // Deliver this frame's clicks before ticking, the same order events
        // arrive from a real pointer.
        while next_click < script.len() && script[next_click].0 == frame {
            let (_, x, y) = script[next_click];
            next_click += 1;

            let position = VIEWPORT.ndc_from_device(x, y);
            let star = Star::new(position, INITIAL_SCALE)
                .with_color(SpawnColor::Random.pick(&mut rng, position));
            match pool.spawn(star) {
                Ok(()) => {
                    spawned += 1;
                    log::debug!(
                        "spawn at ({:+.2}, {:+.2}), {} live",
                        position.x,
                        position.y,
                        pool.len(),
                    );
                }
                Err(err) => {
                    dropped += 1;
                    log::warn!("{err}; click dropped");
                }
            }
        }

        let ft = clock.tick();
        pool.tick(ft.elapsed);

        if frame % RENDER_EVERY == 0 {
            let snap = pool.snapshot();
            println!("{}", ascii::render(&snap, GRID_COLS, GRID_ROWS));
            println!(
                "  frame {frame:>3} · {} live · {} drawn · {} bytes packed",
                snap.live,
                snap.instances,
                snap.bytes().len(),
            );
            println!();
        }

        std::thread::sleep(Duration::from_millis(15));
    }

    println!(
        "  session complete · {spawned} spawned · {dropped} dropped · {} still live",
        pool.len(),
    );
    println!();
    pool
}

/// Retires whatever the session left behind, one star at a time, running
/// the ring past empty on purpose.
fn drain(pool: &mut RingPool) {
    let mut drained = 0;
    loop {
        match pool.dequeue() {
            Ok(()) => drained += 1,
            Err(err) => {
                log::info!("drained {drained} stars, then: {err}");
                break;
            }
        }
    }
}

/// Scripted pointer-downs as `(frame, device_x, device_y)`, sorted by frame.
///
/// The opening burst runs two clicks past capacity to provoke pool-full
/// rejections; a slow trickle follows once stars start expiring.
fn click_script<R: Rng>(rng: &mut R, capacity: usize) -> Vec<(u64, f32, f32)> {
    let mut script = Vec::new();
    for i in 0..capacity + 2 {
        let (x, y) = random_point(rng);
        script.push((2 + 2 * i as u64, x, y));
    }
    for i in 0..6 {
        let (x, y) = random_point(rng);
        script.push((120 + 40 * i, x, y));
    }
    script
}

/// A device-pixel position away from the viewport edges.
fn random_point<R: Rng>(rng: &mut R) -> (f32, f32) {
    (
        rng.random_range(40.0..VIEWPORT.width - 40.0),
        rng.random_range(40.0..VIEWPORT.height - 40.0),
    )
}
