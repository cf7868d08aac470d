//! Terminal rasterizer for pool snapshots.
//!
//! Stands in for the GPU backend: reads translations and scales straight
//! from the packed buffer at the layout's fixed offsets and "draws"
//! `snapshot.instances` instances. Anything outside NDC, parked ring slots
//! included, gets clipped exactly as a real viewport would clip it.

use stardust_engine::pool::PoolSnapshot;

/// Renders the snapshot into a bordered `cols` x `rows` character grid.
pub fn render(snapshot: &PoolSnapshot<'_>, cols: usize, rows: usize) -> String {
    let mut grid = vec![vec![' '; cols]; rows];

    for slot in 0..snapshot.instances {
        let at = snapshot.translation(slot);
        if !(-1.0..=1.0).contains(&at.x) || !(-1.0..=1.0).contains(&at.y) {
            continue;
        }
        let col = ((at.x + 1.0) / 2.0 * (cols - 1) as f32).round() as usize;
        // +Y is up in NDC; row 0 is the top of the grid.
        let row = ((1.0 - at.y) / 2.0 * (rows - 1) as f32).round() as usize;
        grid[row][col] = glyph(snapshot.scale(slot));
    }

    let mut out = String::with_capacity((cols + 6) * (rows + 2));
    out.push_str("  ┌");
    out.push_str(&"─".repeat(cols));
    out.push_str("┐\n");
    for row in &grid {
        out.push_str("  │");
        out.extend(row.iter());
        out.push_str("│\n");
    }
    out.push_str("  └");
    out.push_str(&"─".repeat(cols));
    out.push('┘');
    out
}

/// Bigger stars print heavier glyphs. A slot shrunk past zero keeps printing
/// as a speck until the ring retires it.
fn glyph(scale: f32) -> char {
    if scale > 0.35 {
        '*'
    } else if scale > 0.15 {
        '+'
    } else {
        '.'
    }
}

#[cfg(test)]
mod tests {
    use stardust_engine::coords::Viewport;
    use stardust_engine::pool::{PoolConfig, RingPool, Star, StarPool};

    use super::*;

    #[test]
    fn draws_live_stars_and_clips_parked_slots() {
        let mut pool = RingPool::new(PoolConfig {
            capacity: 2,
            scale_delta: 0.25,
            angle_step_deg_per_sec: 45.0,
            colors: false,
        });
        let center = Viewport::new(2.0, 2.0).ndc_from_device(1.0, 1.0);
        pool.spawn(Star::new(center, 0.5)).unwrap();

        let art = render(&pool.snapshot(), 11, 5);
        let lines: Vec<&str> = art.lines().collect();
        // 5 grid rows plus two border rows; the star sits dead center.
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[3].chars().nth(8), Some('*'));
        // The parked slot is off-screen, so exactly one glyph shows.
        assert_eq!(art.chars().filter(|c| *c == '*').count(), 1);
    }

    #[test]
    fn glyph_thins_out_as_the_star_shrinks() {
        assert_eq!(glyph(0.5), '*');
        assert_eq!(glyph(0.2), '+');
        assert_eq!(glyph(0.05), '.');
        assert_eq!(glyph(-0.1), '.');
    }
}
