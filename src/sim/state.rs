//! Scene state: the circle list, palette cursor and spawn RNG
//!
//! The list only grows. Randomness comes from a seeded PCG so a scene can be
//! replayed from its seed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::actor::{Actor, Bounds};
use super::circle::Circle;
use super::palette::{Palette, PaletteColor};
use crate::consts::*;

/// All circles owned by one drawing application
#[derive(Debug, Clone)]
pub struct Scene {
    /// Seed the spawn RNG started from
    seed: u64,
    rng: Pcg32,
    palette: Palette,
    circles: Vec<Circle>,
}

impl Scene {
    /// Create an empty scene with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            palette: Palette::new(),
            circles: Vec::new(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Next palette color in round-robin order
    pub fn next_color(&mut self) -> PaletteColor {
        self.palette.next_color()
    }

    /// Append `count` circles sharing one color, each with random position,
    /// radius and (positive) velocity. Returns the number appended.
    pub fn add_circles(&mut self, count: usize, actor: Actor, bounds: Bounds) -> usize {
        let color = self.next_color();

        for _ in 0..count {
            let pos = Vec2::new(
                sample(&mut self.rng, 0.0, bounds.width),
                sample(&mut self.rng, 0.0, bounds.height),
            );
            let radius = sample(&mut self.rng, MIN_RADIUS, MAX_RADIUS);
            let vel = Vec2::new(
                sample(&mut self.rng, MIN_SPEED, MAX_SPEED),
                sample(&mut self.rng, MIN_SPEED, MAX_SPEED),
            );
            self.circles.push(Circle::new(pos, vel, radius, color, actor));
        }

        log::debug!(
            "Spawned {} {} circles ({:?}), total {}",
            count,
            actor.as_str(),
            color,
            self.circles.len()
        );
        count
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Mutable view of the circles; a slice so the list cannot shrink
    pub fn circles_mut(&mut self) -> &mut [Circle] {
        &mut self.circles
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}

/// Uniform sample in [lo, hi); collapses to `lo` for an empty range
/// (zero-sized canvas)
fn sample(rng: &mut Pcg32, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}
