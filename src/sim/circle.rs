//! The circle entity

use glam::Vec2;

use super::actor::{Actor, Bounds, MotionTuning};
use super::palette::PaletteColor;

/// One animated disk
///
/// Position and velocity change every frame; radius, color and actor are
/// fixed at spawn.
#[derive(Debug, Clone)]
pub struct Circle {
    pub pos: Vec2,
    /// Pixels per frame; sign flips on wall hits
    pub vel: Vec2,
    radius: f32,
    color: PaletteColor,
    actor: Actor,
}

impl Circle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: PaletteColor, actor: Actor) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
            actor,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> PaletteColor {
        self.color
    }

    pub fn actor(&self) -> Actor {
        self.actor
    }

    /// Advance one frame with the bound actor
    pub fn advance(&mut self, bounds: Bounds, tuning: &MotionTuning) {
        let actor = self.actor;
        actor.move_circle(self, bounds, tuning);
    }
}
