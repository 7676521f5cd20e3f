//! Motion actors
//!
//! Each circle is bound to one actor for its whole life. The actor advances
//! the circle by exactly one frame; wall checks run after the position update,
//! so a circle may render one frame past an edge before it turns around.

use serde::{Deserialize, Serialize};

use super::circle::Circle;
use crate::consts::{DRAG, GRAVITY, RESTITUTION};

/// Canvas extent in pixels, re-read from the surface every frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Physical constants used by the actors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionTuning {
    /// Added to the vertical velocity every frame (Gravity)
    pub gravity: f32,
    /// Vertical speed kept after hitting floor or ceiling (Gravity)
    pub restitution: f32,
    /// Horizontal velocity multiplier per frame (Gravity)
    pub drag: f32,
    /// Fraction of the canvas height reserved at the bottom (Bounce)
    pub bounce_floor_margin: f32,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            restitution: RESTITUTION,
            drag: DRAG,
            bounce_floor_margin: 0.0,
        }
    }
}

/// Motion strategy selected at spawn time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Actor {
    /// Elastic reflection off all four edges
    #[default]
    Bounce,
    /// Falling with inelastic floor/ceiling bounces and horizontal drag
    Gravity,
}

impl Actor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Actor::Bounce => "Bounce",
            Actor::Gravity => "Gravity",
        }
    }

    /// Spawn shortcut: `b` for Bounce, `g` for Gravity (either case)
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "b" | "B" => Some(Actor::Bounce),
            "g" | "G" => Some(Actor::Gravity),
            _ => None,
        }
    }

    /// The other actor
    pub fn toggled(&self) -> Self {
        match self {
            Actor::Bounce => Actor::Gravity,
            Actor::Gravity => Actor::Bounce,
        }
    }

    /// Advance `circle` by one frame
    pub fn move_circle(&self, circle: &mut Circle, bounds: Bounds, tuning: &MotionTuning) {
        match self {
            Actor::Bounce => bounce(circle, bounds, tuning),
            Actor::Gravity => fall(circle, bounds, tuning),
        }
    }
}

fn bounce(circle: &mut Circle, bounds: Bounds, tuning: &MotionTuning) {
    circle.pos += circle.vel;

    if circle.pos.x < 0.0 || circle.pos.x > bounds.width {
        circle.vel.x = -circle.vel.x;
    }

    let floor = bounds.height - bounds.height * tuning.bounce_floor_margin;
    if circle.pos.y < 0.0 || circle.pos.y > floor {
        circle.vel.y = -circle.vel.y;
    }
}

fn fall(circle: &mut Circle, bounds: Bounds, tuning: &MotionTuning) {
    let radius = circle.radius();

    circle.pos.y += circle.vel.y;
    circle.vel.y += tuning.gravity;

    // Clamp on the rim, not the center
    if circle.pos.y - radius < 0.0 {
        circle.pos.y = radius;
        circle.vel.y *= -tuning.restitution;
    } else if circle.pos.y + radius > bounds.height {
        circle.pos.y = bounds.height - radius;
        circle.vel.y *= -tuning.restitution;
    }

    circle.pos.x += circle.vel.x;
    circle.vel.x *= tuning.drag;

    if circle.pos.x < 0.0 || circle.pos.x > bounds.width {
        circle.vel.x = -circle.vel.x;
    }
}
