//! Bounce Canvas - circles bouncing and falling inside a 2D canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (circles, palette, motion actors)
//! - `app`: Drawing application tying the simulation to a surface
//! - `renderer`: Drawing surfaces (software framebuffer, Canvas 2D)
//! - `platform`: Browser/native frame pacing
//! - `settings`: Persisted preferences and motion tuning

pub mod app;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::{DrawingApp, FrameControl, StopHandle};
pub use error::CanvasError;
pub use settings::Settings;

/// Demo configuration constants
pub mod consts {
    /// Circles spawned when the application starts
    pub const INITIAL_CIRCLES: usize = 10;
    /// Circles spawned per key press / click
    pub const SPAWN_BATCH: usize = 10;
    /// Largest batch accepted from stored settings
    pub const MAX_BATCH: usize = 10_000;

    /// Circle radius range [min, max)
    pub const MIN_RADIUS: f32 = 8.0;
    pub const MAX_RADIUS: f32 = 40.0;

    /// Initial per-axis speed range [min, max), pixels per frame
    pub const MIN_SPEED: f32 = 1.0;
    pub const MAX_SPEED: f32 = 6.0;

    /// Downward acceleration added to yInc every frame
    pub const GRAVITY: f32 = 0.01;
    /// Fraction of vertical speed kept after a floor/ceiling bounce
    pub const RESTITUTION: f32 = 0.7;
    /// Horizontal velocity multiplier applied every frame
    pub const DRAG: f32 = 0.9988;

    /// Native frame pacing
    pub const TARGET_FPS: u32 = 60;
}
