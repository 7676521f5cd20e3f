//! Deterministic simulation module
//!
//! All motion logic lives here. This module must be pure and deterministic:
//! - One step per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod circle;
pub mod palette;
pub mod state;

pub use actor::{Actor, Bounds, MotionTuning};
pub use circle::Circle;
pub use palette::{BACKGROUND, CIRCLE_COLORS, Palette, PaletteColor};
pub use state::Scene;
