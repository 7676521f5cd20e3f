//! Platform abstraction layer
//!
//! Handles browser/native differences for frame pacing. The browser drives
//! frames through `requestAnimationFrame` (see the binary); native runs use
//! [`HeadlessLoop`] instead.

pub mod headless;
pub mod stats;

pub use headless::HeadlessLoop;
pub use stats::FpsCounter;
