//! Drawing surfaces
//!
//! The application only needs a solid fill color, a rectangle fill for the
//! background clear and a filled full-circle arc per circle.

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod framebuffer;

#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2dSurface;
pub use framebuffer::Framebuffer;

use glam::Vec2;

use crate::sim::{Bounds, PaletteColor};

/// A 2D drawing context plus its current size
pub trait Surface {
    /// Width in pixels (may change between frames)
    fn width(&self) -> u32;
    /// Height in pixels (may change between frames)
    fn height(&self) -> u32;
    /// Set the solid color used by subsequent fills
    fn set_fill(&mut self, color: PaletteColor);
    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    /// Trace a full arc around `center` and fill it
    fn fill_circle(&mut self, center: Vec2, radius: f32);

    /// Current size as simulation bounds
    fn bounds(&self) -> Bounds {
        Bounds::new(self.width() as f32, self.height() as f32)
    }
}
