//! Software framebuffer
//!
//! Packed 0x00RRGGBB pixels, row-major. Used for headless runs and tests;
//! frames can be written out as binary PPM.

use std::fs;
use std::path::Path;

use glam::Vec2;

use super::Surface;
use crate::error::CanvasError;
use crate::sim::PaletteColor;

pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    fill: u32,
}

impl Framebuffer {
    /// Create a black framebuffer
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
            fill: 0,
        }
    }

    /// Resize, discarding contents
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![0; width as usize * height as usize];
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Encode as binary PPM (P6)
    pub fn to_ppm(&self) -> Vec<u8> {
        let header = format!("P6\n{} {}\n255\n", self.width, self.height);
        let mut out = Vec::with_capacity(header.len() + self.pixels.len() * 3);
        out.extend_from_slice(header.as_bytes());
        for &p in &self.pixels {
            out.push((p >> 16) as u8);
            out.push((p >> 8) as u8);
            out.push(p as u8);
        }
        out
    }

    pub fn write_ppm(&self, path: impl AsRef<Path>) -> Result<(), CanvasError> {
        fs::write(path, self.to_ppm())?;
        Ok(())
    }

    /// Clip a half-open float span to [0, limit) in whole pixels
    fn span(start: f32, end: f32, limit: u32) -> (u32, u32) {
        let lo = start.floor().clamp(0.0, limit as f32) as u32;
        let hi = end.ceil().clamp(0.0, limit as f32) as u32;
        (lo, hi)
    }
}

impl Surface for Framebuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_fill(&mut self, color: PaletteColor) {
        self.fill = color.rgb();
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let (x0, x1) = Self::span(x, x + w, self.width);
        let (y0, y1) = Self::span(y, y + h, self.height);
        if x1 <= x0 {
            return;
        }
        for row in y0..y1 {
            let start = (row * self.width) as usize;
            self.pixels[start + x0 as usize..start + x1 as usize].fill(self.fill);
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        if radius <= 0.0 {
            return;
        }
        let (x0, x1) = Self::span(center.x - radius, center.x + radius, self.width);
        let (y0, y1) = Self::span(center.y - radius, center.y + radius, self.height);
        let r2 = radius * radius;

        // Pixel centers inside the disk
        for py in y0..y1 {
            let dy = py as f32 + 0.5 - center.y;
            let row = (py * self.width) as usize;
            for px in x0..x1 {
                let dx = px as f32 + 0.5 - center.x;
                if dx * dx + dy * dy <= r2 {
                    self.pixels[row + px as usize] = self.fill;
                }
            }
        }
    }
}
