//! Circle colors and the round-robin palette cursor

/// Colors a circle (or the background) can be painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Red,
    Green,
    Blue,
    White,
}

impl PaletteColor {
    /// CSS color keyword, as understood by a Canvas 2D context
    pub fn css_name(&self) -> &'static str {
        match self {
            PaletteColor::Red => "red",
            PaletteColor::Green => "green",
            PaletteColor::Blue => "blue",
            PaletteColor::White => "white",
        }
    }

    /// Packed 0x00RRGGBB value matching the CSS keyword
    pub fn rgb(&self) -> u32 {
        match self {
            PaletteColor::Red => 0xFF_00_00,
            PaletteColor::Green => 0x00_80_00,
            PaletteColor::Blue => 0x00_00_FF,
            PaletteColor::White => 0xFF_FF_FF,
        }
    }
}

/// Canvas clear color
pub const BACKGROUND: PaletteColor = PaletteColor::White;

/// Spawn batches cycle through these in order
pub const CIRCLE_COLORS: [PaletteColor; 3] =
    [PaletteColor::Red, PaletteColor::Green, PaletteColor::Blue];

/// Round-robin cursor over [`CIRCLE_COLORS`]
#[derive(Debug, Clone, Default)]
pub struct Palette {
    cursor: usize,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the color under the cursor and advance it
    pub fn next_color(&mut self) -> PaletteColor {
        let color = CIRCLE_COLORS[self.cursor];
        self.cursor = (self.cursor + 1) % CIRCLE_COLORS.len();
        color
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_robin_wraps() {
        let mut palette = Palette::new();
        assert_eq!(palette.next_color(), PaletteColor::Red);
        assert_eq!(palette.next_color(), PaletteColor::Green);
        assert_eq!(palette.next_color(), PaletteColor::Blue);
        assert_eq!(palette.cursor(), 0);
        assert_eq!(palette.next_color(), PaletteColor::Red);
    }

    #[test]
    fn test_background_is_not_a_circle_color() {
        assert!(!CIRCLE_COLORS.contains(&BACKGROUND));
        assert_eq!(BACKGROUND.rgb(), 0xFFFFFF);
    }
}
