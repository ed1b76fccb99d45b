//! Cyclic highlight colors for the token breakdown

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    Blue,
    Red,
    Green,
    Yellow,
    Purple,
    Pink,
}

impl PaletteColor {
    pub fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Pink => "pink",
        }
    }

    /// Light background shade, as RGB
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Blue => (0xbf, 0xdb, 0xfe),
            Self::Red => (0xfe, 0xca, 0xca),
            Self::Green => (0xbb, 0xf7, 0xd0),
            Self::Yellow => (0xfe, 0xf0, 0x8a),
            Self::Purple => (0xe9, 0xd5, 0xff),
            Self::Pink => (0xfb, 0xcf, 0xe8),
        }
    }

    pub fn hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Non-empty, ordered list of colors. Token `i` gets `colors[i % len]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<PaletteColor>,
}

impl Palette {
    pub fn new(colors: Vec<PaletteColor>) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(Self { colors })
    }

    pub fn color_at(&self, index: usize) -> PaletteColor {
        self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[PaletteColor] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![
                PaletteColor::Blue,
                PaletteColor::Red,
                PaletteColor::Green,
                PaletteColor::Yellow,
                PaletteColor::Purple,
                PaletteColor::Pink,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_cycle() {
        let palette = Palette::default();
        let n = palette.len();
        assert_eq!(n, 6);

        for i in 0..3 * n {
            assert_eq!(palette.color_at(i), palette.color_at(i + n));
        }
        assert_eq!(palette.color_at(0), PaletteColor::Blue);
        assert_eq!(palette.color_at(5), PaletteColor::Pink);
        assert_eq!(palette.color_at(6), PaletteColor::Blue);
    }

    #[test]
    fn test_empty_palette_rejected() {
        assert!(matches!(Palette::new(vec![]), Err(Error::EmptyPalette)));
    }

    #[test]
    fn test_single_color_palette() {
        let palette = Palette::new(vec![PaletteColor::Green]).unwrap();
        assert_eq!(palette.color_at(0), PaletteColor::Green);
        assert_eq!(palette.color_at(41), PaletteColor::Green);
    }

    #[test]
    fn test_hex() {
        assert_eq!(PaletteColor::Blue.hex(), "#bfdbfe");
        assert_eq!(PaletteColor::Yellow.name(), "yellow");
    }
}
