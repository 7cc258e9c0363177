//! RGB colors and the SNFG palette.

use serde::{Deserialize, Serialize};

/// An RGB color with components in `[0, 1]`.
///
/// No alpha channel is modeled; the primitive list carries opaque
/// colors only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
}

impl Color {
    /// Creates a color from components in `[0, 1]`.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Returns the components as an array, in RGB order.
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// SNFG white.
pub const SNFG_WHITE: Color = Color::new(1.0, 1.0, 1.0);
/// SNFG blue (Glc family).
pub const SNFG_BLUE: Color = Color::new(0.0, 144.0 / 255.0, 188.0 / 255.0);
/// SNFG green (Man family).
pub const SNFG_GREEN: Color = Color::new(0.0, 166.0 / 255.0, 81.0 / 255.0);
/// SNFG yellow (Gal family).
pub const SNFG_YELLOW: Color = Color::new(1.0, 212.0 / 255.0, 0.0);
/// SNFG light blue (Neu5Gc).
pub const SNFG_LIGHT_BLUE: Color = Color::new(143.0 / 255.0, 204.0 / 255.0, 233.0 / 255.0);
/// SNFG pink (Rib, Api).
pub const SNFG_PINK: Color = Color::new(246.0 / 255.0, 158.0 / 255.0, 161.0 / 255.0);
/// SNFG purple (Neu5Ac).
pub const SNFG_PURPLE: Color = Color::new(165.0 / 255.0, 67.0 / 255.0, 153.0 / 255.0);
/// SNFG brown (IdoA).
pub const SNFG_BROWN: Color = Color::new(161.0 / 255.0, 122.0 / 255.0, 77.0 / 255.0);
/// SNFG orange (Xyl).
pub const SNFG_ORANGE: Color = Color::new(244.0 / 255.0, 121.0 / 255.0, 32.0 / 255.0);
/// SNFG red (Fuc).
pub const SNFG_RED: Color = Color::new(237.0 / 255.0, 28.0 / 255.0, 36.0 / 255.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_in_unit_range() {
        for color in [
            SNFG_WHITE,
            SNFG_BLUE,
            SNFG_GREEN,
            SNFG_YELLOW,
            SNFG_LIGHT_BLUE,
            SNFG_PINK,
            SNFG_PURPLE,
            SNFG_BROWN,
            SNFG_ORANGE,
            SNFG_RED,
        ] {
            for c in color.to_array() {
                assert!((0.0..=1.0).contains(&c));
            }
        }
    }
}
