//! RGB color type and the fixed 16-entry paint palette.

use image::Rgba;

/// Represents an opaque RGB color with 8-bit components.
///
/// Strokes are always painted fully opaque; the alpha channel only appears
/// when a color is converted into a surface pixel.
///
/// # Examples
///
/// ```
/// use sketchparty::draw::Color;
/// let red = Color { r: 255, g: 0, b: 0 };
/// let teal = Color::new(0, 128, 128);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    /// Red component (0 = no red, 255 = full red)
    pub r: u8,
    /// Green component (0 = no green, 255 = full green)
    pub g: u8,
    /// Blue component (0 = no blue, 255 = full blue)
    pub b: u8,
}

impl Color {
    /// Creates a new color from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts the color into an opaque surface pixel.
    pub fn to_pixel(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }
}

// ============================================================================
// Predefined Color Constants (the classic 16-color palette)
// ============================================================================

/// Predefined black color (#000000), the default pen color
pub const BLACK: Color = Color::new(0, 0, 0);

/// Predefined white color (#FFFFFF), also the surface background fill
pub const WHITE: Color = Color::new(255, 255, 255);

/// Predefined red color (#FF0000)
pub const RED: Color = Color::new(255, 0, 0);

/// Predefined lime color (#00FF00)
pub const LIME: Color = Color::new(0, 255, 0);

/// Predefined blue color (#0000FF)
pub const BLUE: Color = Color::new(0, 0, 255);

/// Predefined yellow color (#FFFF00)
pub const YELLOW: Color = Color::new(255, 255, 0);

/// Predefined magenta color (#FF00FF)
pub const MAGENTA: Color = Color::new(255, 0, 255);

/// Predefined cyan color (#00FFFF)
pub const CYAN: Color = Color::new(0, 255, 255);

/// Predefined maroon color (#800000)
pub const MAROON: Color = Color::new(128, 0, 0);

/// Predefined green color (#008000)
pub const GREEN: Color = Color::new(0, 128, 0);

/// Predefined navy color (#000080)
pub const NAVY: Color = Color::new(0, 0, 128);

/// Predefined olive color (#808000)
pub const OLIVE: Color = Color::new(128, 128, 0);

/// Predefined purple color (#800080)
pub const PURPLE: Color = Color::new(128, 0, 128);

/// Predefined teal color (#008080)
pub const TEAL: Color = Color::new(0, 128, 128);

/// Predefined silver color (#C0C0C0)
pub const SILVER: Color = Color::new(192, 192, 192);

/// Predefined gray color (#808080)
pub const GRAY: Color = Color::new(128, 128, 128);

/// The fixed paint palette offered to the drawer, in display order.
///
/// Color randomization rejection-samples from this array; its length must
/// stay at least 2 for that sampling to terminate.
pub const PALETTE: [Color; 16] = [
    BLACK, WHITE, RED, LIME, BLUE, YELLOW, MAGENTA, CYAN, MAROON, GREEN, NAVY, OLIVE, PURPLE,
    TEAL, SILVER, GRAY,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_sixteen_distinct_entries() {
        for (i, a) in PALETTE.iter().enumerate() {
            for b in &PALETTE[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(PALETTE.len(), 16);
    }

    #[test]
    fn pixels_are_opaque() {
        assert_eq!(TEAL.to_pixel().0, [0, 128, 128, 255]);
        assert_eq!(BLACK.to_pixel().0[3], 255);
    }
}
