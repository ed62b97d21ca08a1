//! Configuration enum types.

use crate::draw::{color::BLACK, Color};
use log::warn;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// color = "teal"
///
/// # Custom RGB color (0-255 per component)
/// color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color from the classic 16-color web palette
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`].
    ///
    /// Named colors are resolved through `util::name_to_color()`. Unknown
    /// names fall back to black with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using black", name);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color::new(*r, *g, *b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{NAVY, TEAL};

    #[test]
    fn named_colors_resolve_through_the_palette() {
        assert_eq!(ColorSpec::Name("teal".to_string()).to_color(), TEAL);
        assert_eq!(ColorSpec::Name("Navy".to_string()).to_color(), NAVY);
    }

    #[test]
    fn unknown_names_fall_back_to_black() {
        assert_eq!(ColorSpec::Name("mauve".to_string()).to_color(), BLACK);
    }

    #[test]
    fn rgb_arrays_pass_through() {
        assert_eq!(
            ColorSpec::Rgb([12, 34, 56]).to_color(),
            Color::new(12, 34, 56)
        );
    }
}
