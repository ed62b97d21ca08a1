//! Color naming and small geometry helpers.

use crate::draw::{color::*, Color};

/// Maps color name strings to palette values.
///
/// Used by the configuration system to parse color names from the config
/// file. Names follow the classic 16-color web palette.
///
/// # Arguments
/// * `name` - Color name string (case-insensitive)
///
/// # Returns
/// - `Some(Color)` if the name matches a palette color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        "red" => Some(RED),
        "lime" => Some(LIME),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "magenta" | "fuchsia" => Some(MAGENTA),
        "cyan" | "aqua" => Some(CYAN),
        "maroon" => Some(MAROON),
        "green" => Some(GREEN),
        "navy" => Some(NAVY),
        "olive" => Some(OLIVE),
        "purple" => Some(PURPLE),
        "teal" => Some(TEAL),
        "silver" => Some(SILVER),
        "gray" | "grey" => Some(GRAY),
        _ => None,
    }
}

/// Maps a palette color back to its name, for status output.
///
/// # Returns
/// A static string with the color name, or "custom" for anything outside
/// the palette.
pub fn color_to_name(color: Color) -> &'static str {
    match color {
        BLACK => "black",
        WHITE => "white",
        RED => "red",
        LIME => "lime",
        BLUE => "blue",
        YELLOW => "yellow",
        MAGENTA => "magenta",
        CYAN => "cyan",
        MAROON => "maroon",
        GREEN => "green",
        NAVY => "navy",
        OLIVE => "olive",
        PURPLE => "purple",
        TEAL => "teal",
        SILVER => "silver",
        GRAY => "gray",
        _ => "custom",
    }
}

/// Reflects an x coordinate across the vertical center line of a surface.
///
/// Mirror painting uses the raw difference `width - x`; the seam column at
/// `x == 0` maps to `width`, one past the last pixel, and relies on the
/// surface dropping out-of-bounds pixels.
pub fn mirrored_x(width: u32, x: i32) -> i32 {
    width as i32 - x
}
