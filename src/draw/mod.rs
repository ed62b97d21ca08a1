//! Rendering primitives for the shared drawing surface.
//!
//! This module defines the core drawing types used by a game session:
//! - [`Color`]: RGB color representation with the classic web palette
//! - [`Stroke`]: A brush stroke, possibly split into disjoint sub-paths
//! - [`Canvas`]: The raster surface strokes are painted onto
//! - PNG export for surface snapshots

pub mod canvas;
pub mod color;
pub mod export;
pub mod stroke;

// Re-export commonly used types at module level
pub use canvas::{Canvas, BACKGROUND};
pub use color::Color;
pub use export::{default_filename, encode_png, save_png, ExportError};
pub use stroke::{PaintStyle, Stroke};

// Re-export the palette for public API (hosts pick brush colors from it)
#[allow(unused_imports)]
pub use color::PALETTE;
