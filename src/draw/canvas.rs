//! Fixed-size raster surface shared by all participants for one session.

use super::color::{Color, WHITE};
use super::stroke::{PaintStyle, Stroke};
use image::RgbaImage;
use log::warn;

/// Background fill applied before any stroke and on every clear.
pub const BACKGROUND: Color = WHITE;

/// The drawing surface: a raster buffer plus the closed strokes on it.
///
/// Dimensions are fixed when the session starts (derived from the host
/// viewport) and never change afterwards. Pixels are painted incrementally
/// as segments are accepted; closed strokes are kept as an append-only
/// record and are only ever discarded by [`Canvas::clear`].
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    image: RgbaImage,
    strokes: Vec<Stroke>,
}

impl Canvas {
    /// Creates a surface of the given dimensions, pre-filled with the
    /// background color. Zero dimensions are clamped to 1 with a warning;
    /// no surface condition is fatal to the session.
    pub fn new(width: u32, height: u32) -> Self {
        let (width, height) = if width == 0 || height == 0 {
            warn!("invalid surface size {width}x{height}, clamping to 1x1 minimum");
            (width.max(1), height.max(1))
        } else {
            (width, height)
        };

        Self {
            width,
            height,
            image: RgbaImage::from_pixel(width, height, BACKGROUND.to_pixel()),
            strokes: Vec::new(),
        }
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Clamps an input point into `[0, width) x [0, height)`.
    pub fn clamp_point(&self, x: i32, y: i32) -> (i32, i32) {
        (
            x.clamp(0, self.width as i32 - 1),
            y.clamp(0, self.height as i32 - 1),
        )
    }

    /// Paints the line segment between `from` and `to` with the given brush.
    ///
    /// Rasterization walks the segment with Bresenham's algorithm and stamps
    /// a filled disc of half the brush width at every step. Pixels that fall
    /// outside the surface are silently dropped, so callers may pass points
    /// on the mirror seam without pre-clamping.
    pub fn paint_segment(&mut self, from: (i32, i32), to: (i32, i32), style: PaintStyle) {
        let radius = (style.width / 2) as i32;
        let pixel = style.color;

        let (mut x0, mut y0) = from;
        let (x1, y1) = to;
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.stamp(x0, y0, radius, pixel);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Stamps a filled disc, dropping any out-of-bounds pixels.
    fn stamp(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= radius * radius {
                    self.put_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return;
        }
        self.image.put_pixel(x, y, color.to_pixel());
    }

    /// Appends a closed stroke to the surface record.
    pub fn push_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// All closed strokes in draw order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Resets the surface to the background fill and discards all strokes.
    /// Idempotent: clearing an already blank surface changes nothing.
    pub fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = BACKGROUND.to_pixel();
        }
        self.strokes.clear();
    }

    /// Returns an exportable copy of the current surface content.
    pub fn snapshot(&self) -> RgbaImage {
        self.image.clone()
    }

    /// Borrows the raw surface buffer (read-only).
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Returns true if every pixel still holds the background fill.
    pub fn is_blank(&self) -> bool {
        let background = BACKGROUND.to_pixel();
        self.image.pixels().all(|p| *p == background)
    }
}
