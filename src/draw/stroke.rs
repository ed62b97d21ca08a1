//! Stroke definitions for the shared drawing surface.

use super::color::Color;

/// Paint attributes captured when a stroke begins.
///
/// A stroke keeps the color and brush width that were active at its first
/// point; changing the pen mid-stroke affects only the next stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaintStyle {
    /// Stroke color
    pub color: Color,
    /// Brush width in pixels
    pub width: u32,
}

/// A freehand stroke: one or more disjoint sub-paths of sampled points.
///
/// A stroke normally holds a single polyline. Whenever a sample is rejected
/// (intermittent gate off, ink exhausted), the open sub-path is closed and
/// the next accepted sample starts a new one, so no connector line bridges
/// the gap. Once closed by the renderer a stroke is never mutated again;
/// only a full-surface clear discards it.
#[derive(Clone, Debug)]
pub struct Stroke {
    paths: Vec<Vec<(i32, i32)>>,
    style: PaintStyle,
}

impl Stroke {
    /// Opens a new stroke with a single sub-path starting at `point`.
    pub fn begin(point: (i32, i32), style: PaintStyle) -> Self {
        Self {
            paths: vec![vec![point]],
            style,
        }
    }

    /// Appends an accepted sample to the current sub-path.
    ///
    /// Returns the previous tail point, i.e. the start of the segment the
    /// caller should paint. `None` means the sub-path was empty (freshly
    /// restarted) and there is no segment to paint yet.
    pub fn append(&mut self, point: (i32, i32)) -> Option<(i32, i32)> {
        let path = self
            .paths
            .last_mut()
            .expect("stroke always holds at least one sub-path");
        let tail = path.last().copied();
        path.push(point);
        tail
    }

    /// Restarts the open sub-path at `point` after a rejected sample.
    ///
    /// A sub-path that already painted a segment (two or more points) is
    /// closed and survives as a gap boundary; a single-point sub-path never
    /// painted anything and is simply replaced.
    pub fn restart_at(&mut self, point: (i32, i32)) {
        let path = self
            .paths
            .last_mut()
            .expect("stroke always holds at least one sub-path");
        if path.len() >= 2 {
            self.paths.push(vec![point]);
        } else {
            *path = vec![point];
        }
    }

    /// The paint attributes this stroke was begun with.
    pub fn style(&self) -> PaintStyle {
        self.style
    }

    /// The sub-paths of this stroke, in draw order.
    pub fn paths(&self) -> &[Vec<(i32, i32)>] {
        &self.paths
    }

    /// Returns true if the stroke contains at least one gap, i.e. more than
    /// one sub-path that actually painted a segment.
    pub fn has_gap(&self) -> bool {
        self.paths.iter().filter(|p| p.len() >= 2).count() >= 2
    }

    /// Total number of sampled points across all sub-paths.
    pub fn len(&self) -> usize {
        self.paths.iter().map(Vec::len).sum()
    }

    /// Returns true if the stroke holds no points at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;

    fn style() -> PaintStyle {
        PaintStyle {
            color: BLACK,
            width: 5,
        }
    }

    #[test]
    fn append_returns_segment_start() {
        let mut stroke = Stroke::begin((10, 10), style());
        assert!(!stroke.is_empty());
        assert_eq!(stroke.append((20, 10)), Some((10, 10)));
        assert_eq!(stroke.append((30, 10)), Some((20, 10)));
        assert_eq!(stroke.paths().len(), 1);
        assert_eq!(stroke.len(), 3);
        assert!(!stroke.has_gap());
    }

    #[test]
    fn restart_after_painted_segment_opens_gap() {
        let mut stroke = Stroke::begin((0, 0), style());
        stroke.append((5, 0));
        stroke.restart_at((20, 0));
        stroke.append((25, 0));

        assert_eq!(stroke.paths().len(), 2);
        // The gap splits the point count across sub-paths without losing any.
        assert_eq!(stroke.len(), 4);
        assert!(stroke.has_gap());
        // The rejected sample became the new sub-path's first point.
        assert_eq!(stroke.paths()[1][0], (20, 0));
    }

    #[test]
    fn restart_before_any_segment_replaces_start() {
        let mut stroke = Stroke::begin((0, 0), style());
        stroke.restart_at((7, 7));
        stroke.restart_at((9, 9));

        assert_eq!(stroke.paths().len(), 1);
        assert_eq!(stroke.paths()[0], vec![(9, 9)]);
        assert!(!stroke.has_gap());
    }
}
