//! Pointer handling: stroke begin, sampled painting, stroke end.

use crate::draw::{PaintStyle, Stroke};
use crate::game::events::SessionEvent;
use crate::ink::Gate;
use crate::util;

use super::{PointerState, Role, Session};

/// A pointer sample from the host, already in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down { x: i32, y: i32 },
    Move { x: i32, y: i32 },
    Up,
}

impl Session {
    /// Feeds one pointer event to the stroke renderer.
    pub fn apply_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => self.pointer_down(x, y),
            PointerEvent::Move { x, y } => self.pointer_move(x, y),
            PointerEvent::Up => self.pointer_up(),
        }
    }

    /// Opens a stroke at the (bounds-clamped) point.
    ///
    /// Ignored unless the local participant is the drawer. With the reserve
    /// empty nothing opens and a one-time exhaustion notice is emitted
    /// instead.
    pub fn pointer_down(&mut self, x: i32, y: i32) {
        if self.local_role() != Role::Drawer {
            return;
        }
        if !matches!(self.pointer, PointerState::Idle) {
            return;
        }
        if self.ink.request_paint() == Gate::Denied {
            self.notify_exhausted();
            return;
        }

        let point = self.canvas.clamp_point(x, y);
        self.pointer = PointerState::Stroking {
            stroke: Stroke::begin(point, self.brush),
        };
        self.gate.start(self.clock);
    }

    /// Appends a sample to the open stroke and paints the implied segment.
    ///
    /// A sample rejected by the ink gate or the intermittent gate closes
    /// the current sub-path; the next accepted sample starts a disjoint
    /// one, so no connector line bridges the gap. Each accepted sample
    /// consumes ink exactly once, regardless of segment length.
    pub fn pointer_move(&mut self, x: i32, y: i32) {
        if !matches!(self.pointer, PointerState::Stroking { .. }) {
            return;
        }
        let point = self.canvas.clamp_point(x, y);

        if self.ink.request_paint() == Gate::Denied {
            self.notify_exhausted();
            self.reject_sample(point);
            return;
        }
        if !self.gate.is_open() {
            self.reject_sample(point);
            return;
        }

        self.ink.consume();
        let PointerState::Stroking { stroke } = &mut self.pointer else {
            return;
        };
        let style = stroke.style();
        if let Some(from) = stroke.append(point) {
            self.paint_segment_mirrored(from, point, style);
        }
    }

    /// Closes the stroke and appends it to the surface record.
    ///
    /// Never an error, even when the reserve ran dry mid-stroke. With color
    /// randomization enabled, a fresh palette color (never the one just
    /// used) becomes the active brush color.
    pub fn pointer_up(&mut self) {
        self.finish_stroke(true);
    }

    /// Shared stroke-close path. `randomize` applies the end-of-stroke
    /// color roll when that modifier is enabled; role toggles and round
    /// transitions close strokes without it.
    pub(super) fn finish_stroke(&mut self, randomize: bool) {
        let PointerState::Stroking { stroke } =
            std::mem::replace(&mut self.pointer, PointerState::Idle)
        else {
            return;
        };
        self.gate.stop();
        self.canvas.push_stroke(stroke);

        if randomize && self.randomize_color {
            self.brush.color = self.roll_different_color();
        }
    }

    /// Closes the open sub-path at a rejected sample so the stroke resumes
    /// disjointly from there.
    fn reject_sample(&mut self, point: (i32, i32)) {
        if let PointerState::Stroking { stroke } = &mut self.pointer {
            stroke.restart_at(point);
        }
    }

    fn notify_exhausted(&mut self) {
        if !self.exhausted_notified {
            self.exhausted_notified = true;
            self.events.push(SessionEvent::InkExhausted);
        }
    }

    /// Paints a segment, plus its reflection across the vertical center
    /// line when mirror mode is on. The reflection costs no extra ink.
    fn paint_segment_mirrored(&mut self, from: (i32, i32), to: (i32, i32), style: PaintStyle) {
        self.canvas.paint_segment(from, to, style);
        if self.mirror_enabled {
            let width = self.canvas.width();
            let mirrored_from = (util::mirrored_x(width, from.0), from.1);
            let mirrored_to = (util::mirrored_x(width, to.0), to.1);
            self.canvas.paint_segment(mirrored_from, mirrored_to, style);
        }
    }
}
