//! Session state machine and drawing session management.

mod guess;
mod pointer;
mod round;

pub use pointer::PointerEvent;

use std::time::{Duration, Instant};

use crate::config::Config;
use crate::draw::{encode_png, Canvas, Color, ExportError, PaintStyle, Stroke, PALETTE};
use crate::game::events::{EventBus, SessionEvent};
use crate::game::prompt::{Prompt, PromptSource};
use crate::game::rng::RngState;
use crate::game::view::SessionView;
use crate::ink::{InkReserve, IntermittentGate};

/// Roster index of the local participant.
const LOCAL: usize = 0;

/// What a roster entry may do with the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// May paint strokes; there is at most one drawer at a time.
    Drawer,
    /// Watches the surface and submits guesses.
    Guesser,
}

/// Lifecycle of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Guesses are evaluated and the drawer may paint.
    Active,
    /// The reset between rounds. Never observable from outside: the session
    /// is back to `Active` before any operation returns.
    Transitioning,
}

/// Result of evaluating one submitted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess matched; the next round is already active.
    Correct,
    Incorrect,
    /// Blank input, rejected before comparison.
    Empty,
}

/// One logged guess in normalized form, together with its author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub author: String,
    pub text: String,
}

/// Painter state between pointer down and pointer up.
#[derive(Debug)]
enum PointerState {
    Idle,
    Stroking { stroke: Stroke },
}

/// A single drawing-and-guessing session.
///
/// The session owns the surface, the ink reserve, the prompt lifecycle and
/// the role assignment. It advances only when the host feeds it input:
/// pointer events, guess submissions, operator actions, and a per-frame
/// [`tick`](Session::tick) that drives the intermittent gate. Feedback
/// flows back through [`drain_events`](Session::drain_events); no operation
/// here returns a hard error.
pub struct Session {
    canvas: Canvas,
    ink: InkReserve,
    gate: IntermittentGate,
    prompts: PromptSource,
    prompt: Prompt,
    round: u64,
    phase: RoundPhase,
    rng: RngState,
    view: SessionView,
    /// Roster index of the drawer, if any. Storing the index is what keeps
    /// "at most one drawer" structurally true.
    drawer: Option<usize>,
    pointer: PointerState,
    brush: PaintStyle,
    mirror_enabled: bool,
    randomize_color: bool,
    exhausted_notified: bool,
    guesses: Vec<GuessRecord>,
    events: EventBus,
    clock: Instant,
}

impl Session {
    /// Creates a session with its first round already active.
    ///
    /// Surface dimensions come from the host viewport and stay fixed for
    /// the whole session. The local participant starts as the drawer.
    pub fn new(
        width: u32,
        height: u32,
        config: &Config,
        view: SessionView,
        mut rng: RngState,
    ) -> Self {
        let prompts = PromptSource::new(config.vocabulary.words.clone());
        let prompt = prompts.next(&mut rng);

        let mut ink = InkReserve::new();
        ink.set_depletion_rate(config.ink.depletion_rate_per_sample);
        ink.set_penalty_enabled(config.ink.penalty_enabled);

        let gate = IntermittentGate::new(
            config.ink.intermittent_enabled,
            Duration::from_millis(config.ink.intermittent_period_ms),
        );

        let brush = PaintStyle {
            color: config.drawing.color.to_color(),
            width: config.drawing.brush_size,
        };

        let mut session = Self {
            canvas: Canvas::new(width, height),
            ink,
            gate,
            prompts,
            prompt,
            round: 1,
            phase: RoundPhase::Active,
            rng,
            view,
            drawer: Some(LOCAL),
            pointer: PointerState::Idle,
            brush,
            mirror_enabled: config.drawing.mirror_enabled,
            randomize_color: config.drawing.randomize_color_on_stroke_end,
            exhausted_notified: false,
            guesses: Vec::new(),
            events: EventBus::default(),
            clock: Instant::now(),
        };
        session.events.push(SessionEvent::RoundStarted { round: 1 });
        session
    }

    /// Advances the session clock.
    ///
    /// Hosts call this once per frame, before feeding pointer input; the
    /// intermittent gate derives its open/closed phase from it. Between
    /// ticks nothing moves on its own.
    pub fn tick(&mut self, now: Instant) {
        self.clock = now;
        self.gate.advance(now);
    }

    /// Resets the ink reserve to capacity and re-arms the exhaustion
    /// notice. Acknowledged through [`SessionEvent::InkRefilled`] only when
    /// the level actually changed.
    pub fn refill_ink(&mut self) {
        if self.ink.refill() {
            self.exhausted_notified = false;
            self.events.push(SessionEvent::InkRefilled);
        }
    }

    /// Adjusts the per-sample ink cost at runtime. An invalid rate is
    /// ignored and reported through [`SessionEvent::ConfigRejected`].
    pub fn set_depletion_rate(&mut self, rate: f64) {
        if !self.ink.set_depletion_rate(rate) {
            self.events.push(SessionEvent::ConfigRejected {
                setting: "ink.depletion_rate_per_sample",
            });
        }
    }

    /// Flips the local participant between drawer and guesser.
    ///
    /// Any open stroke is closed first so a partial stroke never spans a
    /// permission change. Ink, surface and prompt are untouched.
    pub fn toggle_local_role(&mut self) {
        self.finish_stroke(false);
        self.drawer = match self.drawer {
            Some(LOCAL) => None,
            _ => Some(LOCAL),
        };
    }

    /// Repaints the background and discards all strokes, including an open
    /// one. Idempotent.
    pub fn clear(&mut self) {
        self.pointer = PointerState::Idle;
        self.gate.stop();
        self.canvas.clear();
    }

    /// Encodes the current surface content as a PNG, regardless of role.
    pub fn snapshot_png(&self) -> Result<Vec<u8>, ExportError> {
        encode_png(self.canvas.image())
    }

    /// Drains buffered feedback events in emission order.
    pub fn drain_events(&mut self) -> impl Iterator<Item = SessionEvent> + '_ {
        self.events.drain()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn ink_level(&self) -> f64 {
        self.ink.level()
    }

    /// The active prompt. Shells show it to the drawer only.
    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    /// Monotonically increasing round counter. A repeated prompt value
    /// still counts as a new round.
    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn view(&self) -> &SessionView {
        &self.view
    }

    /// The brush the next stroke will be painted with.
    pub fn brush(&self) -> PaintStyle {
        self.brush
    }

    /// Sets the active brush color.
    ///
    /// An open stroke keeps the attributes it was begun with; the new color
    /// applies from the next stroke.
    pub fn set_brush_color(&mut self, color: Color) {
        self.brush.color = color;
    }

    /// Sets the brush width in pixels, clamped to the 1 - 20 range.
    ///
    /// Like the color, this takes effect on the next stroke.
    pub fn set_brush_size(&mut self, size: u32) {
        if !(1..=20).contains(&size) {
            log::warn!("Invalid brush size {size}, clamping to 1-20 range");
        }
        self.brush.width = size.clamp(1, 20);
    }

    /// All compared guesses in submission order, normalized.
    pub fn guess_log(&self) -> &[GuessRecord] {
        &self.guesses
    }

    /// Whether a stroke is currently open.
    pub fn is_drawing(&self) -> bool {
        matches!(self.pointer, PointerState::Stroking { .. })
    }

    pub fn local_role(&self) -> Role {
        self.role_of(LOCAL)
    }

    /// Role of the roster entry at `index`.
    pub fn role_of(&self, index: usize) -> Role {
        if self.drawer == Some(index) {
            Role::Drawer
        } else {
            Role::Guesser
        }
    }

    /// Uniform palette pick, repeats allowed.
    fn roll_any_color(&mut self) -> Color {
        PALETTE[self.rng.pick_index(PALETTE.len())]
    }

    /// Palette pick excluding the current brush color. The palette holds
    /// more than one color, so the rejection loop terminates.
    fn roll_different_color(&mut self) -> Color {
        loop {
            let candidate = PALETTE[self.rng.pick_index(PALETTE.len())];
            if candidate != self.brush.color {
                return candidate;
            }
        }
    }
}
