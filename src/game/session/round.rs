//! Round lifecycle: the atomic reset between prompts.

use crate::game::events::SessionEvent;

use super::{RoundPhase, Session};

impl Session {
    /// Skips to a fresh round without requiring a winning guess.
    pub fn new_prompt(&mut self) {
        self.begin_round();
        self.events
            .push(SessionEvent::RoundStarted { round: self.round });
    }

    /// The atomic reset shared by the win path and the operator skip.
    ///
    /// Closes any open stroke, clears the surface, refills the reserve,
    /// re-arms the exhaustion notice, re-rolls the active color and draws
    /// the next prompt, then bumps the round counter. No partially reset
    /// state is observable: the phase is back to [`RoundPhase::Active`]
    /// before this returns.
    pub(super) fn begin_round(&mut self) {
        self.phase = RoundPhase::Transitioning;

        self.finish_stroke(false);
        self.canvas.clear();
        self.ink.refill();
        self.exhausted_notified = false;
        self.brush.color = self.roll_any_color();
        self.prompt = self.prompts.next(&mut self.rng);
        self.round += 1;

        self.phase = RoundPhase::Active;
    }
}
