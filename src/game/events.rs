//! Feedback events drained by the host after each batch of input.

/// Non-fatal feedback emitted by session operations.
///
/// Nothing here is an error in the `Result` sense: the session absorbs bad
/// input, keeps going, and reports what happened through this channel so
/// the shell can surface it (toast, status line, log).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A fresh round began without a winning guess (session start or an
    /// operator skip).
    RoundStarted { round: u64 },
    /// A guess matched the prompt; `round` is the round that just ended and
    /// `prompt` the word it revealed.
    RoundWon { round: u64, prompt: String },
    /// A non-empty guess that did not match, in normalized form.
    IncorrectGuess { guess: String },
    /// Blank input rejected before any comparison.
    EmptyGuess,
    /// The drawer ran the reserve dry. Emitted once per exhaustion; re-armed
    /// by refill.
    InkExhausted,
    /// An explicit refill actually restored ink.
    InkRefilled,
    /// A runtime tuning change was ignored as invalid.
    ConfigRejected { setting: &'static str },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<SessionEvent>,
}

impl EventBus {
    pub fn push(&mut self, event: SessionEvent) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = SessionEvent> + '_ {
        self.queue.drain(..)
    }
}
