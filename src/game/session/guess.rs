//! Guess evaluation and the append-only guess log.

use crate::game::events::SessionEvent;
use crate::game::prompt;

use super::{GuessOutcome, GuessRecord, Session};

impl Session {
    /// Evaluates one guess from the local participant.
    ///
    /// Blank input is rejected before any comparison and never logged.
    /// Every compared guess is appended to the log in normalized form
    /// (trimmed, lowercased) with its author. A match wins the round: the
    /// session resets atomically and the next round is already active when
    /// this returns.
    pub fn submit_guess(&mut self, guess: &str) -> GuessOutcome {
        let normalized = prompt::normalize(guess);
        if normalized.is_empty() {
            self.events.push(SessionEvent::EmptyGuess);
            return GuessOutcome::Empty;
        }

        self.guesses.push(GuessRecord {
            author: self.view.local_name().to_string(),
            text: normalized.clone(),
        });

        if self.prompt.matches(&normalized) {
            let won = self.round;
            let revealed = self.prompt.text().to_string();
            self.begin_round();
            self.events.push(SessionEvent::RoundWon {
                round: won,
                prompt: revealed,
            });
            GuessOutcome::Correct
        } else {
            self.events
                .push(SessionEvent::IncorrectGuess { guess: normalized });
            GuessOutcome::Incorrect
        }
    }
}
