//! Prompt vocabulary and guess evaluation.

use crate::game::rng::RngState;

/// Built-in vocabulary used when no word list is configured.
pub const DEFAULT_WORDS: [&str; 20] = [
    "Car", "House", "Tree", "Sun", "Moon", "Star", "Cloud", "Flower", "Dog", "Cat", "Fish", "Bird",
    "Book", "Chair", "Table", "Phone", "Computer", "Shoes", "Hat", "Ball",
];

/// The word the drawer has to draw, fixed for one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    text: String,
}

impl Prompt {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whole-word comparison: surrounding whitespace and letter case are
    /// ignored, everything else is a miss. No partial credit.
    pub fn matches(&self, guess: &str) -> bool {
        normalize(guess) == self.text.to_lowercase()
    }
}

/// Canonical guess form used for comparison and the guess log.
pub fn normalize(guess: &str) -> String {
    guess.trim().to_lowercase()
}

/// Fixed pool of candidate prompts for a session.
///
/// Entries may repeat; a duplicated word is simply drawn proportionally
/// more often.
#[derive(Debug, Clone)]
pub struct PromptSource {
    words: Vec<String>,
}

impl Default for PromptSource {
    fn default() -> Self {
        Self {
            words: built_in_words(),
        }
    }
}

impl PromptSource {
    /// Builds a source from a word list. Blank entries are dropped; if
    /// nothing usable remains, the built-in vocabulary is used instead.
    pub fn new(words: Vec<String>) -> Self {
        let words: Vec<String> = words
            .into_iter()
            .map(|word| word.trim().to_string())
            .filter(|word| !word.is_empty())
            .collect();

        if words.is_empty() {
            log::warn!("Vocabulary contains no usable words; using the built-in list");
            return Self::default();
        }

        Self { words }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Draws the next prompt uniformly. Selection depends only on the rng,
    /// never on game state.
    pub fn next(&self, rng: &mut RngState) -> Prompt {
        let index = rng.pick_index(self.words.len());
        Prompt {
            text: self.words[index].clone(),
        }
    }
}

fn built_in_words() -> Vec<String> {
    DEFAULT_WORDS.iter().map(|word| word.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(text: &str) -> Prompt {
        Prompt {
            text: text.to_string(),
        }
    }

    #[test]
    fn matching_ignores_case_and_surrounding_whitespace() {
        let cat = prompt("Cat");
        assert!(cat.matches("cat"));
        assert!(cat.matches("Cat"));
        assert!(cat.matches("  CAT  "));
        assert!(!cat.matches("dog"));
    }

    #[test]
    fn no_partial_credit() {
        let computer = prompt("Computer");
        assert!(!computer.matches("compute"));
        assert!(!computer.matches("computers"));
        assert!(!computer.matches("com puter"));
    }

    #[test]
    fn blank_entries_are_dropped() {
        let source = PromptSource::new(vec![
            "  ".to_string(),
            "Robot".to_string(),
            String::new(),
        ]);
        assert_eq!(source.word_count(), 1);
    }

    #[test]
    fn empty_vocabulary_falls_back_to_built_in() {
        let source = PromptSource::new(vec!["   ".to_string()]);
        assert_eq!(source.word_count(), DEFAULT_WORDS.len());
    }

    #[test]
    fn selection_is_deterministic_for_a_seed() {
        let source = PromptSource::default();
        let mut a = RngState::from_seed(99);
        let mut b = RngState::from_seed(99);
        for _ in 0..10 {
            assert_eq!(source.next(&mut a), source.next(&mut b));
        }
    }

    #[test]
    fn drawn_prompts_come_from_the_pool() {
        let source = PromptSource::new(vec!["Apple".to_string(), "Pear".to_string()]);
        let mut rng = RngState::from_seed(3);
        for _ in 0..20 {
            let drawn = source.next(&mut rng);
            assert!(drawn.text() == "Apple" || drawn.text() == "Pear");
        }
    }
}
