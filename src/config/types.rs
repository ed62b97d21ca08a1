//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::game::prompt::DEFAULT_WORDS;
use crate::ink;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the brush a session starts with and the optional painting
/// modifiers. The active color changes at runtime on round transitions and,
/// when enabled, on every stroke end.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Starting brush color - either a palette name (black, red, teal, ...)
    /// or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_brush_color")]
    pub color: ColorSpec,

    /// Brush width in pixels (valid range: 1 - 20)
    #[serde(default = "default_brush_size")]
    pub brush_size: u32,

    /// Paint every accepted segment a second time, reflected across the
    /// vertical center line of the surface
    #[serde(default = "default_mirror_enabled")]
    pub mirror_enabled: bool,

    /// Roll a fresh palette color (never the one just used) whenever a
    /// stroke ends
    #[serde(default = "default_randomize_color")]
    pub randomize_color_on_stroke_end: bool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            color: default_brush_color(),
            brush_size: default_brush_size(),
            mirror_enabled: default_mirror_enabled(),
            randomize_color_on_stroke_end: default_randomize_color(),
        }
    }
}

/// Ink economy tuning.
///
/// The defaults reproduce the standard game feel: a full reserve lasts for
/// roughly 870 pointer samples.
#[derive(Debug, Serialize, Deserialize)]
pub struct InkConfig {
    /// Ink drained by each accepted pointer sample (must be finite and
    /// non-negative)
    #[serde(default = "default_depletion_rate")]
    pub depletion_rate_per_sample: f64,

    /// Add a flat surcharge to every sample on top of the base rate
    #[serde(default = "default_penalty_enabled")]
    pub penalty_enabled: bool,

    /// Periodically interrupt painting while a stroke is open, leaving
    /// dashed gaps
    #[serde(default = "default_intermittent_enabled")]
    pub intermittent_enabled: bool,

    /// On/off period of the interruption in milliseconds
    /// (valid range: 1 - 10000)
    #[serde(default = "default_intermittent_period_ms")]
    pub intermittent_period_ms: u64,
}

impl Default for InkConfig {
    fn default() -> Self {
        Self {
            depletion_rate_per_sample: default_depletion_rate(),
            penalty_enabled: default_penalty_enabled(),
            intermittent_enabled: default_intermittent_enabled(),
            intermittent_period_ms: default_intermittent_period_ms(),
        }
    }
}

/// Prompt vocabulary settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct VocabularyConfig {
    /// Candidate prompt words. Blank entries are ignored; duplicates are
    /// drawn proportionally more often. An empty list falls back to the
    /// built-in vocabulary.
    #[serde(default = "default_words")]
    pub words: Vec<String>,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            words: default_words(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_brush_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_brush_size() -> u32 {
    5
}

fn default_mirror_enabled() -> bool {
    false
}

fn default_randomize_color() -> bool {
    false
}

fn default_depletion_rate() -> f64 {
    ink::DEFAULT_DEPLETION_RATE
}

fn default_penalty_enabled() -> bool {
    false
}

fn default_intermittent_enabled() -> bool {
    false
}

fn default_intermittent_period_ms() -> u64 {
    50
}

fn default_words() -> Vec<String> {
    DEFAULT_WORDS.iter().map(|word| word.to_string()).collect()
}
