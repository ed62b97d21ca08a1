//! Configuration file support for sketchparty.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/sketchparty/config.toml`.
//! Settings include the starting brush, ink economy tuning, and the prompt
//! vocabulary.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{DrawingConfig, InkConfig, VocabularyConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// color = "black"
/// brush_size = 5
/// mirror_enabled = false
///
/// [ink]
/// depletion_rate_per_sample = 0.115
/// intermittent_enabled = true
/// intermittent_period_ms = 50
///
/// [vocabulary]
/// words = ["Car", "House", "Tree"]
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Brush defaults and painting modifiers
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Ink economy tuning
    #[serde(default)]
    pub ink: InkConfig,

    /// Prompt vocabulary
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// User-provided values that fall outside their valid range are pulled
    /// back to the nearest valid value and a warning is logged; a broken
    /// config never prevents a session from starting.
    ///
    /// Validated ranges:
    /// - `brush_size`: 1 - 20
    /// - `depletion_rate_per_sample`: finite and non-negative
    /// - `intermittent_period_ms`: 1 - 10000
    fn validate_and_clamp(&mut self) {
        // Brush size: 1 - 20
        if !(1..=20).contains(&self.drawing.brush_size) {
            log::warn!(
                "Invalid brush_size {}, clamping to 1-20 range",
                self.drawing.brush_size
            );
            self.drawing.brush_size = self.drawing.brush_size.clamp(1, 20);
        }

        // Depletion rate: finite, non-negative
        if !self.ink.depletion_rate_per_sample.is_finite() || self.ink.depletion_rate_per_sample < 0.0
        {
            log::warn!(
                "Invalid depletion_rate_per_sample {}, using default {}",
                self.ink.depletion_rate_per_sample,
                crate::ink::DEFAULT_DEPLETION_RATE
            );
            self.ink.depletion_rate_per_sample = crate::ink::DEFAULT_DEPLETION_RATE;
        }

        // Intermittent period: 1 - 10000 ms
        if !(1..=10_000).contains(&self.ink.intermittent_period_ms) {
            log::warn!(
                "Invalid intermittent_period_ms {}, clamping to 1-10000 range",
                self.ink.intermittent_period_ms
            );
            self.ink.intermittent_period_ms = self.ink.intermittent_period_ms.clamp(1, 10_000);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchparty/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchparty");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's
    /// config directory (used by `sketchparty --init-config`).
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        // Create directory
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;

    #[test]
    fn defaults_survive_validation_unchanged() {
        let mut config = Config::default();
        config.validate_and_clamp();

        assert_eq!(config.drawing.brush_size, 5);
        assert_eq!(config.drawing.color.to_color(), BLACK);
        assert!(!config.drawing.mirror_enabled);
        assert_eq!(
            config.ink.depletion_rate_per_sample,
            crate::ink::DEFAULT_DEPLETION_RATE
        );
        assert_eq!(config.ink.intermittent_period_ms, 50);
        assert_eq!(config.vocabulary.words.len(), 20);
    }

    #[test]
    fn partial_toml_fills_missing_sections_with_defaults() {
        let toml_str = r#"
            [ink]
            depletion_rate_per_sample = 0.5
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();

        assert_eq!(config.ink.depletion_rate_per_sample, 0.5);
        assert!(!config.ink.penalty_enabled);
        assert_eq!(config.drawing.brush_size, 5);
        assert_eq!(config.vocabulary.words.len(), 20);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let toml_str = r#"
            [drawing]
            brush_size = 99

            [ink]
            depletion_rate_per_sample = -1.0
            intermittent_period_ms = 0
        "#;
        let mut config: Config = toml::from_str(toml_str).unwrap();
        config.validate_and_clamp();

        assert_eq!(config.drawing.brush_size, 20);
        assert_eq!(
            config.ink.depletion_rate_per_sample,
            crate::ink::DEFAULT_DEPLETION_RATE
        );
        assert_eq!(config.ink.intermittent_period_ms, 1);
    }

    #[test]
    fn rgb_color_and_custom_vocabulary_parse() {
        let toml_str = r#"
            [drawing]
            color = [0, 128, 128]

            [vocabulary]
            words = ["Robot", "Pizza"]
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();

        assert_eq!(config.drawing.color.to_color(), crate::draw::color::TEAL);
        assert_eq!(config.vocabulary.words, vec!["Robot", "Pizza"]);
    }
}
