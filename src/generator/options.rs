use serde::{Serialize, Deserialize};

use crate::error::{WordforgeError, WordforgeResult};

/// Upper bound accepted for `max_length`
pub const MAX_LENGTH_LIMIT: usize = 100;

/// Toggles controlling which transformation phases run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    #[serde(default = "default_true")]
    pub include_special_chars: bool,
    #[serde(default = "default_true")]
    pub include_numbers: bool,
    #[serde(default = "default_true")]
    pub include_leet_speak: bool,
    #[serde(default = "default_true")]
    pub include_dates: bool,
    #[serde(default = "default_true")]
    pub include_reversed: bool,
    #[serde(default = "default_true")]
    pub include_combinations: bool,
    #[serde(default = "default_true")]
    pub include_common_passwords: bool,
    #[serde(default = "default_true")]
    pub include_keyboard_patterns: bool,
    #[serde(default = "default_true")]
    pub include_brand_names: bool,
    // Seasons and colors are merged into the base words regardless of these two.
    #[serde(default = "default_true")]
    pub include_seasons: bool,
    #[serde(default = "default_true")]
    pub include_colors: bool,
    // Reserved
    #[serde(default)]
    pub include_phrases: bool,
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

fn default_true() -> bool { true }
fn default_min_length() -> usize { 4 }
fn default_max_length() -> usize { 25 }

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            include_special_chars: true,
            include_numbers: true,
            include_leet_speak: true,
            include_dates: true,
            include_reversed: true,
            include_combinations: true,
            include_common_passwords: true,
            include_keyboard_patterns: true,
            include_brand_names: true,
            include_seasons: true,
            include_colors: true,
            include_phrases: false,
            min_length: default_min_length(),
            max_length: default_max_length(),
        }
    }
}

impl GenerationOptions {
    /// Check the length bounds before handing the options to the generator
    pub fn validate(&self) -> WordforgeResult<()> {
        if self.min_length < 1 {
            return Err(WordforgeError::InvalidConfiguration(
                "Minimum length must be at least 1".to_string(),
            ));
        }
        if self.max_length < self.min_length {
            return Err(WordforgeError::InvalidConfiguration(format!(
                "Minimum length ({}) cannot be greater than maximum length ({})",
                self.min_length, self.max_length
            )));
        }
        if self.max_length > MAX_LENGTH_LIMIT {
            return Err(WordforgeError::InvalidConfiguration(format!(
                "Maximum length cannot exceed {}",
                MAX_LENGTH_LIMIT
            )));
        }
        Ok(())
    }

    /// Override the length bounds with the values given on the command line
    pub fn with_lengths(mut self, min_length: Option<usize>, max_length: Option<usize>) -> Self {
        if let Some(min) = min_length {
            self.min_length = min;
        }
        if let Some(max) = max_length {
            self.max_length = max;
        }
        self
    }

    /// Names of the enabled `include_*` toggles
    pub fn active_options(&self) -> Vec<&'static str> {
        [
            ("include_special_chars", self.include_special_chars),
            ("include_numbers", self.include_numbers),
            ("include_leet_speak", self.include_leet_speak),
            ("include_dates", self.include_dates),
            ("include_reversed", self.include_reversed),
            ("include_combinations", self.include_combinations),
            ("include_common_passwords", self.include_common_passwords),
            ("include_keyboard_patterns", self.include_keyboard_patterns),
            ("include_brand_names", self.include_brand_names),
            ("include_seasons", self.include_seasons),
            ("include_colors", self.include_colors),
            ("include_phrases", self.include_phrases),
        ]
        .into_iter()
        .filter(|(_, enabled)| *enabled)
        .map(|(name, _)| name)
        .collect()
    }
}
