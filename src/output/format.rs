use std::fmt;
use std::path::Path;
use async_trait::async_trait;
use clap::ValueEnum;
use serde::{Serialize, Deserialize};

use crate::error::WordforgeResult;
use crate::generator::wordlists::SPECIAL_CHAR_CLASS;
use crate::generator::GenerationResult;

/// Wordlist export format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One candidate per line
    Txt,
    /// Candidates with length and category columns
    Csv,
    /// Candidates plus profile, options and statistics
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Txt => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Wordlist writer trait
#[async_trait]
pub trait WordlistWriter: Send + Sync {
    /// Write the result to `output_path`
    async fn write(&self, result: &GenerationResult, output_path: &Path) -> WordforgeResult<()>;

    /// Get the supported format
    fn supported_format(&self) -> OutputFormat;
}

/// Coarse character-class category used by the CSV export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordCategory {
    Complex,
    Alphanumeric,
    AlphaSpecial,
    Alphabetic,
}

impl PasswordCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordCategory::Complex => "complex",
            PasswordCategory::Alphanumeric => "alphanumeric",
            PasswordCategory::AlphaSpecial => "alpha_special",
            PasswordCategory::Alphabetic => "alphabetic",
        }
    }
}

pub fn categorize_password(password: &str) -> PasswordCategory {
    let has_digit = password.chars().any(char::is_numeric);
    let has_special = password.chars().any(|c| SPECIAL_CHAR_CLASS.contains(c));

    match (has_digit, has_special) {
        (true, true) => PasswordCategory::Complex,
        (true, false) => PasswordCategory::Alphanumeric,
        (false, true) => PasswordCategory::AlphaSpecial,
        (false, false) => PasswordCategory::Alphabetic,
    }
}
