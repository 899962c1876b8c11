use serde::{Serialize, Deserialize};

use crate::generator::GenerationOptions;
use crate::output::OutputFormat;

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Options used when neither a target document nor the questionnaire provides them
    #[serde(default)]
    pub generation: GenerationOptions,

    #[serde(default)]
    pub output: OutputSettings,
}

/// Output defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_format")]
    pub format: OutputFormat,
    #[serde(default = "default_filename")]
    pub filename: String,
    #[serde(default = "default_preview_limit")]
    pub preview_limit: usize,
}

fn default_format() -> OutputFormat { OutputFormat::Txt }
fn default_filename() -> String { "wordlist.txt".to_string() }
fn default_preview_limit() -> usize { 20 }

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: default_format(),
            filename: default_filename(),
            preview_limit: default_preview_limit(),
        }
    }
}
