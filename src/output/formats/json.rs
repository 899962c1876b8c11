use std::path::Path;
use async_trait::async_trait;
use serde::Serialize;

use crate::error::{WordforgeError, WordforgeResult};
use crate::generator::{GenerationOptions, GenerationResult};
use crate::output::format::{OutputFormat, WordlistWriter};
use crate::profile::TargetProfile;

/// JSON export of the full result
pub struct JsonWordlistWriter;

impl JsonWordlistWriter {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Serialize)]
struct JsonExport<'a> {
    passwords: &'a [String],
    count: usize,
    generated_at: String,
    target_profile: &'a TargetProfile,
    options: &'a GenerationOptions,
    statistics: JsonStatistics,
}

#[derive(Serialize)]
struct JsonStatistics {
    base_words_count: usize,
    total_before_filter: usize,
}

impl<'a> From<&'a GenerationResult> for JsonExport<'a> {
    fn from(result: &'a GenerationResult) -> Self {
        Self {
            passwords: &result.passwords,
            count: result.count,
            generated_at: result.generated_at.to_rfc3339(),
            target_profile: &result.target_profile,
            options: &result.options,
            statistics: JsonStatistics {
                base_words_count: result.base_words_count,
                total_before_filter: result.total_before_filter,
            },
        }
    }
}

#[async_trait]
impl WordlistWriter for JsonWordlistWriter {
    async fn write(&self, result: &GenerationResult, output_path: &Path) -> WordforgeResult<()> {
        let json = serde_json::to_string_pretty(&JsonExport::from(result))
            .map_err(|e| WordforgeError::SerializationError(e.to_string()))?;

        tokio::fs::write(output_path, json).await
            .map_err(|e| WordforgeError::FileError {
                path: output_path.to_path_buf(),
                message: format!("Failed to write JSON wordlist: {}", e),
            })
    }

    fn supported_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}
