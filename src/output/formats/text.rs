use std::path::Path;
use async_trait::async_trait;

use crate::error::{WordforgeError, WordforgeResult};
use crate::generator::GenerationResult;
use crate::output::format::{OutputFormat, WordlistWriter};

/// Plain wordlist, one candidate per line
pub struct TextWordlistWriter;

impl TextWordlistWriter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WordlistWriter for TextWordlistWriter {
    async fn write(&self, result: &GenerationResult, output_path: &Path) -> WordforgeResult<()> {
        let mut content = String::with_capacity(result.passwords.iter().map(|p| p.len() + 1).sum());
        for password in &result.passwords {
            content.push_str(password);
            content.push('\n');
        }

        tokio::fs::write(output_path, content).await
            .map_err(|e| WordforgeError::FileError {
                path: output_path.to_path_buf(),
                message: format!("Failed to write wordlist: {}", e),
            })
    }

    fn supported_format(&self) -> OutputFormat {
        OutputFormat::Txt
    }
}
