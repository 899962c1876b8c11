use std::path::Path;
use async_trait::async_trait;

use crate::error::{WordforgeError, WordforgeResult};
use crate::generator::GenerationResult;
use crate::output::format::{categorize_password, OutputFormat, WordlistWriter};

/// Tabular wordlist with `length` and `category` columns
pub struct CsvWordlistWriter;

impl CsvWordlistWriter {
    pub fn new() -> Self {
        Self
    }

    /// Render the whole table, header included
    pub fn render(result: &GenerationResult) -> String {
        let mut out = String::from("password,length,category\r\n");
        for password in &result.passwords {
            out.push_str(&escape_field(password));
            out.push(',');
            out.push_str(&password.chars().count().to_string());
            out.push(',');
            out.push_str(categorize_password(password).as_str());
            out.push_str("\r\n");
        }
        out
    }
}

// Quote fields containing separators, quotes or line breaks
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[async_trait]
impl WordlistWriter for CsvWordlistWriter {
    async fn write(&self, result: &GenerationResult, output_path: &Path) -> WordforgeResult<()> {
        tokio::fs::write(output_path, Self::render(result)).await
            .map_err(|e| WordforgeError::FileError {
                path: output_path.to_path_buf(),
                message: format!("Failed to write CSV wordlist: {}", e),
            })
    }

    fn supported_format(&self) -> OutputFormat {
        OutputFormat::Csv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("john!"), "john!");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
