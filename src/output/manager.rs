use std::collections::HashMap;
use std::path::PathBuf;
use console::style;
use tracing::{debug, info};

use crate::error::{WordforgeError, WordforgeResult};
use crate::generator::GenerationResult;
use crate::utils::format_number;
use super::format::{OutputFormat, WordlistWriter};
use super::formats::csv::CsvWordlistWriter;
use super::formats::json::JsonWordlistWriter;
use super::formats::text::TextWordlistWriter;

/// Wordlist output manager
pub struct OutputManager {
    writers: HashMap<OutputFormat, Box<dyn WordlistWriter>>,
    format: OutputFormat,
}

impl OutputManager {
    /// Create a new output manager writing in `format`
    pub fn new(format: OutputFormat) -> Self {
        let available: Vec<Box<dyn WordlistWriter>> = vec![
            Box::new(TextWordlistWriter::new()),
            Box::new(CsvWordlistWriter::new()),
            Box::new(JsonWordlistWriter::new()),
        ];

        let writers = available
            .into_iter()
            .map(|writer| {
                debug!("Registering wordlist writer for format: {}", writer.supported_format());
                (writer.supported_format(), writer)
            })
            .collect();

        Self { writers, format }
    }

    /// Save the result, appending the format extension when missing
    pub async fn save_results(&self, result: &GenerationResult, filename: &str) -> WordforgeResult<PathBuf> {
        let writer = self.writers.get(&self.format)
            .ok_or_else(|| WordforgeError::UnsupportedFormat(format!("No writer found for format {}", self.format)))?;

        let output_path = PathBuf::from(with_extension(filename, self.format));

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                tokio::fs::create_dir_all(parent).await
                    .map_err(|e| WordforgeError::FileError {
                        path: parent.to_path_buf(),
                        message: format!("Failed to create directory: {}", e),
                    })?;
            }
        }

        writer.write(result, &output_path).await?;
        info!("Saved {} passwords to {}", format_number(result.count), output_path.display());

        Ok(output_path)
    }

    /// Print the first `limit` candidates
    pub fn preview_results(&self, result: &GenerationResult, limit: usize) {
        print!("{}", render_preview(result, limit));
    }

    /// Print generation statistics
    pub fn display_statistics(&self, result: &GenerationResult) {
        print!("{}", render_statistics(result));
    }
}

/// Append `.ext` unless the name already ends with it
pub fn with_extension(filename: &str, format: OutputFormat) -> String {
    let suffix = format!(".{}", format.extension());
    if filename.ends_with(&suffix) {
        filename.to_string()
    } else {
        format!("{}{}", filename, suffix)
    }
}

pub fn render_preview(result: &GenerationResult, limit: usize) -> String {
    let total = result.passwords.len();
    let shown = limit.min(total);
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", style("Wordlist Preview").bold().cyan()));
    out.push_str(&format!("Total passwords: {}\n", format_number(total)));
    out.push_str(&format!("Showing first {} passwords:\n\n", shown));

    for (i, password) in result.passwords.iter().take(limit).enumerate() {
        out.push_str(&format!("   {:2}. {}\n", i + 1, password));
    }

    if total > limit {
        out.push_str(&format!("\n   ... and {} more passwords\n", format_number(total - limit)));
    }

    out.push_str("\nUse without --preview to generate the full wordlist\n");
    out
}

pub fn render_statistics(result: &GenerationResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", style("Generation Statistics").bold().green()));
    out.push_str(&format!("   Base words extracted: {}\n", format_number(result.base_words_count)));
    out.push_str(&format!("   Total combinations generated: {}\n", format_number(result.total_before_filter)));
    out.push_str(&format!("   Final passwords (after filtering): {}\n", format_number(result.count)));

    if let Some(stats) = result.length_stats() {
        out.push_str(&format!("   Password length range: {} - {}\n", stats.min, stats.max));
        out.push_str(&format!("   Average password length: {:.1}\n", stats.average));
    }

    out.push_str(&format!("   Active generation options: {}\n", result.options.active_options().len()));
    out.push_str(&format!(
        "   Generation completed: {}\n",
        result.generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out
}
