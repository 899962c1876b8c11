use std::path::Path;
use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use crate::config::Settings;
use crate::generator::{extract_base_words, GenerationOptions, WordlistGenerator};
use crate::output::OutputManager;
use crate::profile::{sample_document, TargetDocument};
use crate::utils::{display_banner, estimate_generation_time, format_number, sanitize_filename};

use super::commands::{Args, Commands};
use super::interactive::DataCollector;

/// The main application struct
pub struct App {
    args: Args,
    settings: Settings,
}

impl App {
    /// Create a new application instance, loading layered settings
    pub fn new(args: Args) -> Result<Self> {
        let settings = Settings::load(args.settings.as_deref())
            .context("Failed to load settings")?;
        Ok(Self { args, settings })
    }

    /// Run the application
    pub async fn run(&self) -> Result<()> {
        info!("Starting wordforge v{}", env!("CARGO_PKG_VERSION"));

        match &self.args.command {
            Some(Commands::Sample { path, force }) => self.write_sample(path, *force),
            Some(Commands::Init { force }) => {
                let path = Settings::init(self.args.settings.as_deref(), *force)?;
                println!("Settings initialized at {}", path.display());
                Ok(())
            }
            None => self.generate().await,
        }
    }

    fn write_sample(&self, path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            bail!("{} already exists. Use --force to overwrite.", path.display());
        }
        sample_document().save(path)?;
        println!("Sample target document written to {}", path.display());
        Ok(())
    }

    /// Resolve the target document from `--config` or the questionnaire
    fn load_document(&self) -> Result<TargetDocument> {
        match (&self.args.config, self.args.batch) {
            (Some(path), _) => {
                info!("Loading configuration from {}", path.display());
                TargetDocument::load(path)
                    .with_context(|| format!("Could not load config file {}", path.display()))
            }
            (None, true) => bail!("Batch mode requires --config parameter"),
            (None, false) => {
                let collector = DataCollector::new(self.args.quiet, self.settings.generation.clone());
                Ok(collector.collect_all_data()?)
            }
        }
    }

    /// Reject impossible length flags before any prompting
    fn check_length_flags(&self) -> Result<()> {
        let (min, max) = (self.args.min_length, self.args.max_length);
        if min.is_some() || max.is_some() {
            GenerationOptions::default().with_lengths(min, max).validate()?;
        }
        Ok(())
    }

    /// Load the document and apply the length flags over its options
    fn resolve_document(&self) -> Result<TargetDocument> {
        let TargetDocument { profile, options } = self.load_document()?;
        let options = options.with_lengths(self.args.min_length, self.args.max_length);
        options.validate()?;
        Ok(TargetDocument { profile, options })
    }

    async fn generate(&self) -> Result<()> {
        let args = &self.args;

        if !args.quiet {
            display_banner(env!("CARGO_PKG_VERSION"));
        }

        self.check_length_flags()?;

        let filename = sanitize_filename(args.output.as_deref().unwrap_or(&self.settings.output.filename));
        let format = args.format.unwrap_or(self.settings.output.format);
        let output_manager = OutputManager::new(format);

        let TargetDocument { profile, options } = self.resolve_document()?;

        if args.verbose {
            let base_words = extract_base_words(&profile).len();
            println!(
                "Found {} base words, estimated generation time: {}",
                base_words,
                estimate_generation_time(base_words, &options)
            );
        }

        debug!("Generating wordlist with options: {:?}", options);
        let result = WordlistGenerator::new().generate(&profile, &options);

        if args.preview {
            output_manager.preview_results(&result, self.settings.output.preview_limit);
            return Ok(());
        }

        let path = output_manager.save_results(&result, &filename).await?;

        if !args.quiet {
            println!("Wordlist generated successfully!");
            println!("Total passwords: {}", format_number(result.count));
            println!("Saved to: {}", path.display());
        }

        if args.verbose {
            output_manager.display_statistics(&result);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn app(argv: &[&str]) -> App {
        let args = Args::try_parse_from(std::iter::once("wordforge").chain(argv.iter().copied())).unwrap();
        App { args, settings: Settings::default() }
    }

    fn write_document(dir: &TempDir, options: &str) -> String {
        let path = dir.path().join("target.json");
        std::fs::write(
            &path,
            format!(r#"{{"personal_info": {{"first_name": "john"}}, "options": {}}}"#, options),
        ).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_batch_requires_config() {
        let err = app(&["--batch"]).resolve_document().unwrap_err();
        assert!(err.to_string().contains("--config"));
    }

    #[test]
    fn test_cli_lengths_override_document() {
        let dir = TempDir::new().unwrap();
        let path = write_document(&dir, r#"{"min_length": 4, "max_length": 20}"#);

        let document = app(&["-c", &path, "--batch", "--min-length", "8"]).resolve_document().unwrap();
        assert_eq!(document.options.min_length, 8);
        assert_eq!(document.options.max_length, 20);
        assert_eq!(document.profile.personal_info.first_name.as_deref(), Some("john"));

        let untouched = app(&["-c", &path, "--batch"]).resolve_document().unwrap();
        assert_eq!(untouched.options.min_length, 4);
    }

    #[test]
    fn test_merged_options_are_validated() {
        let dir = TempDir::new().unwrap();
        let path = write_document(&dir, r#"{"min_length": 10}"#);

        assert!(app(&["-c", &path, "--batch", "--max-length", "6"]).resolve_document().is_err());
        assert!(app(&["-c", &path, "--batch", "--max-length", "12"]).resolve_document().is_ok());
    }

    #[test]
    fn test_single_length_flag_is_checked_early() {
        assert!(app(&["--min-length", "30"]).check_length_flags().is_err());
        assert!(app(&["--max-length", "101"]).check_length_flags().is_err());
        assert!(app(&["--min-length", "8"]).check_length_flags().is_ok());
        assert!(app(&[]).check_length_flags().is_ok());
    }
}
