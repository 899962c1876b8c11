use std::path::PathBuf;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "wordforge", version)]
#[command(about = "Generate custom password wordlists from target intelligence for authorized security testing")]
#[command(after_help = "Examples:\n  \
    wordforge                                 Interactive mode\n  \
    wordforge --config target.json --batch    Batch mode with a target document\n  \
    wordforge --preview -v                    Preview with verbose output\n  \
    wordforge -o custom --format csv --min-length 8")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, help = "Load the target profile and options from a JSON or TOML document")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Settings file (default: ~/.wordforge/config.toml)")]
    pub settings: Option<PathBuf>,

    #[arg(short, long, help = "Output filename (default from settings: wordlist.txt)")]
    pub output: Option<String>,

    #[arg(short, long, value_enum, help = "Output format")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Minimum password length (default: 4)")]
    pub min_length: Option<usize>,

    #[arg(long, help = "Maximum password length (default: 25)")]
    pub max_length: Option<usize>,

    #[arg(short, long, global = true, conflicts_with = "verbose", help = "Quiet mode - minimal output")]
    pub quiet: bool,

    #[arg(short, long, global = true, help = "Verbose mode - detailed output")]
    pub verbose: bool,

    #[arg(short, long, help = "Preview mode - show sample passwords only")]
    pub preview: bool,

    #[arg(long, help = "Batch mode - no interactive prompts (requires --config)")]
    pub batch: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write an example target document to use with --config
    Sample {
        #[arg(help = "Destination path (.json or .toml)")]
        path: PathBuf,

        #[arg(short, long, help = "Overwrite an existing file")]
        force: bool,
    },

    /// Initialize the settings file
    Init {
        #[arg(short, long, help = "Force overwrite existing settings")]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_generation_flags() {
        let args = Args::try_parse_from([
            "wordforge", "-c", "target.json", "--batch", "-f", "csv", "--min-length", "8", "-p",
        ]).unwrap();

        assert_eq!(args.config, Some(PathBuf::from("target.json")));
        assert!(args.batch);
        assert!(args.preview);
        assert_eq!(args.format, Some(OutputFormat::Csv));
        assert_eq!(args.min_length, Some(8));
        assert_eq!(args.max_length, None);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_parse_sample_command() {
        let args = Args::try_parse_from(["wordforge", "sample", "target.toml", "--force"]).unwrap();
        match args.command {
            Some(Commands::Sample { path, force }) => {
                assert_eq!(path, PathBuf::from("target.toml"));
                assert!(force);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["wordforge", "-q", "-v"]).is_err());
    }
}
