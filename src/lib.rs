pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod profile;
pub mod utils;

// Re-export main types for easier access
pub use cli::App;
pub use config::Settings;
pub use error::{WordforgeError, WordforgeResult};
pub use generator::{
    GenerationOptions,
    GenerationResult,
    WordlistGenerator
};
pub use output::{OutputFormat, OutputManager};
pub use profile::{TargetDocument, TargetProfile};
