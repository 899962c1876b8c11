mod format;
mod manager;
pub mod formats;

pub use format::{categorize_password, OutputFormat, PasswordCategory, WordlistWriter};
pub use manager::{render_preview, render_statistics, with_extension, OutputManager};
