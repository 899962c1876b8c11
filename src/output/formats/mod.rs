pub mod csv;
pub mod json;
pub mod text;

pub use super::format::{OutputFormat, WordlistWriter, categorize_password, PasswordCategory};
