mod format;
mod validate;

pub use format::{display_banner, estimate_generation_time, format_number};
pub use validate::{sanitize_filename, validate_date_format};
