// src/utils/validate.rs
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static INVALID_FILENAME_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[<>:"/\\|?*]"#).expect("filename character class is a valid regex")
});

/// Birth years accepted in DDMMYYYY dates
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1900..=2030;

/// Check that a string is eight digits forming a real DDMMYYYY calendar date
pub fn validate_date_format(date_str: &str) -> bool {
    if date_str.len() != 8 || !date_str.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let (Ok(day), Ok(month), Ok(year)) = (
        date_str[..2].parse::<u32>(),
        date_str[2..4].parse::<u32>(),
        date_str[4..].parse::<i32>(),
    ) else {
        return false;
    };

    YEAR_RANGE.contains(&year) && NaiveDate::from_ymd_opt(year, month, day).is_some()
}

/// Replace characters that are unsafe in file names and fall back to `wordlist`
pub fn sanitize_filename(filename: &str) -> String {
    let replaced = INVALID_FILENAME_CHARS.replace_all(filename, "_");
    let trimmed = replaced.trim_matches(|c| c == ' ' || c == '.');

    if trimmed.is_empty() {
        "wordlist".to_string()
    } else {
        trimmed.to_string()
    }
}
