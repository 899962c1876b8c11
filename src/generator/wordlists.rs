// src/generator/wordlists.rs - Fixed word lists feeding the generation phases
use std::collections::HashMap;
use once_cell::sync::Lazy;

/// Frequently reused passwords mixed with the target's base words
pub const COMMON_PASSWORDS: &[&str] = &[
    "password", "admin", "user", "login", "welcome", "qwerty", "asdf",
    "master", "root", "guest", "test", "secret", "access", "security",
    "password123", "admin123", "letmein", "monkey", "dragon", "sunshine",
];

pub const YEARS: &[&str] = &["2020", "2021", "2022", "2023", "2024", "2025", "2026"];

// '!' is listed twice; the set absorbs the duplicate.
pub const SPECIAL_CHARS: &[&str] = &["!", "@", "#", "$", "%", "^", "&", "*", "?", "~", "!"];

/// Numeric affixes. Capped phases use only the first [`NUMBER_CAP`] entries.
pub const NUMBERS: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9",
    "00", "01", "02", "03", "10", "11", "12", "99",
    "123", "321", "1234",
];

pub const SEASONS: &[&str] = &["spring", "summer", "autumn", "winter", "fall"];

pub const COLORS: &[&str] = &[
    "red", "blue", "green", "yellow", "black", "white", "purple",
    "orange", "pink", "brown", "grey", "silver", "gold",
];

pub const KEYBOARD_PATTERNS: &[&str] = &[
    "qwerty", "asdf", "zxcv", "1234", "4321", "abcd", "xyz", "qwe", "asd", "zxc",
];

pub const BRANDS: &[&str] = &[
    "apple", "google", "microsoft", "facebook", "amazon",
    "netflix", "spotify", "tesla", "nike", "samsung",
];

/// Characters that count as "special" when classifying candidates
pub const SPECIAL_CHAR_CLASS: &str = "!@#$%^&*?~";

pub const NUMBER_CAP: usize = 5;
pub const COMMON_PASSWORD_WORD_CAP: usize = 5;
pub const BRAND_WORD_CAP: usize = 3;

/// Leet substitutions, keyed by lower-case letter
pub static LEET_MAP: Lazy<HashMap<char, char>> = Lazy::new(|| {
    HashMap::from([
        ('a', '4'),
        ('e', '3'),
        ('i', '1'),
        ('o', '0'),
        ('s', '5'),
        ('t', '7'),
        ('l', '1'),
        ('g', '9'),
        ('z', '2'),
    ])
});

/// Apply the leet map to every character of `text`
pub fn to_leet_speak(text: &str) -> String {
    text.chars()
        .map(|c| *LEET_MAP.get(&c.to_ascii_lowercase()).unwrap_or(&c))
        .collect()
}
