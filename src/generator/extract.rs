// src/generator/extract.rs - Base word extraction from a target profile
use std::collections::HashSet;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::profile::TargetProfile;
use super::wordlists::{COLORS, SEASONS};

static PLATFORM_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:instagram\.com|facebook\.com|twitter\.com|linkedin\.com|github\.com|tiktok\.com|youtube\.com|reddit\.com)/(?:@)?([^/?]+)",
    )
    .expect("platform URL pattern is a valid regex")
});

static BARE_HANDLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^@?([a-zA-Z0-9_.-]+)$").expect("handle pattern is a valid regex")
});

/// Insertion-ordered, de-duplicated collection of seed words
#[derive(Debug, Default)]
struct BaseWords {
    words: Vec<String>,
    seen: HashSet<String>,
}

impl BaseWords {
    fn add(&mut self, value: &str) {
        let value = value.trim();
        if value.is_empty() || self.seen.contains(value) {
            return;
        }
        self.seen.insert(value.to_string());
        self.words.push(value.to_string());
    }

    /// Lower-cased and title-cased forms of a trimmed fact
    fn add_forms(&mut self, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        self.add(&value.to_lowercase());
        self.add(&capitalize(value));
    }
}

/// Upper-case the first character and lower-case the rest
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

/// Pull a bare username out of a social profile URL or handle
pub fn extract_username(profile: &str) -> &str {
    if let Some(caps) = PLATFORM_URL.captures(profile) {
        if let Some(m) = caps.get(1) {
            return m.as_str();
        }
    }

    if let Some(caps) = BARE_HANDLE.captures(profile) {
        if let Some(m) = caps.get(1) {
            return m.as_str();
        }
    }

    profile
}

/// Collect every seed word the transformation phases start from.
///
/// Personal facts come first, followed by keywords, social usernames,
/// interests and finally the fixed season and color lists. The order matters
/// to the phases that only use the first few base words.
pub fn extract_base_words(profile: &TargetProfile) -> Vec<String> {
    let mut base = BaseWords::default();

    for field in profile.personal_info.name_fields().into_iter().flatten() {
        base.add_forms(field);
    }

    for keyword in &profile.personal_info.keywords {
        base.add_forms(keyword);
    }

    // Patterns run on the raw value; padded handles fall back verbatim
    for handle in profile.social_media.values().flatten() {
        if handle.trim().is_empty() {
            continue;
        }
        base.add_forms(extract_username(handle));
    }

    for interest in profile.recon_info.interests() {
        base.add_forms(interest);
    }

    // Merged regardless of include_seasons / include_colors
    for word in SEASONS.iter().chain(COLORS.iter()) {
        base.add(word);
    }

    base.words
}
