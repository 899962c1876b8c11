// src/generator/mod.rs - Wordlist generation engine
mod candidates;
mod extract;
mod options;
mod phases;
mod result;
pub mod wordlists;

use chrono::Utc;
use tracing::{debug, info};

use crate::profile::TargetProfile;

pub use candidates::CandidateSet;
pub use extract::{capitalize, extract_base_words, extract_username};
pub use options::{GenerationOptions, MAX_LENGTH_LIMIT};
pub use phases::DateVariants;
pub use result::{GenerationResult, LengthStats};

/// Expands a target profile into a password candidate list
#[derive(Debug, Default, Clone, Copy)]
pub struct WordlistGenerator;

impl WordlistGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Run every enabled phase and return the filtered, sorted candidates.
    ///
    /// `options` must already have passed [`GenerationOptions::validate`].
    pub fn generate(&self, profile: &TargetProfile, options: &GenerationOptions) -> GenerationResult {
        info!("Generating wordlist for target: {}", profile.display_name());

        let base_words = extract_base_words(profile);
        debug!("Found {} base words", base_words.len());

        let mut candidates = CandidateSet::new();

        phases::basic_combinations(&base_words, &mut candidates, options);
        debug!("Basic combinations: {} candidates", candidates.len());

        if options.include_dates {
            phases::date_combinations(&profile.personal_info, &base_words, &mut candidates);
            debug!("Date combinations: {} candidates", candidates.len());
        }

        // Must follow the first two phases so their output is mutated too
        if options.include_leet_speak {
            phases::leet_variations(&mut candidates);
            debug!("Leet variations: {} candidates", candidates.len());
        }

        if options.include_reversed {
            phases::reversed_words(&base_words, &mut candidates, options);
            debug!("Reversed words: {} candidates", candidates.len());
        }

        if options.include_common_passwords {
            phases::common_password_variations(&base_words, &mut candidates);
            debug!("Common passwords: {} candidates", candidates.len());
        }

        if options.include_keyboard_patterns {
            phases::keyboard_patterns(&mut candidates, options);
            debug!("Keyboard patterns: {} candidates", candidates.len());
        }

        if options.include_brand_names {
            phases::brand_combinations(&base_words, &mut candidates);
            debug!("Brand names: {} candidates", candidates.len());
        }

        let total_before_filter = candidates.len();
        let passwords = candidates.into_filtered(options.min_length, options.max_length);

        info!(
            "Filtered to {} passwords within length range ({}-{})",
            passwords.len(), options.min_length, options.max_length
        );

        GenerationResult {
            count: passwords.len(),
            passwords,
            total_before_filter,
            base_words_count: base_words.len(),
            options: options.clone(),
            target_profile: profile.clone(),
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(profile: &TargetProfile, options: &GenerationOptions) -> GenerationResult {
        WordlistGenerator::new().generate(profile, options)
    }

    #[test]
    fn test_first_name_scenario() {
        let result = generate(&TargetProfile::with_first_name("john"), &GenerationOptions::default());

        for expected in ["john", "John", "john123", "j0hn", "nhoj"] {
            assert!(result.passwords.binary_search(&expected.to_string()).is_ok(), "missing {}", expected);
        }
        assert!(!result.passwords.contains(&"j".to_string()));
        assert!(result.passwords.iter().all(|p| (4..=25).contains(&p.chars().count())));
        assert_eq!(result.count, result.passwords.len());
        assert!(result.total_before_filter >= result.count);
        assert_eq!(result.base_words_count, 20);
    }

    #[test]
    fn test_output_sorted_and_unique() {
        let result = generate(&TargetProfile::with_first_name("john"), &GenerationOptions::default());
        assert!(result.passwords.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_exact_length_window() {
        let mut profile = TargetProfile::with_first_name("alice");
        profile.personal_info.keywords = vec!["team".to_string()];
        let options = GenerationOptions::default().with_lengths(Some(10), Some(10));

        let result = generate(&profile, &options);
        assert!(!result.passwords.is_empty());
        assert!(result.passwords.iter().all(|p| p.chars().count() == 10));
        assert!(result.passwords.contains(&"alice_team".to_string()));
        assert!(result.total_before_filter > result.count);
    }

    #[test]
    fn test_no_filtering_when_bounds_cover_everything() {
        let options = GenerationOptions::default().with_lengths(Some(1), Some(100));
        let result = generate(&TargetProfile::with_first_name("john"), &options);
        assert_eq!(result.total_before_filter, result.count);
    }

    #[test]
    fn test_leet_reaches_date_output() {
        let mut profile = TargetProfile::with_first_name("john");
        profile.personal_info.birth_date = Some("15061990".to_string());
        let result = generate(&profile, &GenerationOptions::default());

        assert!(result.passwords.contains(&"john1990".to_string()));
        assert!(result.passwords.contains(&"1990john".to_string()));
        assert!(result.passwords.contains(&"j0hn_0615".to_string()));
    }

    #[test]
    fn test_disabled_phases() {
        let options = GenerationOptions {
            include_dates: false,
            include_leet_speak: false,
            include_reversed: false,
            include_common_passwords: false,
            include_keyboard_patterns: false,
            include_brand_names: false,
            ..GenerationOptions::default()
        };
        let result = generate(&TargetProfile::with_first_name("john"), &options);

        assert!(result.passwords.contains(&"john123".to_string()));
        assert!(!result.passwords.contains(&"j0hn".to_string()));
        assert!(!result.passwords.contains(&"nhoj".to_string()));
        assert!(!result.passwords.contains(&"john2024".to_string()));
        assert!(!result.passwords.contains(&"password".to_string()));
        assert!(!result.passwords.contains(&"qwerty".to_string()));
        assert!(!result.passwords.contains(&"apple".to_string()));
    }

    #[test]
    fn test_result_carries_inputs() {
        let profile = TargetProfile::with_first_name("john");
        let options = GenerationOptions::default();
        let result = generate(&profile, &options);
        assert_eq!(result.target_profile, profile);
        assert_eq!(result.options, options);

        let stats = result.length_stats().unwrap();
        assert!(stats.min >= 4 && stats.max <= 25);
        assert!(stats.average >= stats.min as f64 && stats.average <= stats.max as f64);
    }
}
