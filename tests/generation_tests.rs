//! End-to-end generation tests against the public API

use std::collections::HashSet;
use wordforge::generator::{extract_base_words, wordlists};
use wordforge::profile::sample_document;
use wordforge::{GenerationOptions, TargetProfile, WordlistGenerator};

fn john() -> TargetProfile {
    TargetProfile::with_first_name("john")
}

fn contains(passwords: &[String], candidate: &str) -> bool {
    passwords.binary_search(&candidate.to_string()).is_ok()
}

#[test]
fn test_every_candidate_respects_length_bounds() {
    let document = sample_document();
    for (min, max) in [(1, 100), (4, 25), (8, 12), (10, 10), (25, 25)] {
        let options = document.options.clone().with_lengths(Some(min), Some(max));
        let result = WordlistGenerator::new().generate(&document.profile, &options);

        assert!(result.passwords.iter().all(|p| {
            let len = p.chars().count();
            !p.is_empty() && len >= min && len <= max
        }), "bounds {}-{} violated", min, max);
        assert!(result.total_before_filter >= result.count);
    }
}

#[test]
fn test_output_is_sorted_without_duplicates() {
    let document = sample_document();
    let result = WordlistGenerator::new().generate(&document.profile, &document.options);

    let unique: HashSet<&String> = result.passwords.iter().collect();
    assert_eq!(unique.len(), result.passwords.len());
    assert!(result.passwords.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(result.count, result.passwords.len());
}

#[test]
fn test_john_scenario() {
    let result = WordlistGenerator::new().generate(&john(), &GenerationOptions::default());

    for expected in ["john", "John", "john123", "j0hn", "nhoj"] {
        assert!(contains(&result.passwords, expected), "missing {}", expected);
    }
    assert!(!contains(&result.passwords, "j"));
    assert!(result.passwords.iter().all(|p| p.chars().count() <= 25));
}

#[test]
fn test_birth_date_scenario() {
    let mut profile = john();
    profile.personal_info.birth_date = Some("15061990".to_string());
    let options = GenerationOptions::default().with_lengths(Some(1), Some(100));

    let result = WordlistGenerator::new().generate(&profile, &options);
    // Nothing is filtered with these bounds, so the output equals the pre-filter set
    assert_eq!(result.count, result.total_before_filter);
    for expected in ["john1990", "1990john", "john06", "15john", "john_90", "john0615", "1506john"] {
        assert!(contains(&result.passwords, expected), "missing {}", expected);
    }
}

#[test]
fn test_malformed_dates_are_skipped() {
    let mut profile = john();
    profile.personal_info.birth_date = Some("1561990".to_string());
    profile.personal_info.child_birth_date = Some(String::new());

    let with_bad_dates = WordlistGenerator::new().generate(&profile, &GenerationOptions::default());
    let without_dates = WordlistGenerator::new().generate(&john(), &GenerationOptions::default());
    assert_eq!(with_bad_dates.passwords, without_dates.passwords);
}

#[test]
fn test_combinations_disabled() {
    let mut profile = TargetProfile::with_first_name("alice");
    profile.personal_info.keywords = vec!["team".to_string()];
    let options = GenerationOptions {
        include_combinations: false,
        ..GenerationOptions::default()
    };

    let result = WordlistGenerator::new().generate(&profile, &options);
    for absent in ["aliceteam", "alice_team", "alice.team", "teamalice", "alicered", "Alice_Team"] {
        assert!(!contains(&result.passwords, absent), "unexpected {}", absent);
    }
    for present in ["alice", "team", "alice123", "team!", "@alice"] {
        assert!(contains(&result.passwords, present), "missing {}", present);
    }
}

#[test]
fn test_exact_length_ten() {
    let mut profile = TargetProfile::with_first_name("alice");
    profile.personal_info.keywords = vec!["team".to_string()];
    let options = GenerationOptions::default().with_lengths(Some(10), Some(10));

    let result = WordlistGenerator::new().generate(&profile, &options);
    assert!(result.passwords.iter().all(|p| p.chars().count() == 10));
    assert!(contains(&result.passwords, "alice_team"));
    assert!(contains(&result.passwords, "411c3_734m"));
}

#[test]
fn test_seasons_and_colors_are_always_base_words() {
    let words = extract_base_words(&john());
    for word in wordlists::SEASONS.iter().chain(wordlists::COLORS.iter()) {
        assert!(words.contains(&word.to_string()));
    }

    let options = GenerationOptions {
        include_seasons: false,
        include_colors: false,
        ..GenerationOptions::default()
    };
    let result = WordlistGenerator::new().generate(&john(), &options);
    assert!(contains(&result.passwords, "summer"));
    assert!(contains(&result.passwords, "green123"));
}

#[test]
fn test_social_usernames_feed_generation() {
    let mut profile = john();
    profile.social_media.insert("instagram".to_string(), Some("https://instagram.com/@jd_90/".to_string()));
    profile.social_media.insert("discord".to_string(), Some("johndoe#1234".to_string()));

    let result = WordlistGenerator::new().generate(&profile, &GenerationOptions::default());
    assert!(contains(&result.passwords, "jd_90"));
    assert!(contains(&result.passwords, "Jd_90!"));
    assert!(contains(&result.passwords, "johndoe#1234"));
}

#[test]
fn test_sample_document_is_deterministic() {
    let document = sample_document();
    let first = WordlistGenerator::new().generate(&document.profile, &document.options);
    let second = WordlistGenerator::new().generate(&document.profile, &document.options);
    assert_eq!(first.passwords, second.passwords);
    assert_eq!(first.base_words_count, second.base_words_count);
}
