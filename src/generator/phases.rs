// src/generator/phases.rs - Transformation phases
//
// Each phase only inserts into the shared candidate set.

use crate::profile::PersonalInfo;
use super::candidates::CandidateSet;
use super::options::GenerationOptions;
use super::wordlists::{
    to_leet_speak, BRANDS, BRAND_WORD_CAP, COMMON_PASSWORDS, COMMON_PASSWORD_WORD_CAP,
    KEYBOARD_PATTERNS, NUMBERS, NUMBER_CAP, SPECIAL_CHARS, YEARS,
};

/// Phase 1: verbatim words, numeric and special affixes, pairwise joins
pub fn basic_combinations(base_words: &[String], candidates: &mut CandidateSet, options: &GenerationOptions) {
    let combine = options.include_combinations && base_words.len() > 1;

    for word in base_words {
        candidates.insert(word.as_str());

        if options.include_numbers {
            for num in NUMBERS {
                candidates.insert(format!("{word}{num}"));
                candidates.insert(format!("{num}{word}"));
            }
        }

        if options.include_special_chars {
            for ch in SPECIAL_CHARS {
                candidates.insert(format!("{word}{ch}"));
                candidates.insert(format!("{ch}{word}"));
            }
        }

        if combine {
            for other in base_words.iter().filter(|other| *other != word) {
                candidates.insert(format!("{word}{other}"));
                candidates.insert(format!("{word}_{other}"));
                candidates.insert(format!("{word}.{other}"));
            }
        }
    }
}

/// Pieces of a DDMMYYYY date that people put in passwords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateVariants {
    pub year: String,
    pub month: String,
    pub day: String,
    pub short_year: String,
    pub month_day: String,
    pub day_month: String,
}

impl DateVariants {
    /// Split an eight character date; anything else yields `None`
    pub fn parse(date: &str) -> Option<Self> {
        let chars: Vec<char> = date.chars().collect();
        if chars.len() != 8 {
            return None;
        }

        let slice = |range: std::ops::Range<usize>| chars[range].iter().collect::<String>();
        let day = slice(0..2);
        let month = slice(2..4);

        Some(Self {
            year: slice(4..8),
            short_year: slice(6..8),
            month_day: format!("{month}{day}"),
            day_month: format!("{day}{month}"),
            month,
            day,
        })
    }

    pub fn all(&self) -> [&str; 6] {
        [
            &self.year,
            &self.month,
            &self.day,
            &self.short_year,
            &self.month_day,
            &self.day_month,
        ]
    }
}

/// Phase 2: birth date fragments and recent years around each base word
pub fn date_combinations(personal_info: &PersonalInfo, base_words: &[String], candidates: &mut CandidateSet) {
    let dates: Vec<DateVariants> = personal_info.birth_dates()
        .into_iter()
        .flatten()
        .filter_map(DateVariants::parse)
        .collect();

    for variants in &dates {
        for word in base_words {
            for variant in variants.all() {
                candidates.insert(format!("{word}{variant}"));
                candidates.insert(format!("{variant}{word}"));
                candidates.insert(format!("{word}_{variant}"));
            }
        }
    }

    for year in YEARS {
        for word in base_words {
            candidates.insert(format!("{word}{year}"));
            candidates.insert(format!("{year}{word}"));
        }
    }
}

/// Phase 3: leet-speak version of everything generated so far
pub fn leet_variations(candidates: &mut CandidateSet) {
    for candidate in candidates.snapshot() {
        let leet = to_leet_speak(&candidate);
        if leet != candidate {
            candidates.insert(leet);
        }
    }
}

/// Phase 4: reversed base words
pub fn reversed_words(base_words: &[String], candidates: &mut CandidateSet, options: &GenerationOptions) {
    for word in base_words {
        let reversed: String = word.chars().rev().collect();

        if options.include_numbers {
            for num in &NUMBERS[..NUMBER_CAP] {
                candidates.insert(format!("{reversed}{num}"));
            }
        }

        candidates.insert(reversed);
    }
}

/// Phase 5: common passwords alone and around the first base words
pub fn common_password_variations(base_words: &[String], candidates: &mut CandidateSet) {
    for common in COMMON_PASSWORDS {
        candidates.insert(*common);

        for word in base_words.iter().take(COMMON_PASSWORD_WORD_CAP) {
            candidates.insert(format!("{common}{word}"));
            candidates.insert(format!("{word}{common}"));
            candidates.insert(format!("{common}_{word}"));
        }
    }
}

/// Phase 6: keyboard walks, optionally with a short numeric suffix
pub fn keyboard_patterns(candidates: &mut CandidateSet, options: &GenerationOptions) {
    for pattern in KEYBOARD_PATTERNS {
        candidates.insert(*pattern);

        if options.include_numbers {
            for num in &NUMBERS[..NUMBER_CAP] {
                candidates.insert(format!("{pattern}{num}"));
            }
        }
    }
}

/// Phase 7: brand names alone and around the first base words
pub fn brand_combinations(base_words: &[String], candidates: &mut CandidateSet) {
    for brand in BRANDS {
        candidates.insert(*brand);

        for word in base_words.iter().take(BRAND_WORD_CAP) {
            candidates.insert(format!("{brand}{word}"));
            candidates.insert(format!("{word}{brand}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_date_variants() {
        let variants = DateVariants::parse("15061990").unwrap();
        assert_eq!(variants.year, "1990");
        assert_eq!(variants.month, "06");
        assert_eq!(variants.day, "15");
        assert_eq!(variants.short_year, "90");
        assert_eq!(variants.month_day, "0615");
        assert_eq!(variants.day_month, "1506");

        assert!(DateVariants::parse("1506199").is_none());
        assert!(DateVariants::parse("150619900").is_none());
        assert!(DateVariants::parse("").is_none());
    }

    #[test]
    fn test_basic_combinations() {
        let base = words(&["alice", "team"]);
        let mut set = CandidateSet::new();
        basic_combinations(&base, &mut set, &GenerationOptions::default());

        for expected in ["alice", "alice1234", "99alice", "alice!", "~team", "aliceteam", "alice_team", "team.alice"] {
            assert!(set.contains(expected), "missing {}", expected);
        }
        assert!(!set.contains("alicealice"));
    }

    #[test]
    fn test_basic_combinations_without_combinations() {
        let base = words(&["alice", "team"]);
        let options = GenerationOptions { include_combinations: false, ..GenerationOptions::default() };
        let mut set = CandidateSet::new();
        basic_combinations(&base, &mut set, &options);

        assert!(set.contains("alice123"));
        assert!(set.contains("team!"));
        assert!(!set.contains("aliceteam"));
        assert!(!set.contains("alice_team"));
        assert!(!set.contains("alice.team"));
    }

    #[test]
    fn test_single_word_has_no_pairs() {
        let base = words(&["solo"]);
        let options = GenerationOptions {
            include_numbers: false,
            include_special_chars: false,
            ..GenerationOptions::default()
        };
        let mut set = CandidateSet::new();
        basic_combinations(&base, &mut set, &options);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_date_combinations() {
        let info = PersonalInfo {
            birth_date: Some("15061990".to_string()),
            partner_birth_date: Some("bad".to_string()),
            ..PersonalInfo::default()
        };
        let mut set = CandidateSet::new();
        date_combinations(&info, &words(&["john"]), &mut set);

        for expected in ["john1990", "1990john", "john_0615", "1506john", "john90", "john2026", "2020john"] {
            assert!(set.contains(expected), "missing {}", expected);
        }
        // 6 variants * 3 forms + 7 years * 2; the malformed partner date adds nothing
        assert_eq!(set.len(), 18 + 14);
    }

    #[test]
    fn test_years_without_dates() {
        let mut set = CandidateSet::new();
        date_combinations(&PersonalInfo::default(), &words(&["john"]), &mut set);
        assert_eq!(set.len(), YEARS.len() * 2);
    }

    #[test]
    fn test_leet_variations_use_accumulated_set() {
        let mut set = CandidateSet::new();
        set.insert("john123");
        set.insert("xyz");
        set.insert("bdf");
        leet_variations(&mut set);

        assert!(set.contains("j0hn123"));
        assert!(set.contains("xy2"));
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn test_reversed_words() {
        let mut set = CandidateSet::new();
        reversed_words(&words(&["john"]), &mut set, &GenerationOptions::default());
        for expected in ["nhoj", "nhoj0", "nhoj4"] {
            assert!(set.contains(expected));
        }
        assert!(!set.contains("nhoj5"));
        assert_eq!(set.len(), 1 + NUMBER_CAP);
    }

    #[test]
    fn test_capped_phases() {
        let base = words(&["w1", "w2", "w3", "w4", "w5", "w6"]);

        let mut set = CandidateSet::new();
        common_password_variations(&base, &mut set);
        assert!(set.contains("passwordw5"));
        assert!(set.contains("w1sunshine"));
        assert!(set.contains("admin_w3"));
        assert!(!set.contains("passwordw6"));

        let mut set = CandidateSet::new();
        brand_combinations(&base, &mut set);
        assert!(set.contains("applew3"));
        assert!(set.contains("w1samsung"));
        assert!(!set.contains("applew4"));
        assert_eq!(set.len(), BRANDS.len() * (1 + 2 * BRAND_WORD_CAP));
    }

    #[test]
    fn test_keyboard_patterns() {
        let mut set = CandidateSet::new();
        keyboard_patterns(&mut set, &GenerationOptions::default());
        assert!(set.contains("qwerty"));
        assert!(set.contains("zxc4"));
        assert!(!set.contains("zxc5"));

        let mut bare = CandidateSet::new();
        let options = GenerationOptions { include_numbers: false, ..GenerationOptions::default() };
        keyboard_patterns(&mut bare, &options);
        assert_eq!(bare.len(), KEYBOARD_PATTERNS.len());
    }
}
