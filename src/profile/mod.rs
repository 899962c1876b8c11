// src/profile/mod.rs - Target profile model
mod loader;

use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};

pub use loader::{TargetDocument, sample_document};

/// Social platforms prompted for by the interactive collector
pub const SOCIAL_PLATFORMS: &[(&str, &str)] = &[
    ("instagram", "Instagram profile/username"),
    ("facebook", "Facebook profile/username"),
    ("twitter", "Twitter/X handle"),
    ("linkedin", "LinkedIn profile"),
    ("github", "GitHub username"),
    ("tiktok", "TikTok username"),
    ("youtube", "YouTube channel"),
    ("reddit", "Reddit username"),
    ("discord", "Discord username"),
    ("telegram", "Telegram username"),
];

/// Everything known about the target
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetProfile {
    #[serde(default)]
    pub personal_info: PersonalInfo,

    // platform -> raw profile URL or handle
    #[serde(default)]
    pub social_media: BTreeMap<String, Option<String>>,

    #[serde(default)]
    pub recon_info: ReconInfo,
}

/// Personal facts about the target and their family
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// DDMMYYYY
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_birth_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_birth_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    #[serde(default)]
    pub keywords: Vec<String>,
}

impl PersonalInfo {
    /// Name-like fields in extraction order
    pub fn name_fields(&self) -> [Option<&str>; 9] {
        [
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            self.nickname.as_deref(),
            self.partner_name.as_deref(),
            self.partner_nickname.as_deref(),
            self.child_name.as_deref(),
            self.child_nickname.as_deref(),
            self.pet_name.as_deref(),
            self.company_name.as_deref(),
        ]
    }

    /// Self, partner and child birth dates, in that order
    pub fn birth_dates(&self) -> [Option<&str>; 3] {
        [
            self.birth_date.as_deref(),
            self.partner_birth_date.as_deref(),
            self.child_birth_date.as_deref(),
        ]
    }

    pub(crate) fn birth_dates_mut(&mut self) -> [(&'static str, &mut Option<String>); 3] {
        [
            ("birth_date", &mut self.birth_date),
            ("partner_birth_date", &mut self.partner_birth_date),
            ("child_birth_date", &mut self.child_birth_date),
        ]
    }
}

/// Contact details and interests gathered during reconnaissance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReconInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,

    #[serde(default)]
    pub hobbies: Vec<String>,
    #[serde(default)]
    pub favorite_teams: Vec<String>,
    #[serde(default)]
    pub favorite_movies: Vec<String>,
    #[serde(default)]
    pub favorite_books: Vec<String>,
    #[serde(default)]
    pub favorite_games: Vec<String>,
}

impl ReconInfo {
    /// All interest lists chained in extraction order
    pub fn interests(&self) -> impl Iterator<Item = &String> {
        self.hobbies.iter()
            .chain(self.favorite_teams.iter())
            .chain(self.favorite_movies.iter())
            .chain(self.favorite_books.iter())
            .chain(self.favorite_games.iter())
    }
}

impl TargetProfile {
    /// Profile with only a first name, the single required fact
    pub fn with_first_name(first_name: &str) -> Self {
        Self {
            personal_info: PersonalInfo {
                first_name: Some(first_name.to_string()),
                ..PersonalInfo::default()
            },
            ..Self::default()
        }
    }

    /// Display name for log lines
    pub fn display_name(&self) -> String {
        let info = &self.personal_info;
        [info.first_name.as_deref(), info.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Split a comma-separated answer into trimmed, non-empty entries
pub fn split_list(input: &str) -> Vec<String> {
    input.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
