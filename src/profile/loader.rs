// src/profile/loader.rs - Target document loading functionality
use std::collections::BTreeMap;
use std::path::Path;
use serde::{Serialize, Deserialize};
use tracing::{debug, warn};

use crate::error::{WordforgeError, WordforgeResult};
use crate::generator::GenerationOptions;
use crate::utils::validate_date_format;
use super::{TargetProfile, PersonalInfo, ReconInfo};

/// Batch document: a target profile plus the options to generate with
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetDocument {
    #[serde(flatten)]
    pub profile: TargetProfile,

    #[serde(default)]
    pub options: GenerationOptions,
}

impl TargetDocument {
    /// Load a document from a JSON or TOML file, chosen by extension
    pub fn load(path: &Path) -> WordforgeResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| WordforgeError::FileError {
                path: path.to_path_buf(),
                message: format!("Could not load config file: {}", e),
            })?;

        let mut document: TargetDocument = match extension_of(path).as_deref() {
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| WordforgeError::SerializationError(
                    format!("Invalid JSON in config file {}: {}", path.display(), e)
                ))?,
            Some("toml") => toml::from_str(&content)
                .map_err(|e| WordforgeError::SerializationError(
                    format!("Invalid TOML in config file {}: {}", path.display(), e)
                ))?,
            _ => return Err(WordforgeError::UnsupportedFormat(
                format!("Unsupported config file format: {}", path.display())
            )),
        };

        document.normalize_dates();
        debug!("Loaded target document from {}", path.display());
        Ok(document)
    }

    /// Save the document, serializing by extension
    pub fn save(&self, path: &Path) -> WordforgeResult<()> {
        let content = match extension_of(path).as_deref() {
            Some("json") => serde_json::to_string_pretty(self)
                .map_err(|e| WordforgeError::SerializationError(e.to_string()))?,
            Some("toml") => toml::to_string_pretty(self)
                .map_err(|e| WordforgeError::SerializationError(e.to_string()))?,
            _ => return Err(WordforgeError::UnsupportedFormat(
                format!("Unsupported config file format: {}", path.display())
            )),
        };

        std::fs::write(path, content)
            .map_err(|e| WordforgeError::FileError {
                path: path.to_path_buf(),
                message: format!("Failed to write config file: {}", e),
            })?;

        debug!("Saved target document to {}", path.display());
        Ok(())
    }

    /// Trim birth dates and drop the ones that are not real DDMMYYYY dates
    pub fn normalize_dates(&mut self) {
        for (field, value) in self.profile.personal_info.birth_dates_mut() {
            let Some(raw) = value.take() else { continue };
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }
            if validate_date_format(trimmed) {
                *value = Some(trimmed.to_string());
            } else {
                warn!("Ignoring {} '{}': expected a valid DDMMYYYY date", field, raw);
            }
        }
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

fn owned(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn owned_list(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Example batch document for `--config`
pub fn sample_document() -> TargetDocument {
    let social_media: BTreeMap<String, Option<String>> = [
        ("instagram", "john_doe_90"),
        ("facebook", "john.doe.90"),
        ("twitter", "johndoe"),
        ("linkedin", "john-doe-security"),
        ("github", "johndoe90"),
        ("tiktok", ""),
        ("youtube", ""),
        ("reddit", "johnny90"),
        ("discord", "johndoe#1234"),
        ("telegram", "johndoe90"),
    ]
    .into_iter()
    .map(|(platform, handle)| (platform.to_string(), owned(handle)))
    .collect();

    TargetDocument {
        profile: TargetProfile {
            personal_info: PersonalInfo {
                first_name: owned("john"),
                last_name: owned("doe"),
                nickname: owned("johnny"),
                birth_date: owned("15061990"),
                partner_name: owned("jane"),
                partner_nickname: owned(""),
                partner_birth_date: owned(""),
                child_name: owned(""),
                child_nickname: owned(""),
                child_birth_date: owned(""),
                pet_name: owned("buddy"),
                company_name: owned("techcorp"),
                keywords: owned_list(&["hacker", "security", "crypto"]),
            },
            social_media,
            recon_info: ReconInfo {
                email: owned("john.doe@email.com"),
                phone_number: owned("+1234567890"),
                address: owned("New York"),
                university: owned("MIT"),
                hobbies: owned_list(&["gaming", "coding", "cybersecurity"]),
                favorite_teams: owned_list(&["Yankees", "Lakers"]),
                favorite_movies: owned_list(&["Matrix", "Hackers"]),
                favorite_books: owned_list(&["1984", "Neuromancer"]),
                favorite_games: owned_list(&["Counter-Strike", "Minecraft"]),
            },
        },
        options: GenerationOptions::default(),
    }
}
