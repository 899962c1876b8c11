use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use crate::profile::TargetProfile;
use super::options::GenerationOptions;

/// Outcome of one generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Length-filtered candidates in ascending order
    pub passwords: Vec<String>,
    pub count: usize,
    pub total_before_filter: usize,
    pub base_words_count: usize,
    pub options: GenerationOptions,
    pub target_profile: TargetProfile,
    pub generated_at: DateTime<Utc>,
}

/// Length distribution of the final candidates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthStats {
    pub min: usize,
    pub max: usize,
    pub average: f64,
}

impl GenerationResult {
    pub fn length_stats(&self) -> Option<LengthStats> {
        if self.passwords.is_empty() {
            return None;
        }

        let lengths: Vec<usize> = self.passwords.iter().map(|p| p.chars().count()).collect();
        let min = *lengths.iter().min()?;
        let max = *lengths.iter().max()?;
        let average = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;

        Some(LengthStats { min, max, average })
    }
}
