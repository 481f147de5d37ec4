use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::taxonomy::SkillMap;

/// The user's self-assessment of a detected skill.
///
/// A skill missing from a record's confidence map is read as `Unconfirmed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillConfidence {
    Know,
    Practice,
    #[default]
    Unconfirmed,
}

/// Coarse reading of a readiness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Strong,
    Moderate,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 80 => ScoreBand::Strong,
            s if s >= 60 => ScoreBand::Moderate,
            _ => ScoreBand::Low,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub base: i32,
    pub per_category: i32,
    pub category_cap: i32,
    pub company_bonus: i32,
    pub role_bonus: i32,
    pub long_jd_bonus: i32,
    /// JD length (in characters) that must be exceeded to earn `long_jd_bonus`.
    pub long_jd_chars: usize,
    pub know_delta: i32,
    pub practice_delta: i32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            base: 35,
            per_category: 5,
            category_cap: 30,
            company_bonus: 10,
            role_bonus: 10,
            long_jd_bonus: 10,
            long_jd_chars: 800,
            know_delta: 2,
            practice_delta: -2,
        }
    }
}

impl ScoringWeights {
    fn confidence_delta(&self, confidence: SkillConfidence) -> i32 {
        match confidence {
            SkillConfidence::Know => self.know_delta,
            SkillConfidence::Practice => self.practice_delta,
            SkillConfidence::Unconfirmed => 0,
        }
    }
}

/// Initial readiness score from extraction coverage and metadata signals:
/// 35 + min(30, 5 × matched categories) + 10 company + 10 role + 10 long JD, clamped to 0–100.
pub fn compute_base_score(
    jd_text: &str,
    skills: &SkillMap,
    company: &str,
    role: &str,
    weights: &ScoringWeights,
) -> u8 {
    let categories = skills.matched_category_count() as i32;
    let mut score = weights.base;
    score += (weights.per_category * categories).min(weights.category_cap);

    if is_meaningful(company) {
        score += weights.company_bonus;
    }
    if is_meaningful(role) {
        score += weights.role_bonus;
    }
    if jd_text.chars().count() > weights.long_jd_chars {
        score += weights.long_jd_bonus;
    }

    clamp_score(score)
}

/// Live score: the base score plus ±2 per confirmed skill.
///
/// Always a full fold from `base_score`, so toggling a skill from know to practice
/// moves the score by the difference from baseline, not from the previous value.
pub fn compute_live_score(
    base_score: u8,
    confidence: &BTreeMap<String, SkillConfidence>,
    weights: &ScoringWeights,
) -> u8 {
    let adjustment: i32 = confidence
        .values()
        .map(|c| weights.confidence_delta(*c))
        .sum();
    clamp_score(i32::from(base_score) + adjustment)
}

fn is_meaningful(field: &str) -> bool {
    field.trim().chars().count() > 1
}

fn clamp_score(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}
