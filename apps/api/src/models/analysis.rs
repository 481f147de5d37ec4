use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::company_intel::CompanyIntel;
use crate::analysis::plan::PlanDay;
use crate::analysis::rounds::InterviewRound;
use crate::analysis::scoring::SkillConfidence;
use crate::analysis::taxonomy::SkillMap;

/// One persisted readiness report.
///
/// Field names are camelCase on the wire: the persisted history slot is shared with
/// earlier clients and its shape must not drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub jd_text: String,
    pub extracted_skills: SkillMap,
    pub plan: Vec<PlanDay>,
    pub questions: Vec<String>,
    pub company_intel: CompanyIntel,
    pub smart_rounds: Vec<InterviewRound>,
    pub base_score: u8,
    pub readiness_score: u8,
    #[serde(default)]
    pub skill_confidence_map: BTreeMap<String, SkillConfidence>,
}

impl AnalysisRecord {
    /// Confidence for `skill`; skills never toggled are `Unconfirmed`.
    #[cfg(test)]
    pub fn confidence_for(&self, skill: &str) -> SkillConfidence {
        self.skill_confidence_map
            .get(skill)
            .copied()
            .unwrap_or_default()
    }

    /// Merges the present fields of `update` and stamps `updated_at`.
    pub fn apply(&mut self, update: RecordUpdate, now: DateTime<Utc>) {
        if let Some(score) = update.readiness_score {
            self.readiness_score = score;
        }
        if let Some(map) = update.skill_confidence_map {
            self.skill_confidence_map = map;
        }
        self.updated_at = now;
    }
}

/// Partial update of a stored record. Only the mutable fields are expressible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readiness_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_confidence_map: Option<BTreeMap<String, SkillConfidence>>,
}
