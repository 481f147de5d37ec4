//! Analyzer: runs the full pipeline over a JD and assembles an `AnalysisRecord`,
//! and applies skill-confidence toggles to stored records.

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::company_intel::{classify_company, CompanyRegistry};
use crate::analysis::extractor::extract_skills;
use crate::analysis::plan::build_plan;
use crate::analysis::questions::{build_questions, QuestionBank};
use crate::analysis::rounds::map_rounds;
use crate::analysis::scoring::{
    compute_base_score, compute_live_score, ScoringWeights, SkillConfidence,
};
use crate::analysis::taxonomy::SkillTaxonomy;
use crate::models::analysis::{AnalysisRecord, RecordUpdate};
use crate::store::AnalysisStore;

/// The analysis engine. Holds only immutable configuration, so one instance can be
/// shared freely.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    pub taxonomy: SkillTaxonomy,
    pub registry: CompanyRegistry,
    pub questions: QuestionBank,
    pub weights: ScoringWeights,
}

impl Analyzer {
    /// Builds a fresh record from a JD. Pure apart from id and timestamp generation;
    /// nothing is persisted.
    pub fn analyze(&self, jd_text: &str, company: Option<&str>, role: Option<&str>) -> AnalysisRecord {
        let company = company.unwrap_or_default();
        let role = role.unwrap_or_default();

        let skills = extract_skills(&self.taxonomy, jd_text);
        let base_score = compute_base_score(jd_text, &skills, company, role, &self.weights);
        let plan = build_plan(&skills);
        let questions = build_questions(&self.questions, &skills);
        let company_intel = classify_company(&self.registry, company);
        let smart_rounds = map_rounds(&company_intel, &skills);

        debug!(
            "Analyzed JD ({} chars): {} categories matched, base score {base_score}, tier {}",
            jd_text.chars().count(),
            skills.matched_category_count(),
            company_intel.size
        );

        let now = Utc::now();
        AnalysisRecord {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            company: company.to_string(),
            role: role.to_string(),
            jd_text: jd_text.to_string(),
            extracted_skills: skills,
            plan,
            questions,
            company_intel,
            smart_rounds,
            base_score,
            readiness_score: base_score,
            skill_confidence_map: Default::default(),
        }
    }

    /// Records the user's confidence in one skill and writes the recomputed live
    /// score through to the store. Every call is a full read-modify-write.
    ///
    /// Returns `None` if the record is unknown or the write fails.
    pub fn set_skill_confidence(
        &self,
        store: &AnalysisStore,
        id: Uuid,
        skill: &str,
        confidence: SkillConfidence,
    ) -> Option<AnalysisRecord> {
        let record = store.get_by_id(id)?;

        let mut confidence_map = record.skill_confidence_map;
        confidence_map.insert(skill.to_string(), confidence);
        let readiness_score = compute_live_score(record.base_score, &confidence_map, &self.weights);

        let updated = store.update(
            id,
            RecordUpdate {
                readiness_score: Some(readiness_score),
                skill_confidence_map: Some(confidence_map),
            },
        )?;

        info!("Analysis {id}: '{skill}' marked {confidence:?}, readiness {readiness_score}");
        Some(updated)
    }
}
