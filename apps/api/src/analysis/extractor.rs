//! Skill Extractor: case-insensitive substring matching of a JD against the taxonomy.
//!
//! There is no tokenization: "Go" matches inside "Google", "Java" inside "JavaScript".
//! This is keyword presence, not language understanding.

use crate::analysis::taxonomy::{SkillMap, SkillTaxonomy};

/// Scans `text` against every taxonomy keyword.
///
/// If anything matches, every category is present in the result (empty when it had
/// no hits) so consumers see a stable schema. If nothing matches, the result is
/// exactly the `General` placeholder map.
pub fn extract_skills(taxonomy: &SkillTaxonomy, text: &str) -> SkillMap {
    let text_lower = text.to_lowercase();
    let mut skills = SkillMap::default();
    let mut total_found = 0usize;

    for category in taxonomy.categories() {
        let matches: Vec<String> = category
            .keywords
            .iter()
            .filter(|keyword| text_lower.contains(&keyword.to_lowercase()))
            .map(|keyword| keyword.to_string())
            .collect();
        total_found += matches.len();
        skills.insert(category.name, matches);
    }

    if total_found == 0 {
        return SkillMap::general();
    }

    skills
}
