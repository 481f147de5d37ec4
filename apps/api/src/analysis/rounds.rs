//! Round Mapper: tier-specific interview rounds, personalised with the top detected skill.

use serde::{Deserialize, Serialize};

use crate::analysis::company_intel::CompanyIntel;
use crate::analysis::taxonomy::SkillMap;

const FALLBACK_PRIMARY_SKILL: &str = "Coding";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewRound {
    pub title: String,
    pub details: Vec<String>,
    pub why: String,
}

fn round(title: &str, details: Vec<String>, why: &str) -> InterviewRound {
    InterviewRound {
        title: title.to_string(),
        details,
        why: why.to_string(),
    }
}

fn owned(details: &[&str]) -> Vec<String> {
    details.iter().map(|d| d.to_string()).collect()
}

/// First label of the first non-empty category, or "Coding".
pub fn primary_skill(skills: &SkillMap) -> &str {
    skills.flattened().next().unwrap_or(FALLBACK_PRIMARY_SKILL)
}

/// Four rounds for enterprise-tier companies, three otherwise.
pub fn map_rounds(intel: &CompanyIntel, skills: &SkillMap) -> Vec<InterviewRound> {
    let skill = primary_skill(skills);

    if intel.is_enterprise() {
        vec![
            round(
                "Round 1: Screening & Aptitude",
                owned(&[
                    "Online Coding Test (2-3 DSA Medium)",
                    "Quantitative Aptitude",
                    "Verbal Ability",
                ]),
                "To filter thousands of applicants efficiently.",
            ),
            round(
                "Round 2: Technical Deep Dive (DSA)",
                owned(&[
                    "Data Structures (Trees, Graphs, DP)",
                    "Algorithms complexity analysis",
                    "Core CS (OS, DBMS)",
                ]),
                "To test your foundational problem-solving skills.",
            ),
            round(
                "Round 3: Advanced Technical / System Design",
                vec![
                    "System Design (HLD/LLD)".to_string(),
                    format!("In-depth {skill} questions"),
                    "Project discussion".to_string(),
                ],
                "To see if you can build scalable systems.",
            ),
            round(
                "Round 4: Managerial & HR",
                owned(&[
                    "Behavioral questions (STAR method)",
                    "Cultural fit check",
                    "Salary negotiation",
                ]),
                "To ensure you fit the team culture.",
            ),
        ]
    } else {
        vec![
            round(
                "Round 1: Practical Screening",
                owned(&[
                    "Take-home assignment",
                    "Live pair programming",
                    "Basic problem solving",
                ]),
                "To prove you can actually write code.",
            ),
            round(
                "Round 2: Tech Stack Deep Dive",
                vec![
                    format!("In-depth {skill} implementation"),
                    "Code review / Debugging".to_string(),
                    "Architecture discussion".to_string(),
                ],
                "To verify your expertise in their specific stack.",
            ),
            round(
                "Round 3: Founder / Culture Fit",
                owned(&[
                    "Product thinking",
                    "Ownership & Agility",
                    "Vision alignment",
                ]),
                "To see if you have the 'startup mindset'.",
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::company_intel::{classify_company, CompanyRegistry};
    use crate::analysis::taxonomy::GENERAL_PLACEHOLDER;

    fn intel(company: &str) -> CompanyIntel {
        classify_company(&CompanyRegistry::reference(), company)
    }

    fn skills() -> SkillMap {
        let mut map = SkillMap::default();
        map.insert("Core CS", vec![]);
        map.insert("Languages", vec!["Python".to_string(), "Go".to_string()]);
        map.insert("Web", vec!["React".to_string()]);
        map
    }

    #[test]
    fn test_enterprise_gets_four_rounds() {
        let rounds = map_rounds(&intel("Google"), &skills());
        assert_eq!(rounds.len(), 4);
        assert!(rounds[2].details.contains(&"In-depth Python questions".to_string()));
        assert!(rounds[0].title.starts_with("Round 1:"));
    }

    #[test]
    fn test_startup_gets_three_rounds() {
        let rounds = map_rounds(&intel("Tiny Robots"), &skills());
        assert_eq!(rounds.len(), 3);
        assert_eq!(rounds[1].details[0], "In-depth Python implementation");
        assert_eq!(rounds[2].why, "To see if you have the 'startup mindset'.");
    }

    #[test]
    fn test_primary_skill_skips_empty_categories() {
        assert_eq!(primary_skill(&skills()), "Python");
    }

    #[test]
    fn test_primary_skill_falls_back_to_coding() {
        assert_eq!(primary_skill(&SkillMap::default()), "Coding");
    }

    #[test]
    fn test_general_map_uses_placeholder_as_primary_skill() {
        assert_eq!(primary_skill(&SkillMap::general()), GENERAL_PLACEHOLDER);
    }
}
