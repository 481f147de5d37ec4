//! Skill Taxonomy: the fixed category → keyword dictionary a JD is matched against,
//! plus the `SkillMap` produced by matching.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Synthetic category used when no taxonomy keyword is found in the JD.
pub const GENERAL_CATEGORY: &str = "General";
pub const GENERAL_PLACEHOLDER: &str =
    "General Freshers Stack (Aptitude, Basic Coding, Communication)";

pub const CORE_CS: &str = "Core CS";
pub const LANGUAGES: &str = "Languages";
pub const WEB: &str = "Web";
pub const DATA: &str = "Data";
pub const CLOUD_DEVOPS: &str = "Cloud/DevOps";
pub const TESTING: &str = "Testing";
pub const AI_ML: &str = "AI/ML";

/// One category of the taxonomy. Keyword order is significant: matches are
/// reported in this order, not in the order they appear in the JD.
#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// Immutable category → keyword configuration, injected into the extractor.
#[derive(Debug, Clone, Copy)]
pub struct SkillTaxonomy {
    categories: &'static [SkillCategory],
}

const REFERENCE_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: CORE_CS,
        keywords: &[
            "DSA",
            "Data Structures",
            "Algorithms",
            "OOP",
            "Object Oriented Programming",
            "DBMS",
            "Database Management",
            "OS",
            "Operating Systems",
            "Computer Networks",
            "System Design",
            "Low Level Design",
            "High Level Design",
        ],
    },
    SkillCategory {
        name: LANGUAGES,
        keywords: &[
            "Java",
            "Python",
            "JavaScript",
            "TypeScript",
            "C++",
            "C#",
            "Go",
            "Rust",
            "Swift",
            "Kotlin",
            "PHP",
            "Ruby",
        ],
    },
    SkillCategory {
        name: WEB,
        keywords: &[
            "React",
            "React.js",
            "Next.js",
            "Node.js",
            "Express",
            "Vue",
            "Angular",
            "HTML",
            "CSS",
            "Tailwind",
            "Bootstrap",
            "Redux",
            "GraphQL",
            "REST API",
        ],
    },
    SkillCategory {
        name: DATA,
        keywords: &[
            "SQL",
            "MySQL",
            "PostgreSQL",
            "MongoDB",
            "Redis",
            "NoSQL",
            "Data Modeling",
            "Big Data",
            "Spark",
            "Hadoop",
        ],
    },
    SkillCategory {
        name: CLOUD_DEVOPS,
        keywords: &[
            "AWS",
            "Azure",
            "GCP",
            "Docker",
            "Kubernetes",
            "CI/CD",
            "Jenkins",
            "Git",
            "Linux",
            "Bash",
            "Shell Scripting",
            "Terraform",
            "Ansible",
        ],
    },
    SkillCategory {
        name: TESTING,
        keywords: &[
            "Selenium",
            "Cypress",
            "Playwright",
            "Jest",
            "Mocha",
            "JUnit",
            "PyTest",
            "TestNG",
        ],
    },
    SkillCategory {
        name: AI_ML,
        keywords: &[
            "Machine Learning",
            "Deep Learning",
            "TensorFlow",
            "PyTorch",
            "NLP",
            "Computer Vision",
            "Data Science",
            "Pandas",
            "NumPy",
        ],
    },
];

impl SkillTaxonomy {
    pub const fn new(categories: &'static [SkillCategory]) -> Self {
        Self { categories }
    }

    /// The seven-category dictionary the analyzer ships with.
    pub const fn reference() -> Self {
        Self::new(REFERENCE_CATEGORIES)
    }

    pub fn categories(&self) -> &'static [SkillCategory] {
        self.categories
    }
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        Self::reference()
    }
}

/// Ordered category → matched keyword labels.
///
/// Either every taxonomy category is present (some possibly empty), or the map
/// holds only the `General` placeholder. Key order survives serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillMap(IndexMap<String, Vec<String>>);

impl SkillMap {
    /// The fallback map for a JD with no recognised keywords.
    pub fn general() -> Self {
        let mut map = IndexMap::new();
        map.insert(
            GENERAL_CATEGORY.to_string(),
            vec![GENERAL_PLACEHOLDER.to_string()],
        );
        Self(map)
    }

    pub fn insert(&mut self, category: impl Into<String>, skills: Vec<String>) {
        self.0.insert(category.into(), skills);
    }

    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.0.get(category).map(Vec::as_slice)
    }

    /// True if `category` is present with at least one match.
    pub fn has_skills_in(&self, category: &str) -> bool {
        self.get(category).is_some_and(|skills| !skills.is_empty())
    }

    #[cfg(test)]
    pub fn is_general(&self) -> bool {
        self.0.len() == 1 && self.0.contains_key(GENERAL_CATEGORY)
    }

    /// Number of real (non-`General`) categories with at least one match.
    pub fn matched_category_count(&self) -> usize {
        self.0
            .iter()
            .filter(|(category, skills)| category.as_str() != GENERAL_CATEGORY && !skills.is_empty())
            .count()
    }

    /// All labels, category by category, in map order.
    pub fn flattened(&self) -> impl Iterator<Item = &str> {
        self.0.values().flatten().map(String::as_str)
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(category, skills)| (category.as_str(), skills.as_slice()))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_taxonomy_category_order() {
        let names: Vec<&str> = SkillTaxonomy::reference()
            .categories()
            .iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(
            names,
            vec![CORE_CS, LANGUAGES, WEB, DATA, CLOUD_DEVOPS, TESTING, AI_ML]
        );
    }

    #[test]
    fn test_general_map_shape() {
        let map = SkillMap::general();
        assert!(map.is_general());
        assert_eq!(map.len(), 1);
        assert_eq!(map.matched_category_count(), 0);
        assert_eq!(map.flattened().collect::<Vec<_>>(), vec![GENERAL_PLACEHOLDER]);
    }

    #[test]
    fn test_skill_map_serializes_in_insertion_order() {
        let mut map = SkillMap::default();
        map.insert("Web", vec!["React".to_string()]);
        map.insert("Core CS", vec![]);
        map.insert("AI/ML", vec!["NLP".to_string()]);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"Web":["React"],"Core CS":[],"AI/ML":["NLP"]}"#);

        let back: SkillMap = serde_json::from_str(&json).unwrap();
        let order: Vec<&str> = back.iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec!["Web", "Core CS", "AI/ML"]);
    }

    #[test]
    fn test_matched_category_count_ignores_general_and_empty() {
        let mut map = SkillMap::default();
        map.insert("Web", vec!["React".to_string()]);
        map.insert("Data", vec![]);
        map.insert(GENERAL_CATEGORY, vec![GENERAL_PLACEHOLDER.to_string()]);
        assert_eq!(map.matched_category_count(), 1);
        assert!(map.has_skills_in("Web"));
        assert!(!map.has_skills_in("Data"));
        assert!(!map.has_skills_in("Testing"));
    }
}
