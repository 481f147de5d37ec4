//! Interview question generation: fixed openers, skill-triggered questions, generic padding.

use crate::analysis::taxonomy::SkillMap;

pub const QUESTION_COUNT: usize = 10;

/// A skill-triggered question. Fires when any matched label contains one of
/// `triggers` (case-sensitive).
#[derive(Debug, Clone, Copy)]
pub struct QuestionRule {
    pub triggers: &'static [&'static str],
    pub question: &'static str,
}

/// Static question configuration, injected into the generator.
#[derive(Debug, Clone, Copy)]
pub struct QuestionBank {
    pub openers: &'static [&'static str],
    pub rules: &'static [QuestionRule],
    /// Cycled by `len % pool.len()` until the list is full. Must not be empty.
    pub fallback_pool: &'static [&'static str],
}

const OPENERS: &[&str] = &[
    "Tell me about yourself and why you want this role?",
    "Explain one challenging bug you fixed recently.",
];

const RULES: &[QuestionRule] = &[
    QuestionRule {
        triggers: &["React"],
        question: "Explain the Virtual DOM and React Lifecycle methods.",
    },
    QuestionRule {
        triggers: &["Node"],
        question: "How does Node.js handle concurrency? Explain the Event Loop.",
    },
    QuestionRule {
        triggers: &["SQL", "Data"],
        question: "Explain Indexing in databases. What is the difference between Clustered and Non-Clustered index?",
    },
    QuestionRule {
        triggers: &["Java"],
        question: "Explain memory management in Java and how Garbage Collection works.",
    },
    QuestionRule {
        triggers: &["Python"],
        question: "What are decorators and generators in Python?",
    },
    QuestionRule {
        triggers: &["AWS", "Cloud"],
        question: "What is the difference between Vertical and Horizontal Scaling?",
    },
    QuestionRule {
        triggers: &["Rest"],
        question: "What are the key principles of REST API design?",
    },
];

const FALLBACK_POOL: &[&str] = &[
    "Explain the difference between Process and Thread.",
    "What happens when you type a URL in the browser?",
    "Explain different types of Joins in SQL.",
    "How would you design a URL shortening service?",
];

impl QuestionBank {
    pub const fn reference() -> Self {
        Self {
            openers: OPENERS,
            rules: RULES,
            fallback_pool: FALLBACK_POOL,
        }
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::reference()
    }
}

/// Returns exactly `QUESTION_COUNT` questions, openers first.
pub fn build_questions(bank: &QuestionBank, skills: &SkillMap) -> Vec<String> {
    let mut questions: Vec<String> = bank.openers.iter().map(|q| q.to_string()).collect();
    let flat: Vec<&str> = skills.flattened().collect();

    for rule in bank.rules {
        let fires = flat
            .iter()
            .any(|skill| rule.triggers.iter().any(|t| skill.contains(t)));
        if fires {
            questions.push(rule.question.to_string());
        }
    }

    if !bank.fallback_pool.is_empty() {
        while questions.len() < QUESTION_COUNT {
            let next = bank.fallback_pool[questions.len() % bank.fallback_pool.len()];
            questions.push(next.to_string());
        }
    }

    questions.truncate(QUESTION_COUNT);
    questions
}
