//! 7-day preparation plan. Only Day 3 adapts to the detected stack.

use serde::{Deserialize, Serialize};

use crate::analysis::taxonomy::{SkillMap, AI_ML, DATA, WEB};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDay {
    pub day: String,
    pub title: String,
    pub tasks: Vec<String>,
}

const MAX_STACK_TASKS: usize = 3;

const STACK_BASE_TASKS: &[&str] = &["Practice Advanced DSA (Graph, DP)", "System Design Basics"];

/// Category → extra Day 3 task, in the order they are appended.
const STACK_CONDITIONAL_TASKS: &[(&str, &str)] = &[
    (WEB, "Build a small feature using the detected stack (React/Node)"),
    (DATA, "Practice complex SQL queries"),
    (AI_ML, "Review ML Algorithms"),
];

fn day(number: u8, title: &str, tasks: &[&str]) -> PlanDay {
    PlanDay {
        day: format!("Day {number}"),
        title: title.to_string(),
        tasks: tasks.iter().map(|t| t.to_string()).collect(),
    }
}

/// Builds the plan. Always exactly seven entries, "Day 1" through "Day 7".
pub fn build_plan(skills: &SkillMap) -> Vec<PlanDay> {
    let mut stack_tasks: Vec<&str> = STACK_BASE_TASKS.to_vec();
    stack_tasks.extend(
        STACK_CONDITIONAL_TASKS
            .iter()
            .filter(|(category, _)| skills.has_skills_in(category))
            .map(|(_, task)| *task),
    );
    stack_tasks.truncate(MAX_STACK_TASKS);

    vec![
        day(
            1,
            "Strong Foundations",
            &[
                "Revise Aptitude (Quant, Logical)",
                "Practice Basic Coding Problems",
                "Review OOP Concepts",
            ],
        ),
        day(
            2,
            "Core CS Concepts",
            &[
                "Deep dive into DBMS & OS",
                "Review Computer Networks basics",
                "Solve 5 Medium DSA Problems",
            ],
        ),
        day(3, "Advanced Coding & Stack", &stack_tasks),
        day(
            4,
            "Problem Solving Marathon",
            &[
                "Solve 3 Hard LeetCode style problems",
                "Optimize previous solutions",
                "Mock Coding Test (1 hour)",
            ],
        ),
        day(
            5,
            "Project & Resume",
            &[
                "Align Resume with JD keywords",
                "Prepare 'Tell me about yourself'",
                "Deep dive into 1 major project",
            ],
        ),
        day(
            6,
            "Mock Interviews",
            &[
                "Peer Mock Interview",
                "Behavioral Questions Prep (STAR Method)",
                "Revisit weak technical areas",
            ],
        ),
        day(
            7,
            "Final Revision",
            &[
                "Review saved notes",
                "Light revision of formulas/syntax",
                "Rest and mindset prep",
            ],
        ),
    ]
}
