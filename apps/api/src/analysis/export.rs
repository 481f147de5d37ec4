//! Plain-text renderings of a report, for pasting into notes or chat.

use serde::Deserialize;

use crate::analysis::plan::PlanDay;
use crate::analysis::rounds::InterviewRound;
use crate::models::analysis::AnalysisRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportSection {
    Plan,
    Rounds,
    Questions,
    #[default]
    All,
}

pub fn render_plan(plan: &[PlanDay]) -> String {
    let mut out = String::new();
    for day in plan {
        out.push_str(&format!("{}: {}\n", day.day, day.title));
        for task in &day.tasks {
            out.push_str(&format!("- {task}\n"));
        }
        out.push('\n');
    }
    out
}

pub fn render_rounds(rounds: &[InterviewRound]) -> String {
    let mut out = String::new();
    for round in rounds {
        out.push_str(&format!("{}\n", round.title));
        for detail in &round.details {
            out.push_str(&format!("- {detail}\n"));
        }
        out.push_str(&format!("Why: {}\n\n", round.why));
    }
    out
}

pub fn render_questions(questions: &[String]) -> String {
    questions
        .iter()
        .enumerate()
        .map(|(i, q)| format!("{}. {q}\n", i + 1))
        .collect()
}

pub fn render_record(record: &AnalysisRecord, section: ExportSection) -> String {
    match section {
        ExportSection::Plan => render_plan(&record.plan),
        ExportSection::Rounds => render_rounds(&record.smart_rounds),
        ExportSection::Questions => render_questions(&record.questions),
        ExportSection::All => {
            let heading = match (record.role.trim(), record.company_intel.name.as_str()) {
                ("", company) => format!("Readiness report: {company}"),
                (role, company) => format!("Readiness report: {role} at {company}"),
            };
            format!(
                "{heading}\nReadiness score: {}/100\n\n## 7-Day Plan\n\n{}## Interview Rounds\n\n{}## Questions\n\n{}",
                record.readiness_score,
                render_plan(&record.plan),
                render_rounds(&record.smart_rounds),
                render_questions(&record.questions),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::engine::Analyzer;

    #[test]
    fn test_render_plan_lists_days_and_tasks() {
        let record = Analyzer::default().analyze("React", None, None);
        let text = render_plan(&record.plan);
        assert!(text.starts_with("Day 1: Strong Foundations\n- Revise Aptitude (Quant, Logical)\n"));
        assert!(text.contains("Day 7: Final Revision"));
    }

    #[test]
    fn test_render_questions_numbers_from_one() {
        let text = render_questions(&["A?".to_string(), "B?".to_string()]);
        assert_eq!(text, "1. A?\n2. B?\n");
    }

    #[test]
    fn test_render_rounds_includes_rationale() {
        let record = Analyzer::default().analyze("React", Some("Google"), None);
        let text = render_rounds(&record.smart_rounds);
        assert!(text.contains("Round 4: Managerial & HR"));
        assert!(text.contains("Why: To ensure you fit the team culture."));
    }

    #[test]
    fn test_render_all_has_every_section() {
        let record = Analyzer::default().analyze("Python", Some("Acme"), Some("Data Engineer"));
        let text = render_record(&record, ExportSection::All);
        assert!(text.starts_with("Readiness report: Data Engineer at Acme\n"));
        assert!(text.contains("## 7-Day Plan"));
        assert!(text.contains("## Interview Rounds"));
        assert!(text.contains("10. "));
    }

    #[test]
    fn test_export_section_defaults_to_all() {
        assert_eq!(ExportSection::default(), ExportSection::All);
    }
}
