use super::scoring::ResultsRecord;
use chrono::NaiveDate;
use serde::Serialize;

/// Gap between a role requirement and the candidate's current standing.
/// `current` and `gap` are signed: one row derives from technical readiness
/// minus ten, which can dip below zero for weak technical scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillGapEntry {
    pub skill: &'static str,
    pub required: i16,
    pub current: i16,
    pub gap: i16,
}

impl SkillGapEntry {
    pub fn is_met(&self) -> bool {
        self.gap <= 0
    }
}

/// A role from the career catalog matched against one of the derived scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareerMatchEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub match_score: u8,
}

/// Display model for the results page: skills-gap rows, career matches, and
/// recommendation guidance, all derived from a single results record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadinessReport {
    pub skill_gaps: Vec<SkillGapEntry>,
    pub career_matches: Vec<CareerMatchEntry>,
    pub next_steps: Vec<&'static str>,
    pub generated_on: NaiveDate,
}

impl ReadinessReport {
    pub fn generate(results: &ResultsRecord, generated_on: NaiveDate) -> Self {
        Self {
            skill_gaps: skill_gaps(results),
            career_matches: career_matches(results),
            next_steps: results.recommendation.next_steps().to_vec(),
            generated_on,
        }
    }
}

fn gap_entry(skill: &'static str, required: i16, current: i16) -> SkillGapEntry {
    SkillGapEntry {
        skill,
        required,
        current,
        gap: required - current,
    }
}

fn skill_gaps(results: &ResultsRecord) -> Vec<SkillGapEntry> {
    let technical = results.technical_readiness as i16;
    vec![
        gap_entry("Excel for Planning", 85, technical),
        gap_entry("Forecast Models", 80, technical - 10),
        gap_entry("Trend Analysis", 75, results.wiscar.cognitive as i16),
        gap_entry(
            "Communication",
            80,
            results.wiscar.real_world_alignment as i16,
        ),
        gap_entry("Business Acumen", 70, results.wiscar.will as i16),
    ]
}

fn career_matches(results: &ResultsRecord) -> Vec<CareerMatchEntry> {
    vec![
        CareerMatchEntry {
            title: "Demand Planner",
            description: "Projects future demand across categories",
            match_score: results.overall_score,
        },
        CareerMatchEntry {
            title: "Forecast Analyst",
            description: "Uses models for predictions",
            match_score: results.technical_readiness,
        },
        CareerMatchEntry {
            title: "Inventory Optimization Specialist",
            description: "Ensures product availability",
            match_score: results.wiscar.cognitive,
        },
        CareerMatchEntry {
            title: "Supply Planner",
            description: "Balances supply based on demand",
            match_score: results.wiscar.real_world_alignment,
        },
        CareerMatchEntry {
            title: "S&OP Coordinator",
            description: "Bridges planning between teams",
            match_score: results.wiscar.will,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::answers::AnswerSet;
    use crate::assessment::catalog::AssessmentCatalog;
    use crate::assessment::scoring::{ScoringConfig, ScoringEngine};

    fn sample_results() -> ResultsRecord {
        let catalog = AssessmentCatalog::standard();
        let engine = ScoringEngine::new(&catalog, ScoringConfig::default().without_jitter());
        let answers: AnswerSet = [
            ("interest1", "5"),
            ("interest2", "5"),
            ("personality1", "4"),
            ("personality2", "4"),
            ("cognitive1", "4"),
            ("excel1", "1"),
            ("forecasting1", "1"),
            ("logic1", "2"),
        ]
        .into_iter()
        .map(|(id, value)| (id.to_string(), value.to_string()))
        .collect();

        engine.score_seeded(&answers, 1)
    }

    fn report_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 23).expect("valid report date")
    }

    #[test]
    fn report_lists_the_five_tracked_skills() {
        let report = ReadinessReport::generate(&sample_results(), report_date());

        let skills: Vec<&str> = report.skill_gaps.iter().map(|entry| entry.skill).collect();
        assert_eq!(
            skills,
            vec![
                "Excel for Planning",
                "Forecast Models",
                "Trend Analysis",
                "Communication",
                "Business Acumen",
            ]
        );
    }

    #[test]
    fn gap_is_required_minus_current() {
        let results = sample_results();
        let report = ReadinessReport::generate(&results, report_date());

        let excel = &report.skill_gaps[0];
        assert_eq!(excel.required, 85);
        assert_eq!(excel.current, results.technical_readiness as i16);
        assert_eq!(excel.gap, 85 - results.technical_readiness as i16);

        let models = &report.skill_gaps[1];
        assert_eq!(models.current, results.technical_readiness as i16 - 10);
        assert_eq!(models.gap, 90 - results.technical_readiness as i16);
    }

    #[test]
    fn forecast_models_row_can_go_negative_on_weak_scores() {
        let catalog = AssessmentCatalog::standard();
        let engine = ScoringEngine::new(&catalog, ScoringConfig::default().without_jitter());
        let results = engine.score_seeded(&AnswerSet::new(), 1);

        let report = ReadinessReport::generate(&results, report_date());
        assert_eq!(report.skill_gaps[1].current, -10);
        assert!(!report.skill_gaps[1].is_met());
    }

    #[test]
    fn career_matches_track_their_source_scores() {
        let results = sample_results();
        let report = ReadinessReport::generate(&results, report_date());

        assert_eq!(report.career_matches.len(), 5);
        assert_eq!(report.career_matches[0].title, "Demand Planner");
        assert_eq!(report.career_matches[0].match_score, results.overall_score);
        assert_eq!(
            report.career_matches[1].match_score,
            results.technical_readiness
        );
        assert_eq!(report.career_matches[4].match_score, results.wiscar.will);
    }

    #[test]
    fn next_steps_follow_the_recommendation() {
        let results = sample_results();
        let report = ReadinessReport::generate(&results, report_date());

        assert_eq!(report.next_steps, results.recommendation.next_steps());
        assert!(!report.next_steps.is_empty());
    }
}
