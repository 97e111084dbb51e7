use super::super::answers::AnswerSet;
use super::super::catalog::{AssessmentCatalog, ScoreCategory};
use super::config::{ScoringConfig, TechnicalRule};

/// The two deterministic group means everything else derives from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BaseScores {
    pub psychological_fit: u8,
    pub technical_readiness: u8,
}

/// Permissive integer parse: optional sign plus the leading digit run,
/// anything else falls back to 0. Malformed answers degrade instead of
/// erroring; the engine has no failure paths.
pub(crate) fn parse_leading_int(raw: &str) -> i64 {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let prefix: String = digits.chars().take_while(char::is_ascii_digit).collect();
    if prefix.is_empty() {
        return 0;
    }

    let magnitude = prefix.parse::<i64>().unwrap_or(i64::MAX);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

pub(crate) fn base_scores(
    answers: &AnswerSet,
    catalog: &AssessmentCatalog,
    config: &ScoringConfig,
) -> BaseScores {
    let mut psychological: Vec<i64> = Vec::new();
    let mut technical: Vec<f64> = Vec::new();

    for (question_id, value) in answers.iter() {
        match catalog.category_of(question_id) {
            Some(ScoreCategory::Psychological) => {
                psychological.push(parse_leading_int(value));
            }
            Some(ScoreCategory::Technical) => {
                technical.push(technical_answer_score(
                    question_id,
                    value,
                    catalog,
                    config.technical_rule,
                ));
            }
            // Unscored questions and ids outside the catalog are ignored.
            Some(ScoreCategory::Unscored) | None => {}
        }
    }

    BaseScores {
        psychological_fit: mean_score(&psychological),
        technical_readiness: mean_technical(&technical),
    }
}

fn technical_answer_score(
    question_id: &str,
    value: &str,
    catalog: &AssessmentCatalog,
    rule: TechnicalRule,
) -> f64 {
    let parsed = parse_leading_int(value);
    match rule {
        TechnicalRule::FixedIndex => match parsed {
            1 => 100.0,
            2 => 33.0,
            _ => 0.0,
        },
        TechnicalRule::AnswerKey => {
            let correct = catalog
                .question(question_id)
                .and_then(|question| question.correct_index);
            match correct {
                Some(index) if parsed >= 0 && parsed as usize == index => 100.0,
                _ => 0.0,
            }
        }
    }
}

/// Likert mean rescaled from the 1-5 range to 0-100; empty group scores 0.
fn mean_score(values: &[i64]) -> u8 {
    if values.is_empty() {
        return 0;
    }

    let sum = values
        .iter()
        .fold(0i64, |acc, value| acc.saturating_add(*value));
    let scaled = sum as f64 / values.len() as f64 * 20.0;
    scaled.round().clamp(0.0, 100.0) as u8
}

fn mean_technical(values: &[f64]) -> u8 {
    if values.is_empty() {
        return 0;
    }

    let sum: f64 = values.iter().sum();
    (sum / values.len() as f64).round().clamp(0.0, 100.0) as u8
}
