use serde::{Deserialize, Serialize};

/// How multiple-choice answers in the technical group are graded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechnicalRule {
    /// Bug-compatible legacy rule: encoded value `1` scores 100, `2` scores
    /// 33, anything else 0, regardless of each question's answer key.
    #[default]
    FixedIndex,
    /// Grade against the question's declared `correct_index`: 100 on a
    /// match, 0 otherwise.
    AnswerKey,
}

impl TechnicalRule {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FixedIndex => "fixed index",
            Self::AnswerKey => "answer key",
        }
    }
}

/// Upper bounds of the uniform jitter applied to each derived score.
/// `skill` intentionally has no entry: it mirrors technical readiness as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JitterSpans {
    pub will: f64,
    pub interest: f64,
    pub cognitive: f64,
    pub ability_to_learn: f64,
    pub real_world_alignment: f64,
    pub confidence: f64,
}

impl Default for JitterSpans {
    fn default() -> Self {
        Self {
            will: 20.0,
            interest: 15.0,
            cognitive: 20.0,
            ability_to_learn: 25.0,
            real_world_alignment: 15.0,
            confidence: 10.0,
        }
    }
}

impl JitterSpans {
    /// Fully deterministic scoring, used by tests and batch comparisons.
    pub fn none() -> Self {
        Self {
            will: 0.0,
            interest: 0.0,
            cognitive: 0.0,
            ability_to_learn: 0.0,
            real_world_alignment: 0.0,
            confidence: 0.0,
        }
    }
}

/// Rubric configuration for the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub technical_rule: TechnicalRule,
    /// Overall score at or above which the recommendation is `Yes`.
    pub yes_threshold: u8,
    /// Overall score at or above which the recommendation is `Maybe`.
    pub maybe_threshold: u8,
    pub jitter: JitterSpans,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            technical_rule: TechnicalRule::default(),
            yes_threshold: 80,
            maybe_threshold: 60,
            jitter: JitterSpans::default(),
        }
    }
}

impl ScoringConfig {
    pub fn with_technical_rule(mut self, rule: TechnicalRule) -> Self {
        self.technical_rule = rule;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.jitter = JitterSpans::none();
        self
    }
}
