//! Questionnaire catalog, answer collection, scoring, and report derivation.

pub mod answers;
pub mod catalog;
pub mod report;
pub mod scoring;
pub mod session;

pub use answers::{AnswerSet, AnswersError};
pub use catalog::{
    AssessmentCatalog, LikertOption, Question, QuestionKind, ScoreCategory, Section,
};
pub use report::{CareerMatchEntry, ReadinessReport, SkillGapEntry};
pub use scoring::{
    JitterSpans, Recommendation, ResultsRecord, ScoringConfig, ScoringEngine, TechnicalRule,
    WiscarScores,
};
pub use session::{AssessmentSession, ProgressView, SessionError, SessionStep};
