mod config;
mod policy;
mod rules;

pub use config::{JitterSpans, ScoringConfig, TechnicalRule};
pub use policy::Recommendation;

use super::answers::AnswerSet;
use super::catalog::AssessmentCatalog;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Stateless engine deriving a results record from a finished answer set.
///
/// Scoring is pure apart from the jitter draws; callers pick the randomness
/// source, so results are reproducible whenever they need to be.
pub struct ScoringEngine<'a> {
    catalog: &'a AssessmentCatalog,
    config: ScoringConfig,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(catalog: &'a AssessmentCatalog, config: ScoringConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores with the thread-local RNG; results page liveliness.
    pub fn score(&self, answers: &AnswerSet) -> ResultsRecord {
        self.score_with(answers, &mut rand::thread_rng())
    }

    /// Deterministic scoring from an explicit seed.
    pub fn score_seeded(&self, answers: &AnswerSet, seed: u64) -> ResultsRecord {
        self.score_with(answers, &mut StdRng::seed_from_u64(seed))
    }

    pub fn score_with<R: Rng + ?Sized>(&self, answers: &AnswerSet, rng: &mut R) -> ResultsRecord {
        let base = rules::base_scores(answers, self.catalog, &self.config);
        let overall_score = overall(base.psychological_fit, base.technical_readiness);
        let recommendation = policy::recommend(overall_score, &self.config);

        let spans = &self.config.jitter;
        let wiscar = WiscarScores {
            will: jittered(base.psychological_fit, spans.will, rng),
            interest: jittered(base.psychological_fit, spans.interest, rng),
            // Skill mirrors technical readiness directly.
            skill: base.technical_readiness,
            cognitive: jittered(base.technical_readiness, spans.cognitive, rng),
            ability_to_learn: jittered(base.psychological_fit, spans.ability_to_learn, rng),
            real_world_alignment: jittered(overall_score, spans.real_world_alignment, rng),
        };

        ResultsRecord {
            psychological_fit: base.psychological_fit,
            technical_readiness: base.technical_readiness,
            wiscar,
            overall_score,
            recommendation,
            confidence_score: jittered(overall_score, spans.confidence, rng),
        }
    }
}

/// Six-dimension WISCAR breakdown (Will, Interest, Skill, Cognitive ability,
/// Ability to learn, Real-world alignment), each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiscarScores {
    pub will: u8,
    pub interest: u8,
    pub skill: u8,
    pub cognitive: u8,
    pub ability_to_learn: u8,
    pub real_world_alignment: u8,
}

/// Derived output of one assessment attempt. Never persisted; recomputed on
/// demand from the answer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsRecord {
    pub psychological_fit: u8,
    pub technical_readiness: u8,
    pub wiscar: WiscarScores,
    pub overall_score: u8,
    pub recommendation: Recommendation,
    pub confidence_score: u8,
}

fn overall(psychological_fit: u8, technical_readiness: u8) -> u8 {
    ((psychological_fit as f64 + technical_readiness as f64) / 2.0).round() as u8
}

/// `min(100, base + uniform draw in [0, span))`, rounded. A zero span means
/// the base passes through untouched.
fn jittered<R: Rng + ?Sized>(base: u8, span: f64, rng: &mut R) -> u8 {
    if span <= 0.0 {
        return base.min(100);
    }

    let drawn = base as f64 + rng.gen_range(0.0..span);
    drawn.min(100.0).round() as u8
}
