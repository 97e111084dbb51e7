use super::config::ScoringConfig;
use serde::{Deserialize, Serialize};

/// Categorical readiness verdict, a step function of the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::Maybe => "Maybe",
            Self::No => "No",
        }
    }

    pub const fn headline(self) -> &'static str {
        match self {
            Self::Yes => "You're ready to pursue forecasting roles!",
            Self::Maybe => "You have potential but need some development",
            Self::No => "Consider alternative career paths",
        }
    }

    /// Guidance bullets shown on the results page for this verdict.
    pub const fn next_steps(self) -> &'static [&'static str] {
        match self {
            Self::Yes => &[
                "Start applying for entry-level Demand Planner or Forecast Analyst positions",
                "Consider advanced training in specific forecasting software (SAP IBP, Oracle ASCP)",
                "Build a portfolio with Excel-based forecasting projects",
            ],
            Self::Maybe => &[
                "Take an Excel for Business Analytics course",
                "Study supply chain fundamentals",
                "Practice with forecasting case studies",
                "Consider starting in related roles like Inventory Coordinator",
            ],
            Self::No => &[
                "Explore Business Analysis or Operations Support roles",
                "Consider customer service or sales roles in supply chain companies",
                "Build foundational skills in Excel and data analysis first",
            ],
        }
    }
}

pub(crate) fn recommend(overall_score: u8, config: &ScoringConfig) -> Recommendation {
    if overall_score >= config.yes_threshold {
        Recommendation::Yes
    } else if overall_score >= config.maybe_threshold {
        Recommendation::Maybe
    } else {
        Recommendation::No
    }
}
