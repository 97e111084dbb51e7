use serde::{Deserialize, Serialize};

/// Answer input style for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// 1-5 agreement scale.
    Likert,
    /// Pick one option by index.
    MultipleChoice,
    /// Numeric self-rating between `min` and `max`.
    Scale,
}

impl QuestionKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Likert => "Likert",
            Self::MultipleChoice => "Multiple Choice",
            Self::Scale => "Scale",
        }
    }
}

/// Scoring group a question contributes to. Tagged explicitly on each
/// question so the engine never has to pattern-match question ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Psychological,
    Technical,
    /// Collected for context but excluded from both group means.
    Unscored,
}

impl ScoreCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Psychological => "Psychological",
            Self::Technical => "Technical",
            Self::Unscored => "Unscored",
        }
    }
}

/// Single catalog question. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub kind: QuestionKind,
    pub category: ScoreCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u8>,
}

/// Ordered block of questions presented together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub questions: Vec<Question>,
}

/// Label shown beside each Likert value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LikertOption {
    pub value: u8,
    pub label: &'static str,
}

pub const LIKERT_OPTIONS: [LikertOption; 5] = [
    LikertOption {
        value: 1,
        label: "Strongly Disagree",
    },
    LikertOption {
        value: 2,
        label: "Disagree",
    },
    LikertOption {
        value: 3,
        label: "Neutral",
    },
    LikertOption {
        value: 4,
        label: "Agree",
    },
    LikertOption {
        value: 5,
        label: "Strongly Agree",
    },
];

/// The full questionnaire: ordered sections of ordered questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentCatalog {
    sections: Vec<Section>,
}

impl AssessmentCatalog {
    /// The fixed forecasting & demand planning readiness questionnaire.
    pub fn standard() -> Self {
        Self {
            sections: standard_sections(),
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn total_questions(&self) -> usize {
        self.sections
            .iter()
            .map(|section| section.questions.len())
            .sum()
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.sections
            .iter()
            .flat_map(|section| section.questions.iter())
            .find(|question| question.id == id)
    }

    /// Scoring group for a question id; `None` for ids outside the catalog,
    /// which the engine silently ignores.
    pub fn category_of(&self, id: &str) -> Option<ScoreCategory> {
        self.question(id).map(|question| question.category)
    }
}

fn standard_sections() -> Vec<Section> {
    vec![
        Section {
            id: "psychometric",
            title: "Psychometric Evaluation",
            description: "Understanding your personality and cognitive preferences",
            questions: vec![
                likert(
                    "interest1",
                    "I enjoy working with numbers to predict future outcomes",
                ),
                likert(
                    "interest2",
                    "I find satisfaction in analyzing patterns and trends in data",
                ),
                likert("personality1", "I prefer structured tasks with clear procedures"),
                likert(
                    "personality2",
                    "I work well under pressure and tight deadlines",
                ),
                likert(
                    "cognitive1",
                    "I prefer logical, analytical thinking over creative brainstorming",
                ),
            ],
        },
        Section {
            id: "technical",
            title: "Technical & Aptitude Assessment",
            description: "Testing your technical readiness and analytical skills",
            questions: vec![
                multiple_choice(
                    "excel1",
                    "Which Excel function would you use to find the average of values in cells A1:A10?",
                    vec![
                        "SUM(A1:A10)/10",
                        "AVERAGE(A1:A10)",
                        "MEAN(A1:A10)",
                        "AVG(A1:A10)",
                    ],
                    1,
                ),
                multiple_choice(
                    "forecasting1",
                    "What does 'lead time' represent in demand planning?",
                    vec![
                        "Time to manufacture a product",
                        "Time between placing an order and receiving it",
                        "Time to sell inventory",
                        "Time to process customer requests",
                    ],
                    1,
                ),
                multiple_choice(
                    "logic1",
                    "If sales increase by 15% each month, and current sales are 1000 units, what will sales be in month 3?",
                    vec!["1150 units", "1300 units", "1323 units", "1520 units"],
                    2,
                ),
            ],
        },
        Section {
            id: "wiscar",
            title: "WISCAR Framework Analysis",
            description: "Comprehensive evaluation of your readiness across all dimensions",
            questions: vec![
                likert(
                    "will1",
                    "I consistently work toward long-term goals even when progress is slow",
                ),
                Question {
                    id: "skill1",
                    text: "Rate your current Excel skills (pivot tables, formulas, data analysis)",
                    kind: QuestionKind::Scale,
                    category: ScoreCategory::Unscored,
                    options: None,
                    correct_index: None,
                    min: Some(1),
                    max: Some(10),
                },
                likert("learning1", "I actively seek feedback to improve my performance"),
            ],
        },
    ]
}

fn likert(id: &'static str, text: &'static str) -> Question {
    Question {
        id,
        text,
        kind: QuestionKind::Likert,
        category: ScoreCategory::Psychological,
        options: None,
        correct_index: None,
        min: None,
        max: None,
    }
}

fn multiple_choice(
    id: &'static str,
    text: &'static str,
    options: Vec<&'static str>,
    correct_index: usize,
) -> Question {
    Question {
        id,
        text,
        kind: QuestionKind::MultipleChoice,
        category: ScoreCategory::Technical,
        options: Some(options),
        correct_index: Some(correct_index),
        min: None,
        max: None,
    }
}
