use super::answers::AnswerSet;
use super::catalog::{AssessmentCatalog, Question, Section};
use serde::Serialize;
use std::fmt;

/// Step-by-step answer collection over a borrowed catalog.
///
/// The cursor is a `(section, question)` pair that always stays within
/// catalog bounds. Movement is one question at a time: no skipping, and the
/// only gate on advancing is that the current question has an answer.
#[derive(Debug)]
pub struct AssessmentSession<'a> {
    catalog: &'a AssessmentCatalog,
    section: usize,
    question: usize,
    answers: AnswerSet,
}

/// Outcome of a successful `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStep {
    Advanced,
    /// The cursor was on the final question; the answer set is complete.
    Completed,
}

/// Completion counters for the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressView {
    pub answered: usize,
    pub total: usize,
    pub percent: f64,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SessionError {
    /// `advance` was called before the current question had an answer.
    CurrentQuestionUnanswered { question_id: String },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::CurrentQuestionUnanswered { question_id } => {
                write!(f, "question '{question_id}' must be answered before advancing")
            }
        }
    }
}

impl std::error::Error for SessionError {}

impl<'a> AssessmentSession<'a> {
    pub fn new(catalog: &'a AssessmentCatalog) -> Self {
        Self {
            catalog,
            section: 0,
            question: 0,
            answers: AnswerSet::new(),
        }
    }

    pub fn current_section(&self) -> &'a Section {
        &self.catalog.sections()[self.section]
    }

    pub fn current_question(&self) -> &'a Question {
        &self.current_section().questions[self.question]
    }

    /// Zero-based `(section, question)` cursor, mainly for display.
    pub fn position(&self) -> (usize, usize) {
        (self.section, self.question)
    }

    /// Stores an answer for the question under the cursor.
    pub fn record_answer(&mut self, value: impl Into<String>) {
        let id = self.current_question().id;
        self.answers.record(id, value);
    }

    /// Moves to the next question, crossing section boundaries as needed.
    pub fn advance(&mut self) -> Result<SessionStep, SessionError> {
        let current = self.current_question();
        if !self.answers.contains(current.id) {
            return Err(SessionError::CurrentQuestionUnanswered {
                question_id: current.id.to_string(),
            });
        }

        if self.question + 1 < self.current_section().questions.len() {
            self.question += 1;
            Ok(SessionStep::Advanced)
        } else if self.section + 1 < self.catalog.sections().len() {
            self.section += 1;
            self.question = 0;
            Ok(SessionStep::Advanced)
        } else {
            Ok(SessionStep::Completed)
        }
    }

    /// Moves one question back, clamped at the very first question.
    pub fn retreat(&mut self) {
        if self.question > 0 {
            self.question -= 1;
        } else if self.section > 0 {
            self.section -= 1;
            self.question = self.current_section().questions.len() - 1;
        }
    }

    pub fn progress(&self) -> ProgressView {
        let total = self.catalog.total_questions();
        let answered = self.answers.len();
        let percent = if total == 0 {
            0.0
        } else {
            answered as f64 / total as f64 * 100.0
        };

        ProgressView {
            answered,
            total,
            percent,
        }
    }

    /// True once every catalog question has a recorded answer.
    pub fn is_complete(&self) -> bool {
        self.catalog
            .sections()
            .iter()
            .flat_map(|section| section.questions.iter())
            .all(|question| self.answers.contains(question.id))
    }

    /// Hands the collected answers to the caller by value. The engine is
    /// only ever invoked with the finished set, never incrementally.
    pub fn into_answers(self) -> AnswerSet {
        self.answers
    }
}
