//! The credit record: one course's contribution to a GPA.

use serde::Serialize;

/// Name given to records whose source omits the course name.
pub const PLACEHOLDER_NAME: &str = "_";

/// A single course: its name, the score achieved and its credit-hour weight.
///
/// Two credits compare equal when their names match, whatever their score or
/// weight. Exclusion relies on this, see [`crate::gpa::exclude_from`].
#[derive(Debug, Clone, Serialize)]
pub struct Credit {
    name: String,
    score: f64,
    grade: f64,
}

impl Credit {
    pub fn new(name: impl Into<String>, score: f64, grade: f64) -> Self {
        Credit {
            name: name.into(),
            score,
            grade,
        }
    }

    /// Creates a credit carrying the placeholder name.
    pub fn unnamed(score: f64, grade: f64) -> Self {
        Self::new(PLACEHOLDER_NAME, score, grade)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// Credit-hour weight of the course.
    pub fn grade(&self) -> f64 {
        self.grade
    }

    /// Score weighted by credit hours.
    pub fn score_grade(&self) -> f64 {
        self.score * self.grade
    }

    pub fn is_unnamed(&self) -> bool {
        self.name == PLACEHOLDER_NAME
    }
}

impl PartialEq for Credit {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Credit {}
