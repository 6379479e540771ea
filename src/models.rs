//! Frontend Models
//!
//! The question item and its identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::annotation::Annotation;

/// Stable, opaque item identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh id that collides with none of `existing`
    pub fn generate(existing: &[Question]) -> Self {
        loop {
            let candidate = Self(uuid::Uuid::new_v4().to_string());
            if !existing.iter().any(|q| q.id == candidate) {
                return candidate;
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One row of the list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    /// May contain embedded line breaks
    pub text: String,
    pub answered: bool,
    pub highlighted: bool,
}

impl Question {
    pub fn new(id: QuestionId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            answered: false,
            highlighted: false,
        }
    }

    /// A fresh empty, plain item
    pub fn empty(id: QuestionId) -> Self {
        Self::new(id, String::new())
    }

    /// Whitespace-only text counts as empty
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn annotation(&self) -> Annotation {
        Annotation::from_flags(self.answered, self.highlighted)
    }

    pub fn set_annotation(&mut self, annotation: Annotation) {
        let (answered, highlighted) = annotation.flags();
        self.answered = answered;
        self.highlighted = highlighted;
    }
}

/// Index of `id` in `questions`
pub fn position_of(questions: &[Question], id: &QuestionId) -> Option<usize> {
    questions.iter().position(|q| &q.id == id)
}
