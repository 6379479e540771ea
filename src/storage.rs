//! Question Storage
//!
//! Persistence boundary: the whole list is stored as one JSON array under a
//! fixed key. Unreadable content is treated as an empty list.

use crate::error::{EditorError, EditorResult};
use crate::models::{Question, QuestionId};

pub trait QuestionStorage {
    /// Stored list; empty when absent or unreadable
    fn get_questions(&self) -> Vec<Question>;

    fn set_questions(&self, questions: &[Question]) -> EditorResult<()>;
}

/// Parse stored content. Anything that is not a JSON array of questions
/// yields the empty list.
pub fn decode(raw: Option<&str>) -> Vec<Question> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<Question>>(raw) {
        Ok(questions) => questions,
        Err(e) => {
            log::warn!("[STORAGE] ignoring unreadable list: {}", e);
            Vec::new()
        }
    }
}

pub fn encode(questions: &[Question]) -> EditorResult<String> {
    Ok(serde_json::to_string(questions)?)
}

/// Always give the user a row to type into
pub fn ensure_not_empty(mut questions: Vec<Question>) -> Vec<Question> {
    if questions.is_empty() {
        questions.push(Question::empty(QuestionId::generate(&[])));
    }
    questions
}

/// `window.localStorage`
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn local_storage() -> EditorResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| EditorError::Unavailable("window".to_string()))?
            .local_storage()
            .map_err(|_| EditorError::Unavailable("localStorage".to_string()))?
            .ok_or_else(|| EditorError::Unavailable("localStorage".to_string()))
    }
}

impl QuestionStorage for BrowserStorage {
    fn get_questions(&self) -> Vec<Question> {
        let raw = match Self::local_storage() {
            Ok(storage) => storage.get_item(&self.key).ok().flatten(),
            Err(e) => {
                log::warn!("[STORAGE] {}", e);
                None
            }
        };
        decode(raw.as_deref())
    }

    fn set_questions(&self, questions: &[Question]) -> EditorResult<()> {
        let json = encode(questions)?;
        Self::local_storage()?
            .set_item(&self.key, &json)
            .map_err(|e| EditorError::Storage(format!("{:?}", e)))
    }
}
