//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every change to
//! the list goes through [`SequenceStore::update`] with a mutator closure
//! run against the latest state.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Question, QuestionId};

/// Editor state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct EditorState {
    /// The ordered list, in display and navigation order
    pub questions: Vec<Question>,
}

/// Atomic "update via mutator" access to the sequence
pub trait SequenceStore {
    /// Untracked copy of the current sequence
    fn snapshot(&self) -> Vec<Question>;

    /// Run `mutator` on the current sequence and commit the result
    fn update<F>(&self, mutator: F)
    where
        F: FnOnce(&mut Vec<Question>);
}

/// Reactive store handle, cheap to copy into closures
#[derive(Clone, Copy)]
pub struct QuestionStore(Store<EditorState>);

impl QuestionStore {
    pub fn new(questions: Vec<Question>) -> Self {
        Self(Store::new(EditorState { questions }))
    }

    /// Tracked read for views and effects
    pub fn questions(&self) -> Vec<Question> {
        self.0.questions().get()
    }

    /// Tracked read of a single item
    pub fn question(&self, id: &QuestionId) -> Option<Question> {
        self.0.questions().with(|qs| qs.iter().find(|q| &q.id == id).cloned())
    }

    /// Tracked length
    pub fn len(&self) -> usize {
        self.0.questions().with(|qs| qs.len())
    }
}

impl SequenceStore for QuestionStore {
    fn snapshot(&self) -> Vec<Question> {
        self.0.questions().get_untracked()
    }

    fn update<F>(&self, mutator: F)
    where
        F: FnOnce(&mut Vec<Question>),
    {
        // subscribers are notified when the guard drops
        let field = self.0.questions();
        let mut draft = field.write();
        mutator(&mut *draft);
    }
}
