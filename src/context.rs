//! Application Context
//!
//! Shared editor handles provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_dragdrop::DropTarget;

use crate::editor;
use crate::focus::FocusDirectory;
use crate::models::{position_of, QuestionId};
use crate::navigation::{KeyOutcome, KeyStroke};
use crate::store::{QuestionStore, SequenceStore};
use crate::widget::TextAreaHandle;

/// App-wide editor state provided via context
#[derive(Clone, Copy)]
pub struct EditorContext {
    /// The list itself
    pub store: QuestionStore,
    /// Live textarea per item id (browser-only, so local storage)
    directory: StoredValue<FocusDirectory<TextAreaHandle>, LocalStorage>,
    /// Delay before deferred focus transfers run
    focus_delay_ms: u32,
}

impl EditorContext {
    pub fn new(store: QuestionStore, focus_delay_ms: u32) -> Self {
        Self {
            store,
            directory: StoredValue::new_local(FocusDirectory::new()),
            focus_delay_ms,
        }
    }

    /// Called when an item's textarea mounts
    pub fn register(&self, id: QuestionId, handle: TextAreaHandle) {
        self.directory.update_value(|d| d.register(id, handle));
    }

    /// Called when an item's textarea unmounts
    pub fn unregister(&self, id: &QuestionId) {
        self.directory.try_update_value(|d| d.unregister(id));
    }

    /// Run a keystroke through the engine; the caller prevents the default
    /// action when the outcome says so
    pub fn dispatch_key(&self, id: &QuestionId, stroke: KeyStroke) -> KeyOutcome {
        let store = self.store;
        let dispatched = self
            .directory
            .try_update_value(|d| editor::dispatch_key(&store, d, id, stroke))
            .unwrap_or_default();
        if dispatched.needs_flush {
            self.schedule_flush();
        }
        dispatched.outcome
    }

    pub fn edit_text(&self, id: &QuestionId, text: String) {
        editor::edit_text(&self.store, id, text);
    }

    pub fn toggle_annotation(&self, id: &QuestionId) {
        editor::toggle_annotation(&self.store, id);
    }

    pub fn drop_item(&self, dragged: &QuestionId, target: &DropTarget<QuestionId>) {
        editor::drop_item(&self.store, dragged, target);
    }

    pub fn clear_all(&self) {
        let store = self.store;
        let needs_flush = self
            .directory
            .try_update_value(|d| editor::clear_all(&store, d))
            .unwrap_or(false);
        if needs_flush {
            self.schedule_flush();
        }
    }

    /// Untracked index of `id`
    pub fn index_of(&self, id: &QuestionId) -> Option<usize> {
        position_of(&self.store.snapshot(), id)
    }

    /// Untracked answered flag of `id`
    pub fn is_answered(&self, id: &QuestionId) -> bool {
        self.store
            .snapshot()
            .iter()
            .find(|q| &q.id == id)
            .is_some_and(|q| q.answered)
    }

    /// Resolve the pending focus transfer once the list has re-rendered
    fn schedule_flush(&self) {
        let directory = self.directory;
        Timeout::new(self.focus_delay_ms, move || {
            directory.try_update_value(|d| {
                d.flush_pending();
            });
        })
        .forget();
    }
}
