//! Question List App
//!
//! Loads the persisted list, provides the editor context and saves every change.

use leptos::prelude::*;

use crate::components::{ConfirmModal, QuestionList};
use crate::config::EditorConfig;
use crate::context::EditorContext;
use crate::storage::{ensure_not_empty, BrowserStorage, QuestionStorage};
use crate::store::QuestionStore;

#[component]
pub fn App(config: EditorConfig) -> impl IntoView {
    let storage = BrowserStorage::new(config.storage_key.clone());

    let initial = ensure_not_empty(storage.get_questions());
    log::info!("[APP] Loaded {} questions from '{}'", initial.len(), config.storage_key);

    let ctx = EditorContext::new(QuestionStore::new(initial), config.focus_delay_ms);
    provide_context(ctx);

    // Persist on every change
    Effect::new(move |_| {
        let questions = ctx.store.questions();
        if let Err(e) = storage.set_questions(&questions) {
            log::error!("[APP] Failed to save questions: {}", e);
        }
    });

    let (confirming, set_confirming) = signal(false);
    let count = move || ctx.store.len();

    view! {
        <div class="app-layout">
            <header class="toolbar">
                <h1>"Questions"</h1>
                <span class="item-count">{move || format!("{} items", count())}</span>
                <button
                    class="clear-btn"
                    data-testid="clear-button"
                    on:click=move |_| set_confirming.set(true)
                >
                    "Clear"
                </button>
            </header>

            <QuestionList />

            <Show when=move || confirming.get()>
                <ConfirmModal
                    title="Clear list"
                    message="Remove every question? This cannot be undone."
                    on_confirm=move |_| {
                        ctx.clear_all();
                        set_confirming.set(false);
                    }
                    on_cancel=move |_| set_confirming.set(false)
                />
            </Show>
        </div>
    }
}
