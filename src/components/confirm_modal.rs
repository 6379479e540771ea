//! Confirm Modal Component
//!
//! Full-screen overlay asking the user to confirm or cancel an action.

use leptos::prelude::*;

/// Modal confirmation dialog
///
/// # Arguments
/// * `title` - Heading of the dialog
/// * `message` - Explanation shown under the heading
/// * `on_confirm` - Callback when the user confirms
/// * `on_cancel` - Callback when the user cancels
#[component]
pub fn ConfirmModal(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop" data-testid="confirm-modal">
            <div class="modal">
                <h2 class="modal-title">{title}</h2>
                <p class="modal-message">{message}</p>
                <div class="modal-actions">
                    <button
                        class="cancel-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_cancel.run(());
                        }
                    >
                        "Cancel"
                    </button>
                    <button
                        class="confirm-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_confirm.run(());
                        }
                    >
                        "Confirm"
                    </button>
                </div>
            </div>
        </div>
    }
}
