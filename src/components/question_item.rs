//! Question Item Component
//!
//! One row: drag handle, annotation checkbox and an auto-growing textarea.
//! Keystrokes go to the navigation engine through the editor context.

use leptos::html;
use leptos::prelude::*;
use leptos_dragdrop::{make_on_item_mouseenter, make_on_mouseleave, make_on_mousedown, DndSignals};

use crate::context::EditorContext;
use crate::models::QuestionId;
use crate::navigation::{Key, KeyStroke};
use crate::widget::{adjust_height, TextAreaHandle};

fn key_stroke(ev: &web_sys::KeyboardEvent) -> KeyStroke {
    KeyStroke {
        key: Key::from_dom(&ev.key()),
        shift: ev.shift_key(),
        ctrl: ev.ctrl_key(),
        alt: ev.alt_key(),
        meta: ev.meta_key(),
    }
}

/// A single question row
#[component]
pub fn QuestionItem(id: QuestionId, dnd: DndSignals<QuestionId>) -> impl IntoView {
    let ctx = use_context::<EditorContext>().expect("EditorContext should be provided");
    let textarea_ref = NodeRef::<html::Textarea>::new();

    let question = {
        let id = id.clone();
        Memo::new(move |_| ctx.store.question(&id))
    };
    let text = Memo::new(move |_| question.get().map(|q| q.text).unwrap_or_default());
    let answered = Memo::new(move |_| question.get().is_some_and(|q| q.answered));
    let highlighted = Memo::new(move |_| question.get().is_some_and(|q| q.highlighted));

    // Register the textarea once it is in the DOM
    {
        let id = id.clone();
        Effect::new(move |_| {
            if let Some(el) = textarea_ref.get() {
                adjust_height(&el);
                ctx.register(id.clone(), TextAreaHandle::new(el));
            }
        });
    }
    {
        let id = id.clone();
        on_cleanup(move || ctx.unregister(&id));
    }

    // Resize whenever the text changes, including engine edits
    Effect::new(move |_| {
        text.track();
        if let Some(el) = textarea_ref.get_untracked() {
            adjust_height(&el);
        }
    });

    let on_keydown = {
        let id = id.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ctx.dispatch_key(&id, key_stroke(&ev)).intercept {
                ev.prevent_default();
            }
        }
    };

    let input_id = id.clone();
    let toggle_id = id.clone();

    // DnD handlers
    let on_mousedown = make_on_mousedown(dnd, id.clone());
    let on_mouseenter = make_on_item_mouseenter(dnd, id.clone());
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_dragging = {
        let id = id.clone();
        move || dnd.dragging_id_read.get().as_ref() == Some(&id)
    };

    let row_class = move || {
        let mut c = String::from("question-item");
        if highlighted.get() { c.push_str(" highlighted"); }
        if is_dragging() { c.push_str(" dragging"); }
        c
    };

    view! {
        <div
            class=row_class
            data-testid=format!("question-item-{}", id)
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <div class="reorder-handle" data-testid="reorder-button" on:mousedown=on_mousedown>
                "☰"
            </div>
            <input
                type="checkbox"
                class="annotation-checkbox"
                prop:checked=move || answered.get()
                on:change=move |ev| {
                    ctx.toggle_annotation(&toggle_id);
                    // highlighting leaves `answered` unchanged, so undo the browser's tick
                    event_target::<web_sys::HtmlInputElement>(&ev).set_checked(ctx.is_answered(&toggle_id));
                }
            />
            <textarea
                node_ref=textarea_ref
                class=move || if answered.get() { "question-text answered" } else { "question-text" }
                spellcheck="false"
                rows="1"
                data-highlighted=move || highlighted.get().to_string()
                prop:value=move || text.get()
                on:input=move |ev| ctx.edit_text(&input_id, event_target_value(&ev))
                on:keydown=on_keydown
            ></textarea>
        </div>
    }
}
