//! Question List Component
//!
//! Renders the sequence keyed by item id, with drag-and-drop reordering.
//! Uses leptos-dragdrop with a drop slot before every row and one at the end.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::QuestionItem;
use crate::context::EditorContext;
use crate::models::QuestionId;

/// Ordered list of question rows with DnD support
#[component]
pub fn QuestionList() -> impl IntoView {
    let ctx = use_context::<EditorContext>().expect("EditorContext should be provided");

    // Create DnD signals
    let dnd = create_dnd_signals::<QuestionId>();

    // Only the drop commits a move
    bind_global_mouseup(dnd, move |dragged, target| {
        log::debug!("[DND] drop {} on {:?}", dragged, target);
        ctx.drop_item(&dragged, &target);
    });

    // Re-render rows only when membership or order changes, not on every keystroke
    let ids = Memo::new(move |_| {
        ctx.store
            .questions()
            .into_iter()
            .map(|q| q.id)
            .collect::<Vec<_>>()
    });

    view! {
        <div class="question-list">
            <For
                each=move || ids.get()
                key=|id| id.clone()
                children=move |id| {
                    let slot_id = id.clone();
                    view! {
                        <DropSlot
                            dnd=dnd
                            position=move || ctx.index_of(&slot_id).unwrap_or(0)
                        />
                        <QuestionItem id=id dnd=dnd />
                    }
                }
            />

            // Trailing slot: after the last row
            <DropSlot dnd=dnd position=move || ids.with_untracked(|ids| ids.len()) />
        </div>
    }
}

/// Drop slot component - a horizontal separator for dropping between rows
#[component]
pub fn DropSlot<P>(dnd: DndSignals<QuestionId>, position: P) -> impl IntoView
where
    P: Fn() -> usize + Clone + Send + Sync + 'static,
{
    let on_mouseenter = make_on_slot_mouseenter(dnd, position.clone());
    let on_mouseleave = make_on_mouseleave(dnd);

    // Is this slot the current drop target?
    let is_active = move || {
        matches!(dnd.drop_target_read.get(), Some(DropTarget::Slot(pos)) if pos == position())
    };

    // Only show when dragging
    let is_dragging = move || dnd.dragging_id_read.get().is_some();

    let slot_class = move || {
        let mut c = String::from("drop-slot");
        if !is_dragging() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=slot_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
