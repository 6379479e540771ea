//! Editor Dispatch
//!
//! Glue between input events and the pure engine: reads the caret from the
//! focus directory, asks the navigation engine what to do, then applies the
//! mutation to the store before attempting the focus transfer.

use leptos_dragdrop::DropTarget;

use crate::focus::{FocusDirectory, WidgetHandle};
use crate::models::{position_of, Question, QuestionId};
use crate::navigation::{handle_key, Caret, CaretTarget, FocusTransfer, KeyOutcome, KeyStroke, Mutation};
use crate::reorder::slot_to_index;
use crate::store::SequenceStore;

/// What the caller still has to do after a dispatch
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dispatched {
    pub outcome: KeyOutcome,
    /// A deferred focus transfer is waiting for the next render
    pub needs_flush: bool,
}

/// Handle a keystroke raised by the widget of `id`
pub fn dispatch_key<S, H>(store: &S, directory: &mut FocusDirectory<H>, id: &QuestionId, stroke: KeyStroke) -> Dispatched
where
    S: SequenceStore,
    H: WidgetHandle,
{
    let Some(handle) = directory.get(id) else {
        return Dispatched::default();
    };
    let text = handle.value();
    let offset = handle.cursor();
    let questions = store.snapshot();

    let outcome = handle_key(stroke, Caret { id, text: &text, offset }, &questions, QuestionId::generate);
    let needs_flush = apply_outcome(store, directory, &outcome);
    Dispatched { outcome, needs_flush }
}

/// Mutation first, then focus. Returns true when a flush must be scheduled.
pub fn apply_outcome<S, H>(store: &S, directory: &mut FocusDirectory<H>, outcome: &KeyOutcome) -> bool
where
    S: SequenceStore,
    H: WidgetHandle,
{
    if let Some(mutation) = &outcome.mutation {
        store.update(|draft| mutation.apply(draft));
    }
    match &outcome.focus {
        Some(transfer) => {
            directory.request(transfer.clone());
            directory.pending().is_some()
        }
        None => false,
    }
}

/// Text typed into the widget of `id`
pub fn edit_text<S: SequenceStore>(store: &S, id: &QuestionId, text: String) {
    let mutation = Mutation::SetText { id: id.clone(), text };
    store.update(|draft| mutation.apply(draft));
}

/// Checkbox click: advance the annotation cycle of `id`
pub fn toggle_annotation<S: SequenceStore>(store: &S, id: &QuestionId) {
    let mutation = Mutation::CycleAnnotation { id: id.clone() };
    store.update(|draft| mutation.apply(draft));
}

/// Final index for a drop, or None when it would not move anything
pub fn drop_index(questions: &[Question], dragged: &QuestionId, target: &DropTarget<QuestionId>) -> Option<usize> {
    let from = position_of(questions, dragged)?;
    let to = match target {
        DropTarget::Item(over) => position_of(questions, over)?,
        DropTarget::Slot(slot) => slot_to_index(from, *slot),
    };
    (to != from).then_some(to)
}

/// Commit a finished drag
pub fn drop_item<S: SequenceStore>(store: &S, dragged: &QuestionId, target: &DropTarget<QuestionId>) {
    let Some(index) = drop_index(&store.snapshot(), dragged, target) else {
        return;
    };
    let mutation = Mutation::MoveTo { id: dragged.clone(), index };
    store.update(|draft| mutation.apply(draft));
}

/// Replace the whole list with one fresh empty item and focus it
pub fn clear_all<S, H>(store: &S, directory: &mut FocusDirectory<H>) -> bool
where
    S: SequenceStore,
    H: WidgetHandle,
{
    let fresh = Question::empty(QuestionId::generate(&store.snapshot()));
    let target = fresh.id.clone();
    store.update(|draft| {
        draft.clear();
        draft.push(fresh);
    });
    log::info!("[EDITOR] list cleared");
    directory.request(FocusTransfer::deferred(target, CaretTarget::Start));
    true
}
