//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for flat Leptos lists using mouse events.
//! Uses movement threshold to distinguish click from drag.
//! Nothing is committed while dragging; the drop callback runs once on mouseup.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Drop target types
#[derive(Clone, Debug, PartialEq)]
pub enum DropTarget<Id> {
    /// Drop onto an item (take its place)
    Item(Id),
    /// Drop into the gap before this position (`len` = after the last item)
    Slot(usize),
}

/// DnD state signals
pub struct DndSignals<Id: Send + Sync + 'static> {
    pub dragging_id_read: ReadSignal<Option<Id>>,
    pub dragging_id_write: WriteSignal<Option<Id>>,
    pub drop_target_read: ReadSignal<Option<DropTarget<Id>>>,
    pub drop_target_write: WriteSignal<Option<DropTarget<Id>>>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<Id>>,
    pub pending_id_write: WriteSignal<Option<Id>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

impl<Id: Send + Sync + 'static> Clone for DndSignals<Id> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Id: Send + Sync + 'static> Copy for DndSignals<Id> {}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// Whether the pointer has travelled far enough from the mousedown point
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32)) -> bool {
    let dx = (now.0 - start.0).abs();
    let dy = (now.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

pub fn create_dnd_signals<Id: Send + Sync + 'static>() -> DndSignals<Id> {
    let (dragging_id_read, dragging_id_write) = signal(None::<Id>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget<Id>>);
    let (pending_id_read, pending_id_write) = signal(None::<Id>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag<Id: Send + Sync + 'static>(dnd: &DndSignals<Id>) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
}

/// Create mousedown handler for drag handles
/// Records pending drag with start position
pub fn make_on_mousedown<Id>(dnd: DndSignals<Id>, item_id: Id) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    Id: Clone + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is an editable control or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            // Keep the text cursor where it is
            ev.prevent_default();
            dnd.pending_id_write.set(Some(item_id.clone()));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove<Id>(dnd: DndSignals<Id>)
where
    Id: Clone + Send + Sync + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && dnd.dragging_id_read.get_untracked().is_none() {
            let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
            if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                dnd.dragging_id_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for items
pub fn make_on_item_mouseenter<Id>(dnd: DndSignals<Id>, item_id: Id) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    Id: Clone + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging_id_read.get_untracked() {
            // Don't allow dropping on self
            if dragging != item_id {
                dnd.drop_target_write.set(Some(DropTarget::Item(item_id.clone())));
            }
        }
    }
}

/// Create mouseenter handler for slots between items.
/// `position` is read when the pointer enters, since keyed rows move.
pub fn make_on_slot_mouseenter<Id, P>(dnd: DndSignals<Id>, position: P) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    Id: Clone + Send + Sync + 'static,
    P: Fn() -> usize + Clone + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Slot(position())));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<Id>(dnd: DndSignals<Id>) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    Id: Clone + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup<Id, F>(dnd: DndSignals<Id>, on_drop: F)
where
    Id: Clone + Send + Sync + 'static,
    F: Fn(Id, DropTarget<Id>) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        // Clear pending state first
        dnd.pending_id_write.set(None);

        // If we were actually dragging (not just clicking)
        if let (Some(dragged), Some(target)) = (dragging_id, drop_target) {
            end_drag(&dnd);
            on_drop(dragged, target);
        } else {
            end_drag(&dnd);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}
