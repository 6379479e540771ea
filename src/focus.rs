//! Focus Directory
//!
//! Maps item ids to the live textarea of that item. Widgets register on
//! mount and unregister on unmount. Transfers to an id that has no widget
//! are parked as pending and resolved when the widget mounts or when the
//! post-render flush runs; a flush that still finds no widget drops the
//! transfer.

use std::collections::HashMap;

use crate::models::QuestionId;
use crate::navigation::{FocusTransfer, Timing};

/// What the engine needs from an input widget
pub trait WidgetHandle {
    fn focus(&self);
    /// Current text
    fn value(&self) -> String;
    /// Caret as a char offset
    fn cursor(&self) -> usize;
    /// Place a collapsed caret at a char offset
    fn set_cursor(&self, offset: usize);
}

pub struct FocusDirectory<H> {
    widgets: HashMap<QuestionId, H>,
    pending: Option<FocusTransfer>,
}

impl<H> Default for FocusDirectory<H> {
    fn default() -> Self {
        Self {
            widgets: HashMap::new(),
            pending: None,
        }
    }
}

impl<H: WidgetHandle> FocusDirectory<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the widget for `id`; runs a pending transfer aimed at it
    pub fn register(&mut self, id: QuestionId, handle: H) {
        self.widgets.insert(id.clone(), handle);
        if self.pending.as_ref().is_some_and(|p| p.target == id) {
            if let Some(transfer) = self.pending.take() {
                self.apply(&transfer);
            }
        }
    }

    pub fn unregister(&mut self, id: &QuestionId) {
        self.widgets.remove(id);
    }

    pub fn get(&self, id: &QuestionId) -> Option<&H> {
        self.widgets.get(id)
    }

    pub fn contains(&self, id: &QuestionId) -> bool {
        self.widgets.contains_key(id)
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn pending(&self) -> Option<&FocusTransfer> {
        self.pending.as_ref()
    }

    /// Route a transfer by its timing. Returns true when focus moved now.
    pub fn request(&mut self, transfer: FocusTransfer) -> bool {
        match transfer.timing {
            Timing::Immediate => self.transfer(&transfer),
            Timing::Deferred => {
                self.defer(transfer);
                false
            }
        }
    }

    /// Focus the target now; a missing widget is parked as pending
    pub fn transfer(&mut self, transfer: &FocusTransfer) -> bool {
        if self.apply(transfer) {
            return true;
        }
        self.defer(transfer.clone());
        false
    }

    /// Park a transfer until the next flush. A newer request replaces an older one.
    pub fn defer(&mut self, transfer: FocusTransfer) {
        self.pending = Some(transfer);
    }

    /// Resolve the pending transfer after a render pass
    pub fn flush_pending(&mut self) -> bool {
        let Some(transfer) = self.pending.take() else {
            return false;
        };
        let moved = self.apply(&transfer);
        if !moved {
            log::debug!("[FOCUS] dropped transfer to unmounted {}", transfer.target);
        }
        moved
    }

    fn apply(&self, transfer: &FocusTransfer) -> bool {
        let Some(handle) = self.widgets.get(&transfer.target) else {
            return false;
        };
        handle.focus();
        let offset = transfer.caret.resolve(&handle.value());
        handle.set_cursor(offset);
        true
    }
}
