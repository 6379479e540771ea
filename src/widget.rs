//! Textarea Widget Handle
//!
//! `WidgetHandle` over a live `<textarea>`. Selection offsets in the DOM
//! are UTF-16 code units; the engine works in chars.

use crate::caret::{char_to_utf16_offset, utf16_to_char_offset};
use crate::focus::WidgetHandle;

#[derive(Clone)]
pub struct TextAreaHandle {
    element: web_sys::HtmlTextAreaElement,
}

impl TextAreaHandle {
    pub fn new(element: web_sys::HtmlTextAreaElement) -> Self {
        Self { element }
    }
}

impl WidgetHandle for TextAreaHandle {
    fn focus(&self) {
        let _ = self.element.focus();
    }

    fn value(&self) -> String {
        self.element.value()
    }

    fn cursor(&self) -> usize {
        let pos = self.element.selection_start().ok().flatten().unwrap_or(0);
        utf16_to_char_offset(&self.element.value(), pos)
    }

    fn set_cursor(&self, offset: usize) {
        let pos = char_to_utf16_offset(&self.element.value(), offset);
        let _ = self.element.set_selection_range(pos, pos);
    }
}

/// `height: auto` then `height: <scrollHeight>px`
pub fn adjust_height(element: &web_sys::HtmlTextAreaElement) {
    let style = element.style();
    let _ = style.set_property("height", "auto");
    let _ = style.set_property("height", &format!("{}px", element.scroll_height()));
}
