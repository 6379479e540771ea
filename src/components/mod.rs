//! UI Components
//!
//! Leptos components for the question list.

mod question_item;
mod question_list;
mod confirm_modal;

pub use question_item::QuestionItem;
pub use question_list::QuestionList;
pub use confirm_modal::ConfirmModal;
