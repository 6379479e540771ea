//! Navigation Engine
//!
//! Decides what a keystroke inside one item's textarea does: leave it to the
//! browser, change the list, move focus to another item, or some of each.
//! The engine is pure: it reads the current sequence and the caret and
//! returns a [`KeyOutcome`]; applying it is up to the caller (see `editor`).

use crate::annotation::cycle_annotation;
use crate::caret;
use crate::models::{position_of, Question, QuestionId};
use crate::reorder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Key {
    Backspace,
    Enter,
    Tab,
    ArrowUp,
    ArrowDown,
    #[default]
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Backspace" => Key::Backspace,
            "Enter" => Key::Enter,
            "Tab" => Key::Tab,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyStroke {
    pub key: Key,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyStroke {
    pub fn plain(key: Key) -> Self {
        Self { key, ..Default::default() }
    }

    pub fn shift(key: Key) -> Self {
        Self { key, shift: true, ..Default::default() }
    }

    pub fn ctrl_shift(key: Key) -> Self {
        Self { key, shift: true, ctrl: true, ..Default::default() }
    }

    /// Shift, Ctrl and Alt all released (Meta is not considered)
    fn unmodified(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }

    fn is_shift_only(&self) -> bool {
        self.shift && !self.ctrl && !self.alt
    }

    fn is_ctrl_shift(&self) -> bool {
        self.shift && self.ctrl && !self.alt
    }
}

/// The focused widget's state when the key went down
#[derive(Debug, Clone, Copy)]
pub struct Caret<'a> {
    pub id: &'a QuestionId,
    /// Live widget value
    pub text: &'a str,
    /// Char offset of the selection start
    pub offset: usize,
}

/// A change to the sequence, resolved by id against the draft it is applied to
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    SetText { id: QuestionId, text: String },
    Remove { id: QuestionId },
    InsertAfter { anchor: QuestionId, question: Question },
    Push { question: Question },
    SwapPrevious { id: QuestionId },
    SwapNext { id: QuestionId },
    MoveTo { id: QuestionId, index: usize },
    CycleAnnotation { id: QuestionId },
}

impl Mutation {
    pub fn apply(&self, draft: &mut Vec<Question>) {
        match self {
            Mutation::SetText { id, text } => {
                if let Some(q) = draft.iter_mut().find(|q| &q.id == id) {
                    q.text = text.clone();
                }
            }
            Mutation::Remove { id } => {
                // never below one item
                if draft.len() > 1 {
                    draft.retain(|q| &q.id != id);
                }
            }
            Mutation::InsertAfter { anchor, question } => {
                if let Some(idx) = position_of(draft, anchor) {
                    draft.insert(idx + 1, question.clone());
                }
            }
            Mutation::Push { question } => draft.push(question.clone()),
            Mutation::SwapPrevious { id } => {
                reorder::swap_with_previous(draft, id);
            }
            Mutation::SwapNext { id } => {
                reorder::swap_with_next(draft, id);
            }
            Mutation::MoveTo { id, index } => reorder::move_to(draft, id, *index),
            Mutation::CycleAnnotation { id } => cycle_annotation(draft, id),
        }
    }
}

/// Where to put the caret in the target widget, resolved against the
/// widget's text when the transfer runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretTarget {
    Start,
    End,
    EndOfFirstLine,
    EndOfLastLine,
    At(usize),
}

impl CaretTarget {
    pub fn resolve(self, text: &str) -> usize {
        match self {
            CaretTarget::Start => 0,
            CaretTarget::End => caret::char_len(text),
            CaretTarget::EndOfFirstLine => caret::end_of_first_line(text),
            CaretTarget::EndOfLastLine => caret::end_of_last_line(text),
            CaretTarget::At(offset) => offset.min(caret::char_len(text)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timing {
    /// Target widget already exists
    Immediate,
    /// Target widget is (re)created by the mutation; run after the next render
    Deferred,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTransfer {
    pub target: QuestionId,
    pub caret: CaretTarget,
    pub timing: Timing,
}

impl FocusTransfer {
    pub fn now(target: QuestionId, caret: CaretTarget) -> Self {
        Self { target, caret, timing: Timing::Immediate }
    }

    pub fn deferred(target: QuestionId, caret: CaretTarget) -> Self {
        Self { target, caret, timing: Timing::Deferred }
    }
}

/// Result of one keystroke
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyOutcome {
    /// Suppress the browser's default handling
    pub intercept: bool,
    pub mutation: Option<Mutation>,
    pub focus: Option<FocusTransfer>,
}

impl KeyOutcome {
    /// Not ours; let the textarea handle it
    pub fn pass() -> Self {
        Self::default()
    }

    /// Swallow the key and do nothing else
    pub fn suppress() -> Self {
        Self { intercept: true, ..Default::default() }
    }

    fn with_mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = Some(mutation);
        self
    }

    fn with_focus(mut self, focus: FocusTransfer) -> Self {
        self.focus = Some(focus);
        self
    }
}

/// Interpret `stroke` for the item under `caret`.
///
/// `fresh_id` is only called when a new item is created.
pub fn handle_key<F>(stroke: KeyStroke, caret: Caret<'_>, questions: &[Question], fresh_id: F) -> KeyOutcome
where
    F: FnOnce(&[Question]) -> QuestionId,
{
    let Some(idx) = position_of(questions, caret.id) else {
        return KeyOutcome::pass();
    };

    let outcome = match stroke.key {
        Key::ArrowUp | Key::ArrowDown if stroke.is_ctrl_shift() => move_item(stroke.key, caret, idx, questions),
        Key::Backspace => backspace(caret, idx, questions),
        Key::Enter if stroke.unmodified() => enter(idx, questions, fresh_id),
        Key::ArrowDown if stroke.unmodified() => arrow_down(caret, idx, questions),
        Key::ArrowUp if stroke.unmodified() => arrow_up(caret, idx, questions),
        Key::Tab if stroke.unmodified() => tab(idx, questions, fresh_id),
        Key::Tab if stroke.is_shift_only() => shift_tab(idx, questions),
        // Shift+Enter and everything else keep their default behavior
        _ => KeyOutcome::pass(),
    };

    if outcome.intercept {
        log::debug!("[NAV] {:?} on {} -> {:?}", stroke.key, caret.id, outcome);
    }
    outcome
}

fn backspace(caret: Caret<'_>, idx: usize, questions: &[Question]) -> KeyOutcome {
    let current = &questions[idx];

    if caret::is_blank_multiline(caret.text) {
        if caret.offset == 0 {
            return KeyOutcome::suppress();
        }
        let text = caret::remove_char_before(caret.text, caret.offset);
        return KeyOutcome::suppress()
            .with_mutation(Mutation::SetText { id: current.id.clone(), text })
            .with_focus(FocusTransfer::deferred(current.id.clone(), CaretTarget::At(caret.offset - 1)));
    }

    if !current.is_blank() {
        return KeyOutcome::pass();
    }

    if questions.len() <= 1 {
        return KeyOutcome::suppress();
    }

    let removal = KeyOutcome::suppress().with_mutation(Mutation::Remove { id: current.id.clone() });
    if idx == 0 {
        removal.with_focus(FocusTransfer::now(questions[1].id.clone(), CaretTarget::Start))
    } else {
        removal.with_focus(FocusTransfer::deferred(questions[idx - 1].id.clone(), CaretTarget::End))
    }
}

fn enter<F>(idx: usize, questions: &[Question], fresh_id: F) -> KeyOutcome
where
    F: FnOnce(&[Question]) -> QuestionId,
{
    let current = &questions[idx];
    let next_is_blank = questions.get(idx + 1).is_some_and(Question::is_blank);

    if current.is_blank() || next_is_blank {
        return KeyOutcome::suppress();
    }

    let question = Question::empty(fresh_id(questions));
    let target = question.id.clone();
    KeyOutcome::suppress()
        .with_mutation(Mutation::InsertAfter { anchor: current.id.clone(), question })
        .with_focus(FocusTransfer::deferred(target, CaretTarget::Start))
}

fn arrow_down(caret: Caret<'_>, idx: usize, questions: &[Question]) -> KeyOutcome {
    if !caret::is_last_line(caret.text, caret.offset) {
        return KeyOutcome::pass();
    }
    match questions.get(idx + 1) {
        Some(next) => KeyOutcome::suppress().with_focus(FocusTransfer::now(next.id.clone(), CaretTarget::EndOfFirstLine)),
        None => KeyOutcome::suppress(),
    }
}

fn arrow_up(caret: Caret<'_>, idx: usize, questions: &[Question]) -> KeyOutcome {
    if !caret::is_first_line(caret.text, caret.offset) {
        return KeyOutcome::pass();
    }
    match idx.checked_sub(1).map(|i| &questions[i]) {
        Some(prev) => KeyOutcome::suppress().with_focus(FocusTransfer::now(prev.id.clone(), CaretTarget::EndOfLastLine)),
        None => KeyOutcome::suppress(),
    }
}

fn tab<F>(idx: usize, questions: &[Question], fresh_id: F) -> KeyOutcome
where
    F: FnOnce(&[Question]) -> QuestionId,
{
    if let Some(next) = questions.get(idx + 1) {
        return KeyOutcome::suppress().with_focus(FocusTransfer::now(next.id.clone(), CaretTarget::End));
    }
    if questions[idx].is_blank() {
        return KeyOutcome::suppress();
    }
    let question = Question::empty(fresh_id(questions));
    let target = question.id.clone();
    KeyOutcome::suppress()
        .with_mutation(Mutation::Push { question })
        .with_focus(FocusTransfer::deferred(target, CaretTarget::Start))
}

fn shift_tab(idx: usize, questions: &[Question]) -> KeyOutcome {
    match idx.checked_sub(1).map(|i| &questions[i]) {
        Some(prev) => KeyOutcome::suppress().with_focus(FocusTransfer::now(prev.id.clone(), CaretTarget::End)),
        None => KeyOutcome::suppress(),
    }
}

/// Ctrl+Shift+Up/Down. At the boundary the key is left to the browser.
fn move_item(key: Key, caret: Caret<'_>, idx: usize, questions: &[Question]) -> KeyOutcome {
    let id = caret.id.clone();
    let mutation = match key {
        Key::ArrowUp if idx > 0 => Mutation::SwapPrevious { id: id.clone() },
        Key::ArrowDown if idx + 1 < questions.len() => Mutation::SwapNext { id: id.clone() },
        _ => return KeyOutcome::pass(),
    };
    // the moved node can lose focus when the list re-renders
    KeyOutcome::suppress()
        .with_mutation(mutation)
        .with_focus(FocusTransfer::deferred(id, CaretTarget::At(caret.offset)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[(&str, &str)]) -> Vec<Question> {
        items.iter().map(|(id, text)| Question::new((*id).into(), *text)).collect()
    }

    fn press(stroke: KeyStroke, questions: &[Question], id: &str, offset: usize) -> KeyOutcome {
        let id = QuestionId::from(id);
        let text = questions[position_of(questions, &id).unwrap()].text.clone();
        let caret = Caret { id: &id, text: &text, offset };
        handle_key(stroke, caret, questions, |_| QuestionId::from("new"))
    }

    fn apply(outcome: &KeyOutcome, questions: &mut Vec<Question>) {
        if let Some(m) = &outcome.mutation {
            m.apply(questions);
        }
    }

    // Backspace

    #[test]
    fn test_backspace_at_start_of_blank_lines_is_suppressed() {
        let questions = list(&[("a", "\n\n")]);
        assert_eq!(press(KeyStroke::plain(Key::Backspace), &questions, "a", 0), KeyOutcome::suppress());
    }

    #[test]
    fn test_backspace_inside_blank_lines_merges_them() {
        let mut questions = list(&[("a", "x"), ("b", " \n\n")]);
        let outcome = press(KeyStroke::plain(Key::Backspace), &questions, "b", 2);
        assert!(outcome.intercept);
        assert_eq!(outcome.focus, Some(FocusTransfer::deferred("b".into(), CaretTarget::At(1))));

        apply(&outcome, &mut questions);
        assert_eq!(questions[1].text, " \n");
        assert_eq!(questions.len(), 2);
    }

    #[test]
    fn test_backspace_on_first_empty_item_focuses_new_first() {
        let mut questions = list(&[("a", ""), ("b", "second"), ("c", "third")]);
        let outcome = press(KeyStroke::plain(Key::Backspace), &questions, "a", 0);
        assert_eq!(outcome.focus, Some(FocusTransfer::now("b".into(), CaretTarget::Start)));

        apply(&outcome, &mut questions);
        assert_eq!(questions[0].id, "b".into());
        assert_eq!(questions.len(), 2);
    }

    #[test]
    fn test_backspace_on_later_empty_item_focuses_previous_end() {
        let mut questions = list(&[("a", "first"), ("b", "")]);
        let outcome = press(KeyStroke::plain(Key::Backspace), &questions, "b", 0);
        assert_eq!(outcome.focus, Some(FocusTransfer::deferred("a".into(), CaretTarget::End)));

        apply(&outcome, &mut questions);
        assert_eq!(questions.len(), 1);
        assert_eq!(CaretTarget::End.resolve(&questions[0].text), 5);
    }

    #[test]
    fn test_backspace_whitespace_only_item_counts_as_empty() {
        let mut questions = list(&[("a", "first"), ("b", "   ")]);
        let outcome = press(KeyStroke::plain(Key::Backspace), &questions, "b", 3);
        apply(&outcome, &mut questions);
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn test_backspace_keeps_last_remaining_item() {
        let mut questions = list(&[("a", "")]);
        let outcome = press(KeyStroke::plain(Key::Backspace), &questions, "a", 0);
        assert!(outcome.mutation.is_none());
        assert!(outcome.focus.is_none());

        apply(&outcome, &mut questions);
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn test_backspace_in_text_is_default_behavior() {
        let questions = list(&[("a", "abc"), ("b", "")]);
        assert_eq!(press(KeyStroke::plain(Key::Backspace), &questions, "a", 2), KeyOutcome::pass());
    }

    #[test]
    fn test_blank_multiline_rule_wins_over_deletion() {
        // "\n" trims to empty but is handled as two blank lines, not deleted
        let mut questions = list(&[("a", "x"), ("b", "\n")]);
        let outcome = press(KeyStroke::plain(Key::Backspace), &questions, "b", 1);
        apply(&outcome, &mut questions);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].text, "");
    }

    // Enter

    #[test]
    fn test_enter_inserts_after_current() {
        let mut questions = list(&[("a", "one"), ("b", "two")]);
        let outcome = press(KeyStroke::plain(Key::Enter), &questions, "a", 3);
        assert_eq!(outcome.focus, Some(FocusTransfer::deferred("new".into(), CaretTarget::Start)));

        apply(&outcome, &mut questions);
        let ids: Vec<_> = questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "new", "b"]);
        assert!(questions[1].text.is_empty());
        assert!(!questions[1].answered && !questions[1].highlighted);
    }

    #[test]
    fn test_enter_twice_creates_only_one_empty_item() {
        let mut questions = list(&[("a", "one")]);
        let first = press(KeyStroke::plain(Key::Enter), &questions, "a", 3);
        apply(&first, &mut questions);
        assert_eq!(questions.len(), 2);

        let second = press(KeyStroke::plain(Key::Enter), &questions, "new", 0);
        assert!(second.intercept);
        assert!(second.mutation.is_none());
        apply(&second, &mut questions);
        assert_eq!(questions.len(), 2);
    }

    #[test]
    fn test_enter_before_empty_next_is_suppressed() {
        let questions = list(&[("a", "one"), ("b", " ")]);
        assert_eq!(press(KeyStroke::plain(Key::Enter), &questions, "a", 3), KeyOutcome::suppress());
    }

    #[test]
    fn test_enter_uses_fresh_distinct_id() {
        let questions = list(&[("a", "one"), ("b", "two")]);
        let id = QuestionId::from("a");
        let caret = Caret { id: &id, text: "one", offset: 3 };
        let outcome = handle_key(KeyStroke::plain(Key::Enter), caret, &questions, QuestionId::generate);
        match outcome.mutation {
            Some(Mutation::InsertAfter { question, .. }) => {
                assert!(position_of(&questions, &question.id).is_none());
            }
            other => panic!("expected insert, got {:?}", other),
        }
    }

    #[test]
    fn test_shift_enter_is_not_intercepted() {
        let questions = list(&[("a", "one")]);
        assert_eq!(press(KeyStroke::shift(Key::Enter), &questions, "a", 3), KeyOutcome::pass());
    }

    // Arrows

    #[test]
    fn test_arrow_down_on_last_line_lands_at_end_of_next_first_line() {
        let questions = list(&[("a", "x"), ("b", "ab\ncd")]);
        let outcome = press(KeyStroke::plain(Key::ArrowDown), &questions, "a", 1);
        let focus = outcome.focus.unwrap();
        assert_eq!(focus.target, "b".into());
        assert_eq!(focus.timing, Timing::Immediate);
        assert_eq!(focus.caret.resolve(&questions[1].text), 2);
    }

    #[test]
    fn test_arrow_down_inside_multiline_is_native() {
        let questions = list(&[("a", "one\ntwo"), ("b", "x")]);
        assert_eq!(press(KeyStroke::plain(Key::ArrowDown), &questions, "a", 2), KeyOutcome::pass());
    }

    #[test]
    fn test_arrow_down_on_last_item_is_swallowed() {
        let questions = list(&[("a", "one")]);
        assert_eq!(press(KeyStroke::plain(Key::ArrowDown), &questions, "a", 0), KeyOutcome::suppress());
    }

    #[test]
    fn test_arrow_up_on_first_line_lands_at_end_of_previous_last_line() {
        let questions = list(&[("a", "ab\ncd\nefg"), ("b", "x\ny")]);
        let outcome = press(KeyStroke::plain(Key::ArrowUp), &questions, "b", 1);
        let focus = outcome.focus.unwrap();
        assert_eq!(focus.target, "a".into());
        assert_eq!(focus.caret.resolve(&questions[0].text), 9);
    }

    #[test]
    fn test_arrow_up_below_first_line_is_native() {
        let questions = list(&[("a", "x"), ("b", "x\ny")]);
        assert_eq!(press(KeyStroke::plain(Key::ArrowUp), &questions, "b", 2), KeyOutcome::pass());
    }

    // Tab

    #[test]
    fn test_tab_moves_to_end_of_next() {
        let questions = list(&[("a", ""), ("b", "two")]);
        let outcome = press(KeyStroke::plain(Key::Tab), &questions, "a", 0);
        assert_eq!(outcome.focus, Some(FocusTransfer::now("b".into(), CaretTarget::End)));
        assert!(outcome.mutation.is_none());
    }

    #[test]
    fn test_tab_on_last_non_empty_item_appends() {
        let mut questions = list(&[("a", "one"), ("b", "two")]);
        let outcome = press(KeyStroke::plain(Key::Tab), &questions, "b", 0);
        assert_eq!(outcome.focus, Some(FocusTransfer::deferred("new".into(), CaretTarget::Start)));

        apply(&outcome, &mut questions);
        assert_eq!(questions.last().unwrap().id, "new".into());
    }

    #[test]
    fn test_tab_on_last_empty_item_is_noop() {
        let questions = list(&[("a", "one"), ("b", "")]);
        assert_eq!(press(KeyStroke::plain(Key::Tab), &questions, "b", 0), KeyOutcome::suppress());
    }

    #[test]
    fn test_shift_tab_moves_to_end_of_previous() {
        let questions = list(&[("a", "one"), ("b", "two")]);
        let outcome = press(KeyStroke::shift(Key::Tab), &questions, "b", 0);
        assert_eq!(outcome.focus, Some(FocusTransfer::now("a".into(), CaretTarget::End)));
        assert_eq!(press(KeyStroke::shift(Key::Tab), &questions, "a", 0), KeyOutcome::suppress());
    }

    // Reorder keys

    #[test]
    fn test_ctrl_shift_arrows_swap_neighbours() {
        let mut questions = list(&[("a", "1"), ("b", "2"), ("c", "3")]);
        let outcome = press(KeyStroke::ctrl_shift(Key::ArrowUp), &questions, "b", 1);
        assert_eq!(outcome.focus, Some(FocusTransfer::deferred("b".into(), CaretTarget::At(1))));
        apply(&outcome, &mut questions);
        let ids: Vec<_> = questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);

        let outcome = press(KeyStroke::ctrl_shift(Key::ArrowDown), &questions, "a", 0);
        apply(&outcome, &mut questions);
        let ids: Vec<_> = questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_ctrl_shift_arrows_at_boundaries_are_native() {
        let questions = list(&[("a", "1"), ("b", "2")]);
        assert_eq!(press(KeyStroke::ctrl_shift(Key::ArrowUp), &questions, "a", 0), KeyOutcome::pass());
        assert_eq!(press(KeyStroke::ctrl_shift(Key::ArrowDown), &questions, "b", 0), KeyOutcome::pass());
    }

    // Mutations

    #[test]
    fn test_mutations_resolve_by_id_in_fresh_draft() {
        let mut questions = list(&[("a", "1"), ("b", "2")]);
        // an insert queued before another insert still lands after its anchor
        Mutation::InsertAfter { anchor: "a".into(), question: Question::empty("x".into()) }.apply(&mut questions);
        Mutation::InsertAfter { anchor: "b".into(), question: Question::empty("y".into()) }.apply(&mut questions);
        let ids: Vec<_> = questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "x", "b", "y"]);

        Mutation::Remove { id: "gone".into() }.apply(&mut questions);
        Mutation::SetText { id: "gone".into(), text: "t".into() }.apply(&mut questions);
        assert_eq!(questions.len(), 4);
    }

    #[test]
    fn test_remove_never_empties_the_list() {
        let mut questions = list(&[("a", "")]);
        Mutation::Remove { id: "a".into() }.apply(&mut questions);
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn test_unknown_item_is_ignored() {
        let questions = list(&[("a", "")]);
        let id = QuestionId::from("zzz");
        let caret = Caret { id: &id, text: "", offset: 0 };
        assert_eq!(handle_key(KeyStroke::plain(Key::Enter), caret, &questions, QuestionId::generate), KeyOutcome::pass());
    }

    #[test]
    fn test_key_from_dom() {
        assert_eq!(Key::from_dom("ArrowDown"), Key::ArrowDown);
        assert_eq!(Key::from_dom("a"), Key::Other);
    }
}
