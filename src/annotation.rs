//! Annotation Cycle
//!
//! Each item is plain, highlighted or answered. A single toggle moves it
//! plain -> highlighted -> answered -> plain. At most one item in the list
//! is highlighted at a time.

use crate::models::{position_of, Question, QuestionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Annotation {
    #[default]
    Plain,
    Highlighted,
    Answered,
}

impl Annotation {
    /// Answered wins over a stray highlight flag
    pub fn from_flags(answered: bool, highlighted: bool) -> Self {
        match (answered, highlighted) {
            (true, _) => Annotation::Answered,
            (false, true) => Annotation::Highlighted,
            (false, false) => Annotation::Plain,
        }
    }

    /// `(answered, highlighted)`
    pub fn flags(self) -> (bool, bool) {
        match self {
            Annotation::Plain => (false, false),
            Annotation::Highlighted => (false, true),
            Annotation::Answered => (true, false),
        }
    }

    pub fn next(self) -> Self {
        match self {
            Annotation::Plain => Annotation::Highlighted,
            Annotation::Highlighted => Annotation::Answered,
            Annotation::Answered => Annotation::Plain,
        }
    }
}

/// Advance the annotation of `id`, demoting any other highlighted item
/// when `id` becomes highlighted. Unknown ids leave the draft untouched.
pub fn cycle_annotation(draft: &mut [Question], id: &QuestionId) {
    let Some(idx) = position_of(draft, id) else {
        return;
    };
    let next = draft[idx].annotation().next();
    if next == Annotation::Highlighted {
        for q in draft.iter_mut().filter(|q| q.highlighted) {
            q.highlighted = false;
        }
    }
    draft[idx].set_annotation(next);
    log::debug!("[ANNOTATION] {} -> {:?}", id, next);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(id: &str, answered: bool, highlighted: bool) -> Question {
        Question {
            id: id.into(),
            text: id.to_string(),
            answered,
            highlighted,
        }
    }

    fn highlighted_ids(questions: &[Question]) -> Vec<&str> {
        questions.iter().filter(|q| q.highlighted).map(|q| q.id.as_str()).collect()
    }

    #[test]
    fn test_cycle_is_total() {
        assert_eq!(Annotation::from_flags(false, false).next().flags(), (false, true));
        assert_eq!(Annotation::from_flags(false, true).next().flags(), (true, false));
        assert_eq!(Annotation::from_flags(true, false).next().flags(), (false, false));
    }

    #[test]
    fn test_no_other_states_reachable() {
        let mut state = Annotation::Plain;
        for _ in 0..9 {
            state = state.next();
            assert_ne!(state.flags(), (true, true));
        }
        assert_eq!(state, Annotation::Plain);
    }

    #[test]
    fn test_answered_and_highlighted_reads_as_answered() {
        assert_eq!(Annotation::from_flags(true, true), Annotation::Answered);
        assert_eq!(Annotation::from_flags(true, true).next(), Annotation::Plain);
    }

    #[test]
    fn test_highlight_demotes_previous_highlight() {
        let mut draft = vec![q("a", false, true), q("b", false, false), q("c", true, false)];
        cycle_annotation(&mut draft, &"b".into());

        assert_eq!(highlighted_ids(&draft), vec!["b"]);
        assert_eq!(draft[0].annotation(), Annotation::Plain);
        // answered items are untouched
        assert_eq!(draft[2].annotation(), Annotation::Answered);
    }

    #[test]
    fn test_answered_goes_straight_to_plain() {
        let mut draft = vec![q("a", false, true), q("b", true, false)];
        cycle_annotation(&mut draft, &"b".into());

        assert_eq!(draft[1].annotation(), Annotation::Plain);
        // the other highlight is kept
        assert_eq!(highlighted_ids(&draft), vec!["a"]);
    }

    #[test]
    fn test_highlighted_becomes_answered() {
        let mut draft = vec![q("a", false, true)];
        cycle_annotation(&mut draft, &"a".into());
        assert!(draft[0].answered);
        assert!(!draft[0].highlighted);
    }

    #[test]
    fn test_at_most_one_highlight_after_any_toggle_sequence() {
        let mut draft = vec![q("a", false, false), q("b", false, false), q("c", false, false)];
        let order = ["a", "b", "b", "c", "a", "c", "c", "b", "a"];
        for id in order {
            cycle_annotation(&mut draft, &id.into());
            assert!(highlighted_ids(&draft).len() <= 1);
            assert!(draft.iter().all(|q| !(q.answered && q.highlighted)));
        }
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut draft = vec![q("a", false, true)];
        let before = draft.clone();
        cycle_annotation(&mut draft, &"missing".into());
        assert_eq!(draft, before);
    }
}
