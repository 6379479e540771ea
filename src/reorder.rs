//! Reorder Protocol
//!
//! Index swaps for the move-up/move-down keys and extract-and-reinsert for
//! drag drops. All operations find the item by id in the draft they are
//! given and do nothing when it is gone.

use crate::models::{position_of, Question, QuestionId};

/// Extract `id` and reinsert it at `target_index` (clamped to the end)
pub fn move_to(draft: &mut Vec<Question>, id: &QuestionId, target_index: usize) {
    let Some(from) = position_of(draft, id) else {
        return;
    };
    let item = draft.remove(from);
    let to = target_index.min(draft.len());
    draft.insert(to, item);
    log::debug!("[REORDER] {} {} -> {}", id, from, to);
}

/// Swap with the predecessor; false when already first
pub fn swap_with_previous(draft: &mut [Question], id: &QuestionId) -> bool {
    match position_of(draft, id) {
        Some(idx) if idx > 0 => {
            draft.swap(idx, idx - 1);
            true
        }
        _ => false,
    }
}

/// Swap with the successor; false when already last
pub fn swap_with_next(draft: &mut [Question], id: &QuestionId) -> bool {
    match position_of(draft, id) {
        Some(idx) if idx + 1 < draft.len() => {
            draft.swap(idx, idx + 1);
            true
        }
        _ => false,
    }
}

/// Final index for an item at `source_index` dropped into the gap before
/// `slot` (0..=len). Gaps after the source shift down by one once the
/// source is extracted.
pub fn slot_to_index(source_index: usize, slot: usize) -> usize {
    if slot > source_index {
        slot - 1
    } else {
        slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(ids: &[&str]) -> Vec<Question> {
        ids.iter().map(|id| Question::new((*id).into(), *id)).collect()
    }

    fn ids(questions: &[Question]) -> Vec<&str> {
        questions.iter().map(|q| q.id.as_str()).collect()
    }

    #[test]
    fn test_drag_first_to_last() {
        let mut draft = list(&["A", "B", "C"]);
        move_to(&mut draft, &"A".into(), 2);
        assert_eq!(ids(&draft), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_drag_last_to_first() {
        let mut draft = list(&["A", "B", "C"]);
        move_to(&mut draft, &"C".into(), 0);
        assert_eq!(ids(&draft), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_target_past_end_is_clamped() {
        let mut draft = list(&["A", "B", "C"]);
        move_to(&mut draft, &"B".into(), 10);
        assert_eq!(ids(&draft), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_move_unknown_id_is_noop() {
        let mut draft = list(&["A", "B"]);
        move_to(&mut draft, &"Z".into(), 0);
        assert_eq!(ids(&draft), vec!["A", "B"]);
    }

    #[test]
    fn test_swaps_at_boundaries() {
        let mut draft = list(&["A", "B", "C"]);
        assert!(!swap_with_previous(&mut draft, &"A".into()));
        assert!(!swap_with_next(&mut draft, &"C".into()));
        assert_eq!(ids(&draft), vec!["A", "B", "C"]);

        assert!(swap_with_previous(&mut draft, &"C".into()));
        assert_eq!(ids(&draft), vec!["A", "C", "B"]);
        assert!(swap_with_next(&mut draft, &"A".into()));
        assert_eq!(ids(&draft), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_slot_to_index() {
        // [A, B, C]: A into the gap after C
        assert_eq!(slot_to_index(0, 3), 2);
        // C into the gap before A
        assert_eq!(slot_to_index(2, 0), 0);
        // gaps adjacent to the source leave it in place
        assert_eq!(slot_to_index(1, 1), 1);
        assert_eq!(slot_to_index(1, 2), 1);
    }
}
