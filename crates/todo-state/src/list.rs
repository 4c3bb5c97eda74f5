//! List Utilities
//!
//! Immutable-update helpers over a todo list. Every edit returns a fresh
//! `Vec`; lookups are by id, and a missing id yields `None` so callers can
//! skip the write entirely.

use crate::model::{FilterMode, TodoId, TodoItem, TodoStats};

/// Position of the item with `id`, if present.
pub fn index_of(list: &[TodoItem], id: TodoId) -> Option<usize> {
    list.iter().position(|item| item.id == id)
}

/// New list with `item` appended.
pub fn appended(list: &[TodoItem], item: TodoItem) -> Vec<TodoItem> {
    let mut next = Vec::with_capacity(list.len() + 1);
    next.extend_from_slice(list);
    next.push(item);
    next
}

/// New list with the item `id` replaced by `f(item)`, in the same position.
pub fn replaced(
    list: &[TodoItem],
    id: TodoId,
    f: impl FnOnce(&TodoItem) -> TodoItem,
) -> Option<Vec<TodoItem>> {
    let index = index_of(list, id)?;
    let mut next = list.to_vec();
    next[index] = f(&list[index]);
    Some(next)
}

/// New list without the item `id`.
pub fn removed(list: &[TodoItem], id: TodoId) -> Option<Vec<TodoItem>> {
    let index = index_of(list, id)?;
    let mut next = list.to_vec();
    next.remove(index);
    Some(next)
}

/// Items visible under `mode`, in list order.
pub fn filtered(list: &[TodoItem], mode: FilterMode) -> Vec<TodoItem> {
    list.iter().filter(|item| mode.matches(item)).cloned().collect()
}

pub fn stats(list: &[TodoItem]) -> TodoStats {
    let total = list.len();
    let completed = list.iter().filter(|item| item.is_complete).count();
    let percent_completed = if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64 * 100.0
    };

    TodoStats {
        total,
        completed,
        uncompleted: total - completed,
        percent_completed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_list(states: &[bool]) -> Vec<TodoItem> {
        states
            .iter()
            .enumerate()
            .map(|(i, done)| TodoItem {
                id: i as TodoId,
                text: format!("Item {}", i),
                is_complete: *done,
            })
            .collect()
    }

    #[test]
    fn test_replaced_keeps_position() {
        let list = make_list(&[false, false, false]);
        let next = replaced(&list, 1, |item| item.with_text("changed")).unwrap();

        assert_eq!(next.len(), 3);
        assert_eq!(next[1].text, "changed");
        assert_eq!(next[1].id, 1);
        assert_eq!(next[0], list[0]);
        assert_eq!(next[2], list[2]);
        // source untouched
        assert_eq!(list[1].text, "Item 1");
    }

    #[test]
    fn test_missing_id_is_none() {
        let list = make_list(&[true]);
        assert!(replaced(&list, 9, |item| item.toggled()).is_none());
        assert!(removed(&list, 9).is_none());
        assert!(removed(&[], 0).is_none());
    }

    #[test]
    fn test_removed_drops_exactly_one() {
        let list = make_list(&[false, true, false]);
        let next = removed(&list, 1).unwrap();
        let ids: Vec<TodoId> = next.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn test_filtered_partitions_in_order() {
        let list = make_list(&[true, false, true, false, false]);
        let done = filtered(&list, FilterMode::ShowCompleted);
        let open = filtered(&list, FilterMode::ShowUncompleted);
        let all = filtered(&list, FilterMode::ShowAll);

        assert_eq!(all, list);
        assert_eq!(done.iter().map(|i| i.id).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(open.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3, 4]);
        assert!(done.iter().all(|i| i.is_complete));
        assert!(open.iter().all(|i| !i.is_complete));
        assert_eq!(done.len() + open.len(), all.len());
    }

    #[test]
    fn test_stats_empty_list() {
        let s = stats(&[]);
        assert_eq!(s.total, 0);
        assert_eq!(s.completed, 0);
        assert_eq!(s.uncompleted, 0);
        assert_eq!(s.percent_completed, 0.0);
        assert_eq!(s.percent_rounded(), 0);
    }

    #[test]
    fn test_stats_counts() {
        let s = stats(&make_list(&[true, false, false]));
        assert_eq!(s.total, 3);
        assert_eq!(s.completed, 1);
        assert_eq!(s.uncompleted, 2);
        assert_eq!(s.completed + s.uncompleted, s.total);
        assert_eq!(s.percent_rounded(), 33);
    }
}
