//! View Grouping
//!
//! Splits the collection into the pending and completed groups.

use crate::models::Item;

/// Items grouped by completion, each group in collection order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub pending: Vec<Item>,
    pub completed: Vec<Item>,
}

pub fn partition(items: &[Item]) -> Partition {
    let (completed, pending): (Vec<Item>, Vec<Item>) = items.iter().cloned().partition(|item| item.completed);
    Partition { pending, completed }
}

/// Lines of an item's text, shown separated by `<br>`
pub fn display_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, completed: bool) -> Item {
        Item {
            completed,
            ..Item::new(id, format!("Item {}", id))
        }
    }

    #[test]
    fn test_partition_covers_every_item_once() {
        let items = vec![
            make_item("1", false),
            make_item("2", true),
            make_item("3", false),
            make_item("4", true),
        ];

        let groups = partition(&items);

        let pending: Vec<&str> = groups.pending.iter().map(|i| i.id.as_str()).collect();
        let completed: Vec<&str> = groups.completed.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(pending, vec!["1", "3"]);
        assert_eq!(completed, vec!["2", "4"]);
        assert_eq!(groups.pending.len() + groups.completed.len(), items.len());
        assert!(groups.pending.iter().all(|i| !i.completed));
        assert!(groups.completed.iter().all(|i| i.completed));
    }

    #[test]
    fn test_partition_empty() {
        assert_eq!(partition(&[]), Partition::default());
    }

    #[test]
    fn test_display_lines() {
        assert_eq!(display_lines("a\nb\n\nc"), vec!["a", "b", "", "c"]);
        assert_eq!(display_lines("<b>x</b>"), vec!["<b>x</b>"]);
    }
}
