//! User Confirmation
//!
//! Blocking yes/no prompt and the confirmation-gated delete.

use crate::models::Item;
use crate::repository::{ItemRepository, KeyValueStore, StorageResult};

/// A blocking yes/no question to the user
pub trait Confirm {
    /// `true` only if the user explicitly agreed
    fn confirm(&self, message: &str) -> bool;
}

/// `window.confirm()`; a missing window or dialog failure counts as "no"
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Prompt text naming the item by the first line of its text
pub fn delete_prompt(base: &str, item: &Item) -> String {
    match item.text.lines().next().map(str::trim) {
        Some(first_line) if !first_line.is_empty() => format!("{}\n\n{}", base, first_line),
        _ => base.to_string(),
    }
}

/// Ask before removing `id`. Unknown ids are not prompted for; a declined
/// prompt changes nothing.
pub fn confirmed_remove<S: KeyValueStore>(
    repo: &ItemRepository<S>,
    confirm: &impl Confirm,
    prompt: &str,
    id: &str,
) -> StorageResult<bool> {
    let Some(item) = repo.find_by_id(id)? else {
        return Ok(false);
    };
    if !confirm.confirm(&delete_prompt(prompt, &item)) {
        log::debug!("[DELETE] Declined for item {}", id);
        return Ok(false);
    }
    repo.remove(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;
    use std::cell::RefCell;

    struct FakeConfirm {
        answer: bool,
        asked: RefCell<Vec<String>>,
    }

    impl FakeConfirm {
        fn answering(answer: bool) -> Self {
            Self { answer, asked: RefCell::new(Vec::new()) }
        }
    }

    impl Confirm for FakeConfirm {
        fn confirm(&self, message: &str) -> bool {
            self.asked.borrow_mut().push(message.to_string());
            self.answer
        }
    }

    fn three_items() -> MemoryStore {
        let items = vec![Item::new("1", "one"), Item::new("2", "two\nmore"), Item::new("3", "three")];
        MemoryStore::with_entry("todos", &serde_json::to_string(&items).unwrap())
    }

    #[test]
    fn test_declined_delete_keeps_collection() {
        let backend = three_items();
        let repo = ItemRepository::new(&backend, "todos");
        let confirm = FakeConfirm::answering(false);

        assert!(!confirmed_remove(&repo, &confirm, "Delete?", "2").unwrap());

        let ids: Vec<String> = repo.list().unwrap().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(backend.write_count(), 0);
        assert_eq!(confirm.asked.borrow().len(), 1);
    }

    #[test]
    fn test_accepted_delete_removes_item() {
        let backend = three_items();
        let repo = ItemRepository::new(&backend, "todos");
        let confirm = FakeConfirm::answering(true);

        assert!(confirmed_remove(&repo, &confirm, "Delete?", "2").unwrap());

        let ids: Vec<String> = repo.list().unwrap().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(confirm.asked.borrow()[0], "Delete?\n\ntwo");
    }

    #[test]
    fn test_unknown_id_is_not_prompted() {
        let backend = three_items();
        let repo = ItemRepository::new(&backend, "todos");
        let confirm = FakeConfirm::answering(true);

        assert!(!confirmed_remove(&repo, &confirm, "Delete?", "9").unwrap());
        assert!(confirm.asked.borrow().is_empty());
    }

    #[test]
    fn test_delete_prompt_without_text() {
        assert_eq!(delete_prompt("Delete?", &Item::new("1", "")), "Delete?");
    }
}
