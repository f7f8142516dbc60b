//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::edit_session::EditSession;
use crate::models::Item;

/// Board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Full collection as last loaded from storage
    pub items: Vec<Item>,
    /// Which item's text is being edited, if any
    pub session: EditSession,
    /// Message of the last failed storage operation
    pub last_error: Option<String>,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

/// Counts shown in the summary line
pub fn summary(items: &[Item]) -> String {
    let completed = items.iter().filter(|item| item.completed).count();
    format!("{} pending, {} completed", items.len() - completed, completed)
}
