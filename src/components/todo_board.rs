//! Todo Board Component
//!
//! Pending and completed groups, rebuilt from the whole collection on every change.

use leptos::prelude::*;

use crate::components::TodoCard;
use crate::partition::partition;
use crate::store::{use_todo_store, TodoStateStoreFields};

#[component]
pub fn TodoBoard() -> impl IntoView {
    let store = use_todo_store();

    let pending = move || {
        partition(&store.items().read())
            .pending
            .into_iter()
            .map(|item| view! { <TodoCard item=item /> })
            .collect_view()
    };
    let completed = move || {
        partition(&store.items().read())
            .completed
            .into_iter()
            .map(|item| view! { <TodoCard item=item /> })
            .collect_view()
    };

    view! {
        <section class="todo-group">
            <h2>"Pending"</h2>
            <div id="uncompleted-todo-list" class="todo-list">{pending}</div>
        </section>
        <section class="todo-group">
            <h2>"Completed"</h2>
            <div id="completed-todo-list" class="todo-list">{completed}</div>
        </section>
    }
}
