//! Todo Card Component
//!
//! One item: completion checkbox, text (click to edit), delete button.

use leptos::prelude::*;

use crate::components::EditField;
use crate::confirm::{confirmed_remove, BrowserConfirm};
use crate::context::AppContext;
use crate::models::Item;
use crate::partition::display_lines;
use crate::store::{use_todo_store, TodoStateStoreFields};

/// Item text as text nodes with `<br>` between lines
fn text_with_breaks(text: &str) -> impl IntoView {
    display_lines(text)
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let line = line.to_string();
            view! {
                {(i > 0).then(|| view! { <br /> })}
                {line}
            }
        })
        .collect_view()
}

/// A single card in either group
#[component]
pub fn TodoCard(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_todo_store();

    let Item { id, text, completed } = item;
    let card_class = if completed { "todo-card todo-completed" } else { "todo-card" };

    let toggle_id = id.clone();
    let on_toggle = move |_| ctx.mutate_or_reload("TOGGLE", |repo| repo.toggle_completion(&toggle_id));

    let delete_id = id.clone();
    let on_delete = move |_| {
        let prompt = ctx.config().delete_prompt;
        ctx.mutate("DELETE", |repo| confirmed_remove(repo, &BrowserConfirm, &prompt, &delete_id));
    };

    // Clicks inside an open edit surface must not restart the session
    let begin_id = id.clone();
    let on_text_click = move |_| {
        if store.session().with_untracked(|session| session.is_editing(&begin_id)) {
            return;
        }
        log::debug!("[EDIT] Editing item {}", begin_id);
        store.session().write().begin(&begin_id);
    };

    let edit_id = id.clone();
    let is_editing = move || store.session().read().is_editing(&edit_id);
    let field_id = id.clone();
    let text_body = move || {
        if is_editing() {
            view! { <EditField item_id=field_id.clone() initial_text=text.clone() /> }.into_any()
        } else {
            text_with_breaks(&text).into_any()
        }
    };

    view! {
        <div class=card_class data-id=id>
            <input type="checkbox" prop:checked=completed on:change=on_toggle />
            <span class="todo-text" on:click=on_text_click>{text_body}</span>
            <button class="delete-btn" on:click=on_delete>"Delete"</button>
        </div>
    }
}
