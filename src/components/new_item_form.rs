//! New Item Form Component
//!
//! Single-input form appending a pending item.

use leptos::prelude::*;

use crate::context::AppContext;

/// Form for creating new items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_text, set_new_text) = signal(String::new());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        match ctx.with_repo(|repo| repo.add(&text)) {
            Ok(Some(_)) => {
                set_new_text.set(String::new());
                ctx.reload();
            }
            Ok(None) => {}
            Err(e) => ctx.report("ADD", &e),
        }
    };

    view! {
        <form id="todo-form" class="new-item-form" on:submit=create_item>
            <input
                id="todo-input"
                type="text"
                placeholder="Add new to-do..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
