//! Edit Field Component
//!
//! Multi-line edit surface for one item. Commits on blur or on Enter without
//! Shift; Shift+Enter inserts a line break.

use leptos::html::Textarea;
use leptos::prelude::*;
use leptos_caret::make_on_caret_click;

use crate::context::AppContext;
use crate::edit_session::{key_intent, KeyIntent};
use crate::store::{use_todo_store, TodoStateStoreFields};

#[component]
pub fn EditField(item_id: String, initial_text: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_todo_store();
    let textarea_ref = NodeRef::<Textarea>::new();
    let style = ctx.config().editor.inline_style();

    // Focus as soon as the surface is mounted
    Effect::new(move |_| {
        if let Some(textarea) = textarea_ref.get() {
            let _ = textarea.focus();
        }
    });

    let item_id = StoredValue::new(item_id);
    let commit = move || {
        // The surface may already be unmounted when its final blur arrives
        let Some(id) = item_id.try_get_value() else {
            return;
        };
        let Some(textarea) = textarea_ref.try_get_untracked().flatten() else {
            return;
        };
        let value = textarea.value();
        // Enter commits, then the removed surface blurs; only the first counts
        if !store.session().with_untracked(|session| session.is_editing(&id)) {
            return;
        }
        log::debug!("[EDIT] Commit for item {}", id);
        // Only a finished session notifies; a failed save keeps this surface mounted
        let mut result = None;
        store.session().maybe_update(|session| {
            result = session.commit_with(&id, || ctx.with_repo(|repo| repo.update_text(&id, &value)));
            matches!(result, Some(Ok(_)))
        });
        if let Some(result) = result {
            ctx.settle("EDIT", result, false);
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if key_intent(&ev.key(), ev.shift_key(), ev.is_composing()) == KeyIntent::Commit {
            ev.prevent_default();
            commit();
        }
    };

    view! {
        <textarea
            class="todo-edit"
            style=style
            node_ref=textarea_ref
            prop:value=initial_text
            on:click=make_on_caret_click(textarea_ref)
            on:blur=move |_| commit()
            on:keydown=on_keydown
        ></textarea>
    }
}
