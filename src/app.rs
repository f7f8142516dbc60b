//! To-Do Cards App
//!
//! Root component: add form, pending and completed groups, summary line.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewItemForm, TodoBoard};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::edit_session::EditSession;
use crate::repository::{BrowserStore, ItemRepository};
use crate::store::{summary, TodoState, TodoStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(TodoState::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let repo = ItemRepository::new(BrowserStore, config.storage_key.clone());

    // Provide context to all children
    provide_context(store);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), repo, config, store);
    provide_context(ctx);

    // Rebuild the board from storage whenever the trigger changes
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        match ctx.with_repo(|repo| repo.list()) {
            Ok(loaded) => {
                log::debug!("[APP] Loaded {} items, trigger={}", loaded.len(), trigger);
                store.items().set(loaded);
            }
            Err(e) => {
                ctx.report("APP", &e);
                store.items().set(Vec::new());
            }
        }
        store.session().set(EditSession::Viewing);
    });

    view! {
        <main class="todo-app">
            <h1>"To-Do"</h1>

            <NewItemForm />

            {move || store.last_error().get().map(|message| view! {
                <div class="error-banner">
                    <p>{message}</p>
                    <details>
                        <summary>"Recent log"</summary>
                        <pre class="error-log">{rolling_logger::recent_lines().join("\n")}</pre>
                    </details>
                </div>
            })}

            <TodoBoard />

            <p class="item-count">{move || summary(&store.items().read())}</p>
        </main>
    }
}
