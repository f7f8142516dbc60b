//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::repository::{BrowserStore, ItemRepository, StorageResult};
use crate::store::{TodoStateStoreFields, TodoStore};

pub type Repo = ItemRepository<BrowserStore>;

/// What the view does after a storage operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Followup {
    pub reload: bool,
    pub clear_error: bool,
}

/// A change always reloads. No change or an error reloads only when the
/// view may already show a state storage does not hold.
pub fn followup(result: &StorageResult<bool>, restore_view: bool) -> Followup {
    match result {
        Ok(true) => Followup { reload: true, clear_error: true },
        Ok(false) | Err(_) => Followup { reload: restore_view, clear_error: false },
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload items from storage - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload items from storage - write
    set_reload_trigger: WriteSignal<u32>,
    repo: StoredValue<Repo>,
    config: StoredValue<AppConfig>,
    store: TodoStore,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        repo: Repo,
        config: AppConfig,
        store: TodoStore,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            repo: StoredValue::new(repo),
            config: StoredValue::new(config),
            store,
        }
    }

    /// Trigger a reload of items
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn with_repo<T>(&self, f: impl FnOnce(&Repo) -> T) -> T {
        self.repo.with_value(f)
    }

    /// Run a storage operation; reload when it reports a change, surface errors.
    pub fn mutate(&self, action: &str, op: impl FnOnce(&Repo) -> StorageResult<bool>) {
        let result = self.with_repo(op);
        self.settle(action, result, false);
    }

    /// Like `mutate`, but always reloads so controls the browser already
    /// changed (checkboxes) snap back to the stored state.
    pub fn mutate_or_reload(&self, action: &str, op: impl FnOnce(&Repo) -> StorageResult<bool>) {
        let result = self.with_repo(op);
        self.settle(action, result, true);
    }

    /// Apply the outcome of a finished storage operation
    pub fn settle(&self, action: &str, result: StorageResult<bool>, restore_view: bool) {
        let next = followup(&result, restore_view);
        match result {
            Ok(false) => log::debug!("[{}] Nothing to change", action),
            Err(e) => self.report(action, &e),
            Ok(true) => {}
        }
        if next.clear_error {
            self.store.last_error().set(None);
        }
        if next.reload {
            self.reload();
        }
    }

    pub fn report(&self, action: &str, error: &dyn std::error::Error) {
        log::error!("[{}] {}", action, error);
        self.store.last_error().set(Some(error.to_string()));
    }
}
