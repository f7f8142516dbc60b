//! To-Do Cards Frontend Entry Point

mod models;
mod repository;
mod partition;
mod edit_session;
mod confirm;
mod config;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use log::LevelFilter;
use wasm_bindgen::JsValue;

/// Recent log lines kept in memory
const LOG_CAPACITY: usize = 500;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger(LevelFilter::Trace, LOG_CAPACITY) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("Logger init failed: {}", e)));
    }

    let config = AppConfig::from_document();
    log::set_max_level(config.log_level);
    log::info!("[APP] Starting with storage key '{}'", config.storage_key);

    mount_to_body(move || view! { <App config=config /> });
}
