//! Venue Admin Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod panels;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let level = option_env!("VENUE_LOG_LEVEL")
        .and_then(|l| l.parse().ok())
        .unwrap_or(log::Level::Info);
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }
    mount_to_body(App);
}
