//! Entry point for the WASM application

use lexscan_frontend::App;
use leptos::*;

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Lexscan - Starting Leptos App (backend: {})", lexscan_frontend::api_base_url());

    mount_to_body(|| view! { <App/> })
}
