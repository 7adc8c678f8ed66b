mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {err}").into());
    }
    log::info!("Starting Office Management console");

    // Warms the base URL cache; early requests resolve it on their own.
    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
