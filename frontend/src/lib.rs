//! This crate provides the WebAssembly (WASM) entry point for the frontend
//! of the catalog application.
//!
//! It is responsible for hydrating the server-rendered HTML, enabling
//! client-side interactivity (tab switching, image load events, external
//! links), and initializing client-side logging.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates the Leptos application on the client-side.
///
/// This function is the WASM entry point. It initializes `console_log` and
/// `console_error_panic_hook` for debugging, then mounts the main Leptos
/// component (`app::component`) to hydrate the DOM.
pub fn hydrate() {
    use app::component;
    // Initialize console logging for client-side debugging.
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::hydrate_body(component);
}
