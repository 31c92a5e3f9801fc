pub mod app;
pub mod components;
pub mod utils;

#[cfg(feature = "ssr")]
pub mod server;

/// WASM entry point, invoked by the generated bundle after it loads
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
