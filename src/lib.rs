// lib.rs - Root module for the storefront library
//
// The same crate builds the SSR server (feature `ssr`) and the WASM bundle
// that hydrates it in the browser (feature `hydrate`).

#![recursion_limit = "256"]

pub mod web_app;

/// In-memory catalog and sample documents for tests
#[cfg(feature = "catalog-tools")]
pub mod fixtures;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(web_app::App);
        }
    }
}
