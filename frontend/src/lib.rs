//! The browser client: a single page for recording income and expenses.
//!
//! Built to WebAssembly and loaded by the shell page the server hosts. All
//! data goes through the JSON API under [api::API_ROOT].

pub mod api;
pub mod components;
pub mod controller;
pub mod form;
mod logging;
pub mod notifier;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_utils;

use wasm_bindgen::prelude::wasm_bindgen;

pub use components::App;

/// Entry point called once the wasm module is loaded.
#[wasm_bindgen(start)]
pub fn start() {
    logging::init();
    tracing::info!("Starting finance tracker client");
    yew::Renderer::<App>::new().render();
}
