//! DeFiSwap Web App - Leptos Frontend
//!
//! Single-page token swap demo: connect a browser wallet, enter amounts,
//! submit. The state machines live in `swap-core`; this crate is the
//! rendering and the `window.ethereum` interop.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("DeFiSwap starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
