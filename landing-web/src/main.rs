//! Harper landing page, compiled to WebAssembly.
//!
//! Everything with logic lives in `lib_core::layout`; this crate binds it to
//! the browser window and renders the page with Leptos.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod state;
mod utils;

use app::App;
use utils::constants::LOADING_ELEMENT_ID;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Harper landing page starting...");

    utils::dom::hide_loading_screen(LOADING_ELEMENT_ID);

    leptos::mount::mount_to_body(|| view! { <App/> });
}
