#![allow(non_snake_case)]

use dioxus::prelude::*;
use stores::{auth_store, theme_store};

// Modules
mod components;
mod routes;
mod stores;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting NeuroNest");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Initialize stores on mount
    use_effect(move || {
        theme_store::init_theme();
        auth_store::init_auth();
    });

    rsx! {
        Router::<routes::Route> {}
    }
}
