//! Pokedex - Leptos frontend
//!
//! A server-rendered document shell with a client bootstrap that creates the
//! application store only after the first client render.

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod context;
pub mod devtools;
pub mod error;
pub mod reducer;
pub mod region;
pub mod shell;
pub mod store;
pub mod styles;

pub use app::App;
pub use error::{BootstrapError, Result};
pub use shell::{shell, ShellMeta};

/// Hydration entry point for WASM client
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;
    use shell::MountPoint;

    wasm_logger::init(wasm_logger::Config::default());
    console_error_panic_hook::set_once();
    log::info!("Hydrating pokedex");

    leptos::mount::hydrate_body(|| {
        view! {
            <MountPoint>
                <App />
            </MountPoint>
        }
    });
}
