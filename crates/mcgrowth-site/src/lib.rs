//! MCGrowth marketing site.
//!
//! A Leptos SSR landing page with client hydration for the interactive
//! pieces: the ROI snapshot card, the FAQ accordion, and the mobile nav.

pub mod app;
pub mod components;
pub mod error;
pub mod estimate;
#[cfg(feature = "ssr")]
pub mod fileserv;
pub mod pages;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    leptos::mount_to_body(App);
}
