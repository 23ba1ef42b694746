// SafeLine Pickup Landing Page — Leptos 0.8 Edition
// SafeLine Pickup (c)2024

use leptos::prelude::*;
use safeline_landing::{App, config::SiteConfig, logging};
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = SiteConfig::embedded();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    if let Err(err) = logging::init(&config.logging) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logging disabled: {err}")));
    }
    if let Err(err) = &loaded {
        tracing::warn!(error = %err, "falling back to default site config");
    }

    tracing::info!(brand = %config.brand.name, "mounting landing page");
    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}
