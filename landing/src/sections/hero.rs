use leptos::prelude::*;

use super::site_config;

#[component]
pub fn Hero() -> impl IntoView {
    let brand = site_config().brand;
    view! {
        <section class="hero-section">
            <h1 class="hero-title fade-in-up">{brand.hero_title}</h1>
            <p class="hero-subtitle fade-in-up slow">{brand.tagline}</p>
        </section>
    }
}
