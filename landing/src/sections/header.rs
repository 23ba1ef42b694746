use leptos::prelude::*;

use super::site_config;
use crate::content::NAV_LINKS;
use crate::state::UiFlags;

#[component]
pub fn Header(flags: RwSignal<UiFlags>) -> impl IntoView {
    let brand = site_config().brand.name;

    view! {
        <header class="header fade-in-down">
            <div class="logo">{brand}</div>

            // Hamburger, only visible on narrow viewports
            <div
                class=move || flags.with(|f| f.hamburger_class())
                on:click=move |_| flags.update(|f| f.toggle_menu())
            >
                <span></span>
                <span></span>
                <span></span>
            </div>

            <nav class=move || flags.with(|f| f.nav_class())>
                <ul class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let class = if link.is_cta { "contact-button-header" } else { "" };
                            view! {
                                <li on:click=move |_| flags.update(|f| f.select_nav_link())>
                                    <a
                                        href=link.section.href()
                                        class=class
                                    >
                                        {link.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </nav>
        </header>
    }
}
