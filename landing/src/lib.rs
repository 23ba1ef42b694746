// SafeLine Pickup Landing Page — Leptos 0.8 Edition
// SafeLine Pickup (c)2024

pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod scroll;
pub mod sections;
pub mod state;

use leptos::prelude::*;

use config::SiteConfig;
use scroll::ScrollObserver;
use sections::*;
use state::{ContactForm, UiFlags};

/// Page shell: owns the UI flags, the contact form and the scroll listener.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let flags = RwSignal::new(UiFlags::default());
    let form = RwSignal::new(ContactForm::default());

    let observer = ScrollObserver::acquire(config.scroll.back_to_top_threshold, flags);
    on_cleanup(move || observer.release());

    provide_context(config);

    view! {
        <div class="app-container">
            <Header flags=flags />
            <Hero />
            <Video />
            <Origin />
            <Team />
            <Contact form=form />
            <Footer />
            <BackToTop flags=flags />
        </div>
    }
}
