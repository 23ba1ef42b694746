use leptos::prelude::*;

use crate::scroll::scroll_to_top;
use crate::state::UiFlags;

/// Floating bottom-right button, shown once the page is scrolled down.
#[component]
pub fn BackToTop(flags: RwSignal<UiFlags>) -> impl IntoView {
    view! {
        <Show when=move || flags.with(|f| f.show_back_to_top)>
            <button class="back-to-top" aria-label="Back to top" on:click=move |_| scroll_to_top()>
                "↑"
            </button>
        </Show>
    }
}
