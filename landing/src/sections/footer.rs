use leptos::prelude::*;

use super::site_config;

#[component]
pub fn Footer() -> impl IntoView {
    let brand = site_config().brand.name;
    let year = js_sys::Date::new_0().get_full_year();
    view! {
        <footer class="footer">
            <p>{copyright_line(year, &brand)}</p>
        </footer>
    }
}

fn copyright_line(year: u32, brand: &str) -> String {
    format!("© {year} {brand}. All rights reserved.")
}
