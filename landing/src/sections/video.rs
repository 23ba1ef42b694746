use leptos::prelude::*;

use super::site_config;
use crate::content::{SectionId, video_allow_attr};

#[component]
pub fn Video() -> impl IntoView {
    let video = site_config().video;
    let src = video.embed_url();

    view! {
        <section id=SectionId::Features.anchor() class="video-section">
            <h2>"Check out our demo"</h2>
            <div class="video-wrapper">
                <iframe
                    title=video.title
                    width="100%"
                    height="100%"
                    class="demo-video"
                    src=src
                    allow=video_allow_attr()
                    allowfullscreen=true
                ></iframe>
            </div>
        </section>
    }
}
