//! Origin story carousel.
//!
//! A small in-house slider: CSS transform transition, optional autoplay,
//! dot indicators and arrows per `CarouselSettings`.

use std::time::Duration;

use leptos::prelude::*;

use super::site_config;
use crate::config::CarouselSettings;
use crate::content::{SLIDES, SectionId, Slide};
use crate::state::CarouselState;

#[component]
pub fn Origin() -> impl IntoView {
    let settings = site_config().carousel;
    view! {
        <section id=SectionId::Origin.anchor() class="origin-section">
            <h2>"Our Origin Story"</h2>
            <div class="carousel-container">
                <Carousel slides=SLIDES.as_slice() settings=settings />
            </div>
        </section>
    }
}

#[component]
fn Carousel(slides: &'static [Slide], settings: CarouselSettings) -> impl IntoView {
    let state = RwSignal::new(CarouselState::new(slides.len(), &settings));
    let positions = state.with_untracked(CarouselState::positions);

    // Autoplay timer. Re-armed after manual navigation so a click always
    // gets a full interval before the next automatic advance.
    let timer = StoredValue::new(None::<IntervalHandle>);
    let autoplay = settings.autoplay && positions > 1;
    let every = Duration::from_millis(u64::from(settings.autoplay_interval_ms));

    let stop = move || {
        timer.update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.clear();
            }
        });
    };
    let start = move || {
        if !autoplay {
            return;
        }
        stop();
        match set_interval_with_handle(move || state.update(CarouselState::next), every) {
            Ok(handle) => timer.set_value(Some(handle)),
            Err(err) => tracing::warn!(error = ?err, "carousel autoplay unavailable"),
        }
    };
    start();
    on_cleanup(stop);

    let pause_on_hover = settings.pause_on_hover;
    let on_enter = move |_| {
        if pause_on_hover {
            stop();
        }
    };
    let on_leave = move |_| {
        if pause_on_hover {
            start();
        }
    };

    let speed_ms = settings.speed_ms;
    let track_style = move || {
        format!(
            "transform: translateX(-{}%); transition: transform {}ms ease;",
            state.with(CarouselState::track_offset_percent),
            speed_ms
        )
    };
    let slide_width = state.with_untracked(CarouselState::slide_width_percent);

    let arrows = settings.arrows.then(|| {
        view! {
            <button
                class="carousel-arrow prev"
                aria-label="Previous slide"
                on:click=move |_| {
                    state.update(CarouselState::prev);
                    start();
                }
            >
                "‹"
            </button>
            <button
                class="carousel-arrow next"
                aria-label="Next slide"
                on:click=move |_| {
                    state.update(CarouselState::next);
                    start();
                }
            >
                "›"
            </button>
        }
    });

    let dots = settings.dots.then(|| {
        view! {
            <ul class="carousel-dots">
                {(0..positions)
                    .map(|i| {
                        view! {
                            <li class=move || if state.with(CarouselState::current) == i { "active" } else { "" }>
                                <button
                                    aria-label=format!("Go to slide {}", i + 1)
                                    on:click=move |_| {
                                        state.update(|c| c.go_to(i));
                                        start();
                                    }
                                ></button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        }
    });

    view! {
        <div class="carousel" on:mouseenter=on_enter on:mouseleave=on_leave>
            <div class="carousel-viewport">
                <div class="carousel-track" style=track_style>
                    {slides
                        .iter()
                        .map(|slide| view! { <SlideCard slide=*slide width_percent=slide_width /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
            {arrows}
            {dots}
        </div>
    }
}

/// Image on the left, text on the right.
#[component]
fn SlideCard(slide: Slide, width_percent: f64) -> impl IntoView {
    view! {
        <div class="slide" style=format!("flex-basis: {width_percent}%;")>
            <div class="slide-content">
                <div class="slide-image-container hover-grow">
                    <img src=slide.image_path alt=slide.title class="slide-image" />
                </div>
                <div class="slide-text-container">
                    <h3>{slide.title}</h3>
                    <p>{slide.description}</p>
                </div>
            </div>
        </div>
    }
}
