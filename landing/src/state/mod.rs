//! Plain state types driven by the page's event handlers.
//!
//! Components keep these inside `RwSignal`s; the types themselves know
//! nothing about Leptos, so their transitions are testable natively.

pub mod carousel;
pub mod contact;
pub mod ui;

pub use carousel::CarouselState;
pub use contact::{ContactField, ContactForm, ContactSubmission};
pub use ui::UiFlags;
